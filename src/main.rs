//! Shape Factory CLI
//!
//! Usage:
//!   shape-factory
//!
//! Prints the Factory Method demo for a circle and a square.

use std::io;

use clap::Parser;

use shape_factory::run_app;

#[derive(Parser)]
#[command(name = "shape-factory")]
#[command(version, about = "Factory Method pattern demo over drawable shapes")]
struct Cli {}

fn main() {
    Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_app(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
