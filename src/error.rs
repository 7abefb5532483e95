//! Error types for the shape factory and the demo application

use thiserror::Error;

/// Errors raised by the name-keyed shape factory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unsupported shape type: {0}")]
    UnsupportedShape(String),
}

/// Errors that can occur while running the demo sequence
#[derive(Error, Debug)]
pub enum AppError {
    /// The output sink rejected a write
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
