//! Shape Factory - the Factory Method pattern over drawable shapes
//!
//! A [`ShapeCreator`] supplies the factory method that builds a [`Drawable`];
//! the fixed template operation [`ShapeCreatorExt::create`] turns that product
//! into a description. Client code depends only on the creator trait, so new
//! shape/creator pairs plug in without touching it.
//!
//! A name-keyed simple factory ([`shape_factory`], [`ShapeKind`]) sits next to
//! the pattern for callers that select shapes at runtime.
//!
//! # Example
//!
//! ```rust
//! use shape_factory::{client_code, SquareCreator};
//!
//! let mut out = Vec::new();
//! client_code(&mut out, &SquareCreator).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "ShapeCreator: Created shape - Drawing a square\n"
//! );
//! ```

pub mod client;
pub mod creator;
pub mod error;
pub mod factory;
pub mod shape;

pub use client::{client_code, run_app};
pub use creator::{CircleCreator, ShapeCreator, ShapeCreatorExt, SquareCreator, CREATED_PREFIX};
pub use error::{AppError, FactoryError};
pub use factory::{run_simple_factory, shape_details, shape_factory, write_shape_report, ShapeKind};
pub use shape::{Circle, Drawable, NamedShape, Square};
