//! Creators: the factory method and its fixed template operation
//!
//! [`ShapeCreator`] is the point of variation: each implementor decides which
//! [`Drawable`] it produces. The surrounding algorithm lives in
//! [`ShapeCreatorExt::create`], which is blanket-implemented for every creator
//! and therefore cannot be replaced by an implementor.
//!
//! # Example
//!
//! ```rust
//! use shape_factory::{CircleCreator, ShapeCreatorExt};
//!
//! assert_eq!(
//!     CircleCreator.create(),
//!     "ShapeCreator: Created shape - Drawing a circle"
//! );
//! ```

use crate::shape::{Circle, Drawable, Square};

/// Prefix prepended to every description produced by [`ShapeCreatorExt::create`]
pub const CREATED_PREFIX: &str = "ShapeCreator: Created shape - ";

/// A creator of drawable shapes
pub trait ShapeCreator {
    /// Factory method: build a fresh shape
    fn create_shape(&self) -> Box<dyn Drawable>;
}

/// Template operation shared by all creators
pub trait ShapeCreatorExt: ShapeCreator {
    /// Build a shape through the factory method and describe it
    fn create(&self) -> String {
        let shape = self.create_shape();
        format!("{}{}", CREATED_PREFIX, shape.draw())
    }
}

impl<T: ShapeCreator + ?Sized> ShapeCreatorExt for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CircleCreator;

impl ShapeCreator for CircleCreator {
    fn create_shape(&self) -> Box<dyn Drawable> {
        Box::new(Circle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareCreator;

impl ShapeCreator for SquareCreator {
    fn create_shape(&self) -> Box<dyn Drawable> {
        Box::new(Square)
    }
}
