//! Name-keyed simple factory
//!
//! Where [`ShapeCreator`] picks the product by type, this module picks it from
//! a runtime string. Both routes produce the same shapes.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::creator::{CircleCreator, ShapeCreator, SquareCreator};
use crate::error::{AppError, FactoryError};
use crate::shape::{Circle, Drawable, NamedShape, Square};

/// The closed set of shapes this crate knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    /// Every known kind, in declaration order
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];

    /// The lookup key accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        }
    }

    /// Construct the product for this kind
    pub fn build(self) -> Box<dyn NamedShape> {
        match self {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Square => Box::new(Square),
        }
    }

    /// The factory-method creator bound to this kind
    pub fn creator(self) -> Box<dyn ShapeCreator> {
        match self {
            ShapeKind::Circle => Box::new(CircleCreator),
            ShapeKind::Square => Box::new(SquareCreator),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            other => Err(FactoryError::UnsupportedShape(other.to_string())),
        }
    }
}

/// Build a shape from its lookup key
///
/// # Example
///
/// ```rust
/// use shape_factory::{shape_factory, Drawable};
///
/// let shape = shape_factory("square").unwrap();
/// assert_eq!(shape.draw(), "Drawing a square");
/// assert!(shape_factory("triangle").is_err());
/// ```
pub fn shape_factory(name: &str) -> Result<Box<dyn NamedShape>, FactoryError> {
    let kind: ShapeKind = name.parse()?;
    Ok(kind.build())
}

/// Two-line summary of a shape: its name, then its drawing
pub fn shape_details(shape: &dyn NamedShape) -> String {
    format!("Shape Name: {}\n{}", shape.name(), shape.draw())
}

/// Look up each name and write its details block, or the lookup error
///
/// Every block is followed by a blank line; an unknown name writes only the
/// error message.
pub fn write_shape_report<W: Write + ?Sized>(out: &mut W, names: &[&str]) -> Result<(), AppError> {
    for name in names {
        match shape_factory(name) {
            Ok(shape) => {
                writeln!(out, "{}", shape_details(shape.as_ref()))?;
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
    Ok(())
}

/// Write the simple-factory demo: a circle, a square, then an unsupported triangle
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// shape_factory::run_simple_factory(&mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("Unsupported shape type: triangle\n"));
/// ```
pub fn run_simple_factory<W: Write + ?Sized>(out: &mut W) -> Result<(), AppError> {
    write_shape_report(out, &["circle", "square", "triangle"])?;
    out.flush()?;
    Ok(())
}
