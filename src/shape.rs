//! Products: the drawable capability and its concrete shapes

/// Something that can describe how it is drawn
pub trait Drawable {
    /// Human-readable description of drawing this shape
    fn draw(&self) -> String;
}

/// A drawable with a display name, used by the name-keyed factory
pub trait NamedShape: Drawable {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle;

impl Drawable for Circle {
    fn draw(&self) -> String {
        "Drawing a circle".to_string()
    }
}

impl NamedShape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Square;

impl Drawable for Square {
    fn draw(&self) -> String {
        "Drawing a square".to_string()
    }
}

impl NamedShape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }
}
