use crate::Size;

/// An axis-aligned rectangle, as reported by a bounding box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner at the given
    /// coordinates and with the provided [`Size`].
    pub const fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] at the origin with the provided [`Size`].
    pub const fn with_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
