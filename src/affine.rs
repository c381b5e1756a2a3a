//! Geometry primitives and the affine map between logical and screen space.
//!
//! Logical space is the fixed-size board image (1920×1080 design pixels). Screen
//! space is the window's client area. [`AffineTransform`] maps one onto the
//! other with an independent scale and offset per axis.

#[cfg(test)]
#[path = "affine_test.rs"]
mod affine_test;

use serde::Serialize;

use crate::error::LayoutError;

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
///
/// Membership is half-open: the left and top edges belong to the rectangle,
/// the right and bottom edges do not. Adjacent cells therefore never share a
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether `p` lies inside this rectangle (half-open on right/bottom).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x < self.right() && self.y <= p.y && p.y < self.bottom()
    }

    /// Whether the two rectangles share any interior area.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Scale and offset of the logical → screen mapping.
///
/// Always replaced as a whole; see [`AffineTransform::set_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineState {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for AffineState {
    fn default() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl AffineState {
    /// Build a state, rejecting zero or non-finite scales and non-finite offsets.
    pub fn new(scale_x: f64, scale_y: f64, offset_x: f64, offset_y: f64) -> Result<Self, LayoutError> {
        for (axis, scale) in [("x", scale_x), ("y", scale_y)] {
            if !scale.is_finite() || scale == 0.0 {
                return Err(LayoutError::invalid(format!("scale_{axis} must be finite and non-zero, got {scale}")));
            }
        }
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(LayoutError::invalid(format!("offset must be finite, got ({offset_x}, {offset_y})")));
        }
        Ok(Self { scale_x, scale_y, offset_x, offset_y })
    }
}

/// The installed logical ↔ screen mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffineTransform {
    state: AffineState,
}

impl AffineTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current scale and offset.
    #[must_use]
    pub fn state(&self) -> AffineState {
        self.state
    }

    /// Replace the mapping. On error the previous mapping stays installed.
    pub fn set_matrix(&mut self, scale_x: f64, scale_y: f64, offset_x: f64, offset_y: f64) -> Result<(), LayoutError> {
        self.state = AffineState::new(scale_x, scale_y, offset_x, offset_y)?;
        Ok(())
    }

    /// Replace the mapping with an already-built state.
    pub fn install(&mut self, state: AffineState) -> Result<(), LayoutError> {
        self.set_matrix(state.scale_x, state.scale_y, state.offset_x, state.offset_y)
    }

    /// Logical → screen.
    #[must_use]
    pub fn affine(&self, p: Point) -> Point {
        let s = &self.state;
        Point { x: p.x * s.scale_x + s.offset_x, y: p.y * s.scale_y + s.offset_y }
    }

    /// Screen → logical.
    #[must_use]
    pub fn inverse_affine(&self, p: Point) -> Point {
        let s = &self.state;
        Point { x: (p.x - s.offset_x) / s.scale_x, y: (p.y - s.offset_y) / s.scale_y }
    }

    /// Scale a logical size to screen pixels. Offsets do not apply.
    #[must_use]
    pub fn affine_size(&self, size: Size) -> Size {
        Size { width: size.width * self.state.scale_x, height: size.height * self.state.scale_y }
    }

    /// Map a logical rectangle to screen space.
    #[must_use]
    pub fn affine_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(self.affine(rect.origin()), self.affine_size(rect.size()))
    }
}
