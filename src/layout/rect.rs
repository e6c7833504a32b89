//! Rect: A floating-point rectangle primitive for layout calculations.

use super::axis::Axis;

/// A rectangle defined by position and size in chart units.
///
/// The origin is the top-left corner; `y` grows downward, matching the
/// terminal grid the chart is eventually rasterised onto.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f64,
    /// Y coordinate of the top-left corner.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Get the area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if the rectangle covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the centre point.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Start coordinate along an axis.
    #[inline]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent along an axis.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle overlaps another with non-zero area.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Take a band of `size` starting at absolute coordinate `start` along
    /// `axis`, keeping the full extent on the other axis.
    #[inline]
    #[must_use]
    pub fn band(&self, axis: Axis, start: f64, size: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(start, self.y, size, self.height),
            Axis::Vertical => Self::new(self.x, start, self.width, size),
        }
    }

    /// Split along an axis at an offset from the start edge.
    ///
    /// The offset is clamped into `[0, extent]`.
    pub fn split_at(&self, axis: Axis, offset: f64) -> (Self, Self) {
        let start = self.start(axis);
        let extent = self.extent(axis);
        let offset = offset.clamp(0.0, extent);
        (
            self.band(axis, start, offset),
            self.band(axis, start + offset, extent - offset),
        )
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    #[inline]
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Rect> for (f64, f64, f64, f64) {
    #[inline]
    fn from(rect: Rect) -> Self {
        (rect.x, rect.y, rect.width, rect.height)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
