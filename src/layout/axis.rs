//! Axis: the direction a region is sliced along.

/// Slicing direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// Slice along the width: tiles sit side by side.
    Horizontal,
    /// Slice along the height: tiles are stacked.
    Vertical,
}

impl Axis {
    /// Pick the axis to slice a `width x height` region along.
    ///
    /// Strictly wider regions slice horizontally; square and tall regions
    /// slice vertically.
    #[inline]
    pub fn long_axis(width: f64, height: f64) -> Self {
        if width > height {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// The perpendicular axis.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_axis() {
        assert_eq!(Axis::long_axis(200.0, 50.0), Axis::Horizontal);
        assert_eq!(Axis::long_axis(50.0, 200.0), Axis::Vertical);
    }

    #[test]
    fn test_square_slices_vertically() {
        assert_eq!(Axis::long_axis(100.0, 100.0), Axis::Vertical);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
