//! Layout module: proportional slicing of a region into tiles.
//!
//! Layouts are pure functions of a region and a weight slice. There is no
//! tree and no recursion: one pass yields a flat `Vec<Rect>`.

mod axis;
mod rect;
mod slice;

pub use axis::Axis;
pub use rect::Rect;
pub use slice::{layout, proportions};
