//! Buffer module: the cell canvas charts are rasterised onto.
//!
//! This module contains:
//! - [`Cell`]: one styled character position
//! - [`Canvas`]: a row-major grid of cells
//! - [`Rgb`]: true-color representation
//! - [`Modifiers`]: text style bitflags

mod canvas;
mod cell;

pub use canvas::{text_width, truncate_to_width, Canvas};
pub use cell::{Cell, CellFlags, Modifiers, Rgb};
