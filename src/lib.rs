//! # Tessera
//!
//! Proportional treemap layout with true-colour terminal rendering.
//!
//! The core is [`layout`]: a region is sliced along its long axis into one
//! band per weight, with band areas proportional to the weights. The bands
//! tile the region exactly, in input order.
//!
//! ## Core Concepts
//!
//! - **Single-pass slicing**: one flat pass, no recursion, no tree
//! - **Shared edges**: each band starts where the previous one ended
//! - **Canvas rendering**: tiles are snapped to a cell grid, filled from a
//!   constant palette and labelled
//! - **Single-write output**: the whole chart is flushed in one write
//!
//! ## Example
//!
//! ```rust
//! use tessera::{layout, Rect};
//!
//! let rects = layout(Rect::from_size(100.0, 100.0), &[1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(rects[2], Rect::new(0.0, 50.0, 100.0, 50.0));
//! ```
//!
//! ```rust,no_run
//! use tessera::TreeMap;
//!
//! let chart = TreeMap::new(vec![38.1, 61.5, 33.9], ["Petrobras", "Vale", "Itaú"])?;
//! chart.plot(&mut std::io::stdout(), 80, 24)?;
//! # Ok::<(), tessera::TreemapError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod chart;
pub mod error;
pub mod layout;
pub mod palette;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Canvas, Cell, CellFlags, Modifiers, Rgb};
pub use chart::{CellSpan, ChartConfig, Entry, Tile, TreeMap};
pub use error::{Result, TreemapError};
pub use layout::{layout, proportions, Axis, Rect};
pub use palette::{Palette, GRAYSCALE, TAB20C};
pub use terminal::{render_full, OutputBuffer};
