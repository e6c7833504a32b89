//! Error types for layout, chart construction and terminal output.

use crate::layout::Rect;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TreemapError>;

/// Errors surfaced by the treemap layout and its renderers.
#[derive(Debug, Error)]
pub enum TreemapError {
    /// The weights do not sum to a positive, finite total.
    #[error("weights must sum to a positive finite total, got {total}")]
    InvalidTotal {
        /// Sum of the rejected weights.
        total: f64,
    },

    /// A single weight is negative or not finite.
    #[error("weight at index {index} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Position of the weight in the input sequence.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// The region has negative extents or non-finite coordinates.
    #[error("region {rect:?} must have finite coordinates and non-negative extents")]
    InvalidRegion {
        /// The rejected region.
        rect: Rect,
    },

    /// A chart was given fewer labels than values.
    #[error("{values} values but only {labels} labels")]
    LabelCount {
        /// Number of values.
        values: usize,
        /// Number of labels.
        labels: usize,
    },

    /// A canvas was requested with a zero dimension.
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    EmptyCanvas {
        /// Requested width in columns.
        width: u16,
        /// Requested height in rows.
        height: u16,
    },

    /// A `label=value` entry could not be parsed.
    #[error("invalid entry `{0}`: expected label=value")]
    ParseEntry(String),

    /// Writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
