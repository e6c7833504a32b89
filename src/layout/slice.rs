//! Proportional slicing: the treemap layout algorithm.
//!
//! A region is cut into one band per weight along its long axis. Band
//! extents are proportional to the weights and each band spans the full
//! region on the other axis.
//!
//! # Edge sharing
//!
//! Band targets come from the running cumulative fraction, never from a
//! per-band recomputation. Each band then starts at the previous band's
//! start plus its extent, so band `i` begins exactly where band `i - 1`
//! ends even under floating-point rounding. The last band is stretched to
//! the region's far edge.
//!
//! ```text
//!   weights: [1, 1, 2]          fractions: 0.25  0.50  1.00
//!   ┌──────────┐ y = 0
//!   │  band 0  │
//!   ├──────────┤ y = 25   ← end of band 0 == start of band 1
//!   │  band 1  │
//!   ├──────────┤ y = 50
//!   │          │
//!   │  band 2  │
//!   └──────────┘ y = 100  ← pinned to region bottom
//! ```

use super::{Axis, Rect};
use crate::error::{Result, TreemapError};

/// Lay out `weights` inside `region`, one rectangle per weight, in input
/// order.
///
/// The slicing axis is picked once from the region: strictly wider
/// regions are sliced left to right, everything else top to bottom.
///
/// An empty weight slice yields an empty layout without inspecting the
/// region. Zero weights are allowed and produce zero-extent bands, but
/// the weights must sum to a positive total.
///
/// # Example
///
/// ```
/// use tessera::{layout, Rect};
///
/// let rects = layout(Rect::new(0.0, 0.0, 200.0, 50.0), &[1.0, 3.0]).unwrap();
/// assert_eq!(rects[0], Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(rects[1], Rect::new(50.0, 0.0, 150.0, 50.0));
/// ```
pub fn layout(region: Rect, weights: &[f64]) -> Result<Vec<Rect>> {
    if weights.is_empty() {
        return Ok(Vec::new());
    }
    validate_region(region)?;

    let fractions = proportions(weights)?;
    let axis = Axis::long_axis(region.width, region.height);
    let start = region.start(axis);
    let extent = region.extent(axis);
    let end = start + extent;
    let last = fractions.len() - 1;

    let mut rects = Vec::with_capacity(fractions.len());
    let mut edge = start;
    for (i, fraction) in fractions.iter().enumerate() {
        let target = if i == last {
            end
        } else {
            start + fraction * extent
        };
        let size = (target - edge).max(0.0);
        rects.push(region.band(axis, edge, size));
        edge += size;
    }

    tracing::trace!(?axis, ?region, tiles = rects.len(), "sliced region");
    Ok(rects)
}

/// Cumulative fractions of the total, one per weight.
///
/// Entry `i` is `(w[0] + .. + w[i]) / total`: the far edge of band `i`
/// as a fraction of the sliced extent. The sequence is non-decreasing and
/// the total is the same running sum, so the final entry is `1.0`.
pub fn proportions(weights: &[f64]) -> Result<Vec<f64>> {
    let mut cumulative = Vec::with_capacity(weights.len());
    let mut running = 0.0_f64;
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(TreemapError::InvalidWeight { index, value });
        }
        running += value;
        cumulative.push(running);
    }

    let total = running;
    if !total.is_finite() || total <= 0.0 {
        return Err(TreemapError::InvalidTotal { total });
    }

    for sum in &mut cumulative {
        *sum /= total;
    }
    Ok(cumulative)
}

fn validate_region(region: Rect) -> Result<()> {
    // The far edges must be finite too: `x + width` can overflow.
    if region.is_finite()
        && region.width >= 0.0
        && region.height >= 0.0
        && region.right().is_finite()
        && region.bottom().is_finite()
    {
        Ok(())
    } else {
        Err(TreemapError::InvalidRegion { rect: region })
    }
}
