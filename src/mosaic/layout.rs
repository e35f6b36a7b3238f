//! Tile layout solver.
//!
//! Picks the largest uniform square tile edge such that a given number of
//! tiles, each with a fixed border and separated by a fixed gap, fit inside
//! a bounding box under grid-wrap layout.
//!
//! Exact packing of equal squares into a fixed-aspect box with a target
//! count has no usable closed form once borders, gaps and rounding enter the
//! picture, so the solver starts from the closed-form estimate for the
//! unconstrained case and walks downward, verifying each candidate. The
//! walk is bounded by `max_tile_px - min_tile_px` iterations, each O(1).

// Tile sizes are tiny; the float round trips below cannot truncate.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

/// Immutable input to the tile layout solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    /// Number of tiles to place. Must be at least 1; the render layer never
    /// invokes the solver for an empty grid.
    pub item_count: usize,
    /// Bounding box width in pixels
    pub box_width_px: u32,
    /// Bounding box height in pixels
    pub box_height_px: u32,
    /// Smallest acceptable tile edge (content size, borders excluded)
    pub min_tile_px: u32,
    /// Largest acceptable tile edge
    pub max_tile_px: u32,
    /// Gap between adjacent tiles
    pub gap_px: u32,
    /// Border width on each tile edge
    pub border_px: u32,
}

/// Solves for the largest tile edge in `[min_tile_px, max_tile_px]` such
/// that `item_count` tiles fit the box, wrapping into rows.
///
/// When even `min_tile_px` overflows the box the minimum is returned as a
/// graceful floor; the grid then scrolls rather than failing. The result is
/// always within range and never an error.
///
/// # Examples
///
/// ```
/// use memomosaic::mosaic::{solve, LayoutRequest};
///
/// let size = solve(&LayoutRequest {
///     item_count: 100,
///     box_width_px: 900,
///     box_height_px: 800,
///     min_tile_px: 6,
///     max_tile_px: 8,
///     gap_px: 0,
///     border_px: 1,
/// });
/// assert_eq!(size, 8);
/// ```
#[must_use]
pub fn solve(req: &LayoutRequest) -> u32 {
    debug_assert!(req.item_count > 0, "solver requires at least one tile");

    let overhead = f64::from(2 * req.border_px + req.gap_px);
    let area = f64::from(req.box_width_px) * f64::from(req.box_height_px);
    let estimate = ((area / req.item_count as f64).sqrt() - overhead).floor();
    // The estimate is an upper bound for the unconstrained packing; clamp it
    // into the configured range and verify downward from there.
    let upper = estimate.clamp(f64::from(req.min_tile_px), f64::from(req.max_tile_px)) as u32;

    let box_w = u64::from(req.box_width_px);
    let box_h = u64::from(req.box_height_px);
    let gap = u64::from(req.gap_px);

    for size in (req.min_tile_px..=upper).rev() {
        let footprint = u64::from(size + 2 * req.border_px);
        if footprint + gap == 0 {
            continue;
        }

        let columns = (box_w + gap) / (footprint + gap);
        if columns == 0 {
            continue;
        }

        let occupied_width = columns * footprint + (columns - 1) * gap;
        if occupied_width > box_w {
            continue;
        }

        let rows = (req.item_count as u64).div_ceil(columns);
        let occupied_height = rows * footprint + (rows - 1) * gap;
        if occupied_height <= box_h {
            // First fit wins: descending order makes this the largest
            // fitting size at or below the estimate.
            return size;
        }
    }

    req.min_tile_px
}
