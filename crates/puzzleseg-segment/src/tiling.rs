//! Uniform grid tiling
//!
//! Given a grid region and an estimated cell size, lay out
//! `round(width / cell_w)` by `round(height / cell_h)` equal tiles. The
//! step is recomputed from the rounded counts so the tiles cover the
//! region exactly; each tile is then shrunk by a margin to keep grid
//! lines and neighbouring glyphs out.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SegError, SegResult};
use crate::pitch::{PitchFallback, pitch_or_fallback};
use puzzleseg_core::{BoxPosition, LetterBox, Region};

/// Options for [`tile_region`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileOptions {
    /// Pixels removed from each side of a tile
    pub margin: u32,
    /// Tiles narrower or shorter than this after the margin are dropped
    pub min_tile_size: u32,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            margin: 2,
            min_tile_size: 3,
        }
    }
}

impl TileOptions {
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_min_tile_size(mut self, size: u32) -> Self {
        self.min_tile_size = size;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        if self.min_tile_size == 0 {
            return Err(SegError::InvalidParameter(
                "tile.min_tile_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A uniform tiling of a grid region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    /// Horizontal step actually used (`width / cols`)
    pub cell_width: f64,
    /// Vertical step actually used (`height / rows`)
    pub cell_height: f64,
    /// Row-major tiles; undersized tiles are omitted
    pub cells: Vec<LetterBox>,
}

impl GridLayout {
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cell_width: 0.0,
            cell_height: 0.0,
            cells: Vec::new(),
        }
    }

    /// The tile at `(row, col)`, if it was kept
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&LetterBox> {
        self.cells.iter().find(|c| c.cell() == Some((row, col)))
    }
}

/// Number of whole cells of size `cell` along `extent`, at least one.
fn cell_count(extent: f64, cell: f64) -> usize {
    ((extent / cell).round() as usize).max(1)
}

/// Tile `region` into cells of roughly `cell_w` x `cell_h` pixels.
///
/// Tile `(r, c)` spans columns `round(x0 + c * step_x) + margin` through
/// `round(x0 + (c + 1) * step_x) - 1 - margin`, and likewise for rows.
/// A cell size below `fallback.min_cell_size` (or not finite) is replaced
/// by the fallback size for that axis.
///
/// # Example
/// ```
/// use puzzleseg_core::Region;
/// use puzzleseg_segment::pitch::PitchFallback;
/// use puzzleseg_segment::tiling::{TileOptions, tile_region};
///
/// let layout = tile_region(
///     &Region::new_unchecked(0, 0, 99, 9),
///     10.0,
///     10.0,
///     &TileOptions::default().with_margin(0),
///     &PitchFallback::default(),
/// );
/// assert_eq!((layout.rows, layout.cols), (1, 10));
/// assert_eq!(layout.cell_at(0, 3).unwrap().region, Region::new_unchecked(30, 0, 39, 9));
/// ```
pub fn tile_region(
    region: &Region,
    cell_w: f64,
    cell_h: f64,
    options: &TileOptions,
    fallback: &PitchFallback,
) -> GridLayout {
    if !region.is_valid() {
        debug!("tile_region: degenerate region {region}");
        return GridLayout::empty();
    }

    let cell_w = pitch_or_fallback(cell_w, region.width() as u32, fallback);
    let cell_h = pitch_or_fallback(cell_h, region.height() as u32, fallback);
    let width = region.width() as f64;
    let height = region.height() as f64;
    let cols = cell_count(width, cell_w);
    let rows = cell_count(height, cell_h);
    let step_x = width / cols as f64;
    let step_y = height / rows as f64;
    let margin = options.margin as i32;
    let min_size = options.min_tile_size as i32;

    let mut cells = Vec::new();
    let reserved = rows
        .checked_mul(cols)
        .is_some_and(|n| cells.try_reserve(n).is_ok());
    if !reserved {
        warn!("tile_region: cannot allocate {rows}x{cols} tiles");
        return GridLayout::empty();
    }

    let edge =
        |origin: i32, step: f64, i: usize| (origin as f64 + i as f64 * step).round() as i32;
    for r in 0..rows {
        let y0 = edge(region.y0, step_y, r) + margin;
        let y1 = edge(region.y0, step_y, r + 1) - 1 - margin;
        for c in 0..cols {
            let x0 = edge(region.x0, step_x, c) + margin;
            let x1 = edge(region.x0, step_x, c + 1) - 1 - margin;
            let tile = Region::new_unchecked(x0, y0, x1, y1);
            if tile.width() < min_size || tile.height() < min_size {
                trace!("tile_region: dropping undersized tile ({r}, {c}) {tile}");
                continue;
            }
            cells.push(LetterBox::new(tile, BoxPosition::Cell { row: r, col: c }));
        }
    }

    debug!(
        "tile_region: {rows}x{cols} tiles of {step_x:.1}x{step_y:.1} over {region}, kept {}",
        cells.len()
    );

    GridLayout {
        rows,
        cols,
        cell_width: step_x,
        cell_height: step_y,
        cells,
    }
}
