//! Grid letter segmentation
//!
//! Two strategies are available for the grid zone:
//!
//! - [`GridStrategy::Tiled`] measures the cell pitch on both axes from
//!   smoothed profiles and lays a uniform tiling over the zone. A fully
//!   blank row or column does not disturb the layout because the pitch is
//!   a median.
//! - [`GridStrategy::Nested`] reuses the word-list band/column engine on
//!   the ink-tightened zone. It follows the ink more closely, but a blank
//!   row simply disappears from the output.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{SegResult, check_range};
use crate::letters::{LetterOptions, segment_bands_and_columns};
use crate::pitch::{PitchFallback, estimate_pitch};
use crate::profile::{ink_profile, smooth_profile};
use crate::refine::refine_or_keep;
use crate::runs::find_runs;
use crate::tiling::{TileOptions, tile_region};
use puzzleseg_core::{Axis, BoxPosition, Interval, LetterBox, PixelSource, Region};

/// How the grid zone is cut into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStrategy {
    /// Bands then letters, as for the word list
    Nested,
    /// Uniform tiling at the measured pitch
    #[default]
    Tiled,
}

/// Options for [`segment_grid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub strategy: GridStrategy,
    /// Band and letter options for the nested strategy
    pub letters: LetterOptions,
    /// Smoothing window for the tiled strategy's profiles
    pub smooth_window: usize,
    /// Ink ratio a grid row or column must exceed (tiled)
    pub fill_threshold: f64,
    /// Bridgeable gap when measuring the pitch (tiled)
    pub gap: u32,
    pub tile: TileOptions,
    pub fallback: PitchFallback,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            strategy: GridStrategy::Tiled,
            letters: LetterOptions::default(),
            smooth_window: 3,
            fill_threshold: 0.10,
            gap: 2,
            tile: TileOptions::default(),
            fallback: PitchFallback::default(),
        }
    }
}

impl GridOptions {
    pub fn with_strategy(mut self, strategy: GridStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_letters(mut self, letters: LetterOptions) -> Self {
        self.letters = letters;
        self
    }

    pub fn with_smooth_window(mut self, window: usize) -> Self {
        self.smooth_window = window;
        self
    }

    pub fn with_fill_threshold(mut self, threshold: f64) -> Self {
        self.fill_threshold = threshold;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_tile(mut self, tile: TileOptions) -> Self {
        self.tile = tile;
        self
    }

    pub fn with_fallback(mut self, fallback: PitchFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        check_range("grid.fill_threshold", self.fill_threshold, 0.0, 1.0)?;
        self.letters.validate()?;
        self.tile.validate()?;
        self.fallback.validate()
    }
}

/// Result of [`segment_grid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSegmentation {
    /// Strategy that produced the cells
    pub strategy: GridStrategy,
    /// Region the cells were laid out in
    pub region: Region,
    rows: usize,
    cols: usize,
    /// Estimated cell width in pixels (0.0 if unknown)
    pub cell_width: f64,
    /// Estimated cell height in pixels (0.0 if unknown)
    pub cell_height: f64,
    /// Cells in row-major order
    pub cells: Vec<LetterBox>,
}

impl GridSegmentation {
    fn empty(strategy: GridStrategy, region: Region) -> Self {
        Self {
            strategy,
            region,
            rows: 0,
            cols: 0,
            cell_width: 0.0,
            cell_height: 0.0,
            cells: Vec::new(),
        }
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, if one was emitted
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&LetterBox> {
        self.cells.iter().find(|c| c.cell() == Some((row, col)))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &LetterBox> + '_ {
        self.cells
            .iter()
            .filter(move |c| matches!(c.position, BoxPosition::Cell { row: r, .. } if r == row))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Segment the grid zone into cells.
pub fn segment_grid<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    options: &GridOptions,
    black_threshold: u8,
) -> GridSegmentation {
    let Some(r) = region.clamp_to(src.width(), src.height()) else {
        debug!("segment_grid: degenerate region {region}");
        return GridSegmentation::empty(options.strategy, *region);
    };

    let seg = match options.strategy {
        GridStrategy::Tiled => segment_tiled(src, &r, options, black_threshold),
        GridStrategy::Nested => segment_nested(src, &r, options, black_threshold),
    };
    debug!(
        "segment_grid: {:?} {}x{} grid, {} cells, pitch {:.1}x{:.1}",
        seg.strategy,
        seg.rows,
        seg.cols,
        seg.cells.len(),
        seg.cell_width,
        seg.cell_height
    );
    seg
}

fn axis_runs<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    axis: Axis,
    options: &GridOptions,
    black_threshold: u8,
) -> Vec<Interval> {
    let raw = ink_profile(src, region, black_threshold, axis);
    let smoothed = smooth_profile(&raw, options.smooth_window);
    find_runs(&smoothed, options.fill_threshold, options.gap)
}

fn segment_tiled<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    options: &GridOptions,
    black_threshold: u8,
) -> GridSegmentation {
    let col_runs = axis_runs(src, region, Axis::Columns, options, black_threshold);
    let row_runs = axis_runs(src, region, Axis::Rows, options, black_threshold);

    let pitch_x = estimate_pitch(&col_runs);
    let pitch_y = estimate_pitch(&row_runs);
    debug!(
        "segment_grid: {} column runs, {} row runs, pitch {pitch_x:.1}x{pitch_y:.1}",
        col_runs.len(),
        row_runs.len()
    );

    let layout = tile_region(region, pitch_x, pitch_y, &options.tile, &options.fallback);
    GridSegmentation {
        strategy: GridStrategy::Tiled,
        region: *region,
        rows: layout.rows,
        cols: layout.cols,
        cell_width: layout.cell_width,
        cell_height: layout.cell_height,
        cells: layout.cells,
    }
}

fn segment_nested<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    options: &GridOptions,
    black_threshold: u8,
) -> GridSegmentation {
    let tight = refine_or_keep(src, region, black_threshold);
    let found = segment_bands_and_columns(src, &tight, &options.letters, black_threshold);

    let mut seg = GridSegmentation::empty(GridStrategy::Nested, tight);
    seg.rows = found.len();
    seg.cols = found.iter().map(|b| b.letters.len()).max().unwrap_or(0);

    let bands: Vec<Interval> = found
        .iter()
        .map(|b| Interval::new(b.band.y_start, b.band.y_end))
        .collect();
    seg.cell_height = estimate_pitch(&bands);
    if let Some(widest) = found.iter().max_by_key(|b| b.letters.len()) {
        let letters: Vec<Interval> = widest
            .letters
            .iter()
            .map(|l| Interval::new(l.x0 as u32, l.x1 as u32))
            .collect();
        seg.cell_width = estimate_pitch(&letters);
    }

    for (row, entry) in found.into_iter().enumerate() {
        for (col, letter) in entry.letters.into_iter().enumerate() {
            seg.cells.push(LetterBox::new(letter, BoxPosition::Cell { row, col }));
        }
    }
    seg
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzleseg_core::{Pix, PixelDepth};

    /// `n` x `n` grid of 10x12 glyphs at a 20px pitch starting at (10, 10)
    fn grid_page(n: usize, blank_row: Option<usize>) -> Pix {
        let size = 20 * n as u32 + 20;
        let mut pm = Pix::new_filled(size, size, PixelDepth::Bit8, 255).unwrap().to_mut();
        for r in 0..n {
            if Some(r) == blank_row {
                continue;
            }
            for c in 0..n {
                let (x0, y0) = (10 + 20 * c as u32 + 5, 10 + 20 * r as u32 + 4);
                for y in y0..y0 + 12 {
                    for x in x0..x0 + 10 {
                        pm.set_pixel(x, y, 0).unwrap();
                    }
                }
            }
        }
        pm.into()
    }

    fn zone(n: usize) -> Region {
        Region::new_unchecked(10, 10, 10 + 20 * n as i32 - 1, 10 + 20 * n as i32 - 1)
    }

    #[test]
    fn test_tiled_square_grid() {
        let pix = grid_page(5, None);
        let seg = segment_grid(&pix, &zone(5), &GridOptions::default(), 128);
        assert_eq!(seg.strategy, GridStrategy::Tiled);
        assert_eq!((seg.rows(), seg.cols()), (5, 5));
        assert_eq!(seg.cells.len(), 25);
        assert_eq!(seg.cell_width, 20.0);
        // cell (2, 3) covers x 70..=89, y 50..=69 less the margin
        assert_eq!(seg.cell_at(2, 3).unwrap().region, Region::new_unchecked(72, 52, 87, 67));
        assert_eq!(seg.row(4).count(), 5);
    }

    #[test]
    fn test_tiled_survives_blank_row() {
        let pix = grid_page(5, Some(2));
        let seg = segment_grid(&pix, &zone(5), &GridOptions::default(), 128);
        assert_eq!((seg.rows(), seg.cols()), (5, 5));
        assert!(seg.cell_at(3, 0).is_some());
    }

    #[test]
    fn test_nested_grid() {
        let pix = grid_page(4, None);
        let opts = GridOptions::default().with_strategy(GridStrategy::Nested);
        let seg = segment_grid(&pix, &zone(4), &opts, 128);
        assert_eq!((seg.rows(), seg.cols()), (4, 4));
        assert_eq!(seg.region, Region::new_unchecked(15, 14, 84, 85));
        assert_eq!(seg.cell_at(1, 2).unwrap().region, Region::new_unchecked(55, 34, 64, 45));
        assert_eq!(seg.cell_height, 20.0);
        assert_eq!(seg.cell_width, 20.0);
    }

    #[test]
    fn test_nested_loses_blank_row() {
        let pix = grid_page(4, Some(1));
        let opts = GridOptions::default().with_strategy(GridStrategy::Nested);
        let seg = segment_grid(&pix, &zone(4), &opts, 128);
        assert_eq!(seg.rows(), 3);
    }

    #[test]
    fn test_blank_zone_falls_back() {
        let pix = Pix::new_filled(200, 200, PixelDepth::Bit8, 255).unwrap();
        let region = Region::new_unchecked(0, 0, 199, 199);
        let seg = segment_grid(&pix, &region, &GridOptions::default(), 128);
        // no runs, so the cell size falls back to 200 / 20 = 10
        assert_eq!(seg.cell_width, 10.0);
        assert_eq!((seg.rows(), seg.cols()), (20, 20));

        let nested = GridOptions::default().with_strategy(GridStrategy::Nested);
        assert!(segment_grid(&pix, &region, &nested, 128).is_empty());
    }

    #[test]
    fn test_degenerate_region() {
        let pix = grid_page(2, None);
        let outside = Region::new_unchecked(500, 500, 600, 600);
        let seg = segment_grid(&pix, &outside, &GridOptions::default(), 128);
        assert!(seg.is_empty());
        assert_eq!(seg.rows(), 0);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(serde_json::to_string(&GridStrategy::Nested).unwrap(), "\"nested\"");
        let s: GridStrategy = serde_json::from_str("\"tiled\"").unwrap();
        assert_eq!(s, GridStrategy::Tiled);
    }
}
