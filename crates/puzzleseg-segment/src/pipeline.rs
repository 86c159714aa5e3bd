//! Full-page segmentation
//!
//! Runs the zone locator, then the word-list and grid segmenters on the
//! two zones, returning every located box in one value.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SegResult;
use crate::grid::{GridOptions, GridSegmentation, segment_grid};
use crate::letters::{LetterOptions, WordSegmentation, segment_word_list};
use crate::zones::{ZoneOptions, Zones, locate_zones};
use puzzleseg_core::{LetterBox, PixelSource};

/// Every tunable of the segmentation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Pixels with a gray level below this count as ink
    pub black_threshold: u8,
    pub zones: ZoneOptions,
    pub words: LetterOptions,
    pub grid: GridOptions,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            black_threshold: 128,
            zones: ZoneOptions::default(),
            words: LetterOptions::default(),
            grid: GridOptions::default(),
        }
    }
}

impl SegmentOptions {
    pub fn with_black_threshold(mut self, threshold: u8) -> Self {
        self.black_threshold = threshold;
        self
    }

    pub fn with_zones(mut self, zones: ZoneOptions) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_words(mut self, words: LetterOptions) -> Self {
        self.words = words;
        self
    }

    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        self.zones.validate()?;
        self.words.validate()?;
        self.grid.validate()
    }
}

/// Everything located on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSegmentation {
    pub zones: Zones,
    pub words: WordSegmentation,
    pub grid: GridSegmentation,
}

impl PageSegmentation {
    /// Total number of boxes, word letters plus grid cells
    pub fn letter_count(&self) -> usize {
        self.words.letters.len() + self.grid.cells.len()
    }

    /// Word letters followed by grid cells
    pub fn boxes(&self) -> impl Iterator<Item = &LetterBox> + '_ {
        self.words.letters.iter().chain(self.grid.cells.iter())
    }
}

/// Segment a whole puzzle page.
///
/// # Errors
///
/// Returns [`crate::SegError::InsufficientMacroRegions`] when the page does
/// not show both a word list and a grid, or
/// [`crate::SegError::InvalidParameter`] for out-of-range options.
pub fn segment_page<S: PixelSource + ?Sized>(
    src: &S,
    options: &SegmentOptions,
) -> SegResult<PageSegmentation> {
    options.validate()?;
    let t = options.black_threshold;

    let zones = locate_zones(src, &options.zones, t)?;
    let words = segment_word_list(src, &zones.word_list, &options.words, t);
    let grid = segment_grid(src, &zones.grid, &options.grid, t);

    info!(
        "segment_page: {} word letters in {} bands, {}x{} grid",
        words.letters.len(),
        words.bands.len(),
        grid.rows(),
        grid.cols()
    );
    Ok(PageSegmentation { zones, words, grid })
}
