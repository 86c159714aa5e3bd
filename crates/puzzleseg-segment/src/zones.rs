//! Macro region location
//!
//! A puzzle page holds two large components side by side: the word list
//! and the letter grid. They are found from the smoothed column profile
//! of the whole page. Wide ink runs become candidate zones, each is
//! given its vertical extent from a row profile, padded, and the two
//! widest survivors are returned left to right.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{SegError, SegResult, check_range};
use crate::profile::{ink_profile, smooth_profile};
use crate::runs::find_runs;
use puzzleseg_core::{Axis, PixelSource, Region};

/// Options for [`locate_zones`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneOptions {
    /// Column ink ratio a zone column must exceed
    pub fill_threshold: f64,
    /// Bridgeable gap as a fraction of page width
    pub gap_fraction: f64,
    /// Smoothing window as a fraction of page width
    pub smooth_fraction: f64,
    /// Runs narrower than this fraction of page width are dropped
    pub min_width_fraction: f64,
    /// Row ink ratio used to find a zone's vertical extent
    pub row_fill_threshold: f64,
    /// Padding added around each zone, in pixels
    pub padding: u32,
    /// Padded zones smaller than this many pixels are dropped
    pub min_area: u64,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self {
            fill_threshold: 0.02,
            gap_fraction: 0.05,
            smooth_fraction: 0.01,
            min_width_fraction: 0.05,
            row_fill_threshold: 0.04,
            padding: 8,
            min_area: 35_000,
        }
    }
}

impl ZoneOptions {
    pub fn with_fill_threshold(mut self, threshold: f64) -> Self {
        self.fill_threshold = threshold;
        self
    }

    pub fn with_gap_fraction(mut self, fraction: f64) -> Self {
        self.gap_fraction = fraction;
        self
    }

    pub fn with_smooth_fraction(mut self, fraction: f64) -> Self {
        self.smooth_fraction = fraction;
        self
    }

    pub fn with_min_width_fraction(mut self, fraction: f64) -> Self {
        self.min_width_fraction = fraction;
        self
    }

    pub fn with_row_fill_threshold(mut self, threshold: f64) -> Self {
        self.row_fill_threshold = threshold;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_min_area(mut self, area: u64) -> Self {
        self.min_area = area;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        check_range("zones.fill_threshold", self.fill_threshold, 0.0, 1.0)?;
        check_range("zones.gap_fraction", self.gap_fraction, 0.0, 1.0)?;
        check_range("zones.smooth_fraction", self.smooth_fraction, 0.0, 1.0)?;
        check_range("zones.min_width_fraction", self.min_width_fraction, 0.0, 1.0)?;
        check_range("zones.row_fill_threshold", self.row_fill_threshold, 0.0, 1.0)?;
        Ok(())
    }
}

/// The two macro regions of a puzzle page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    /// Left zone
    pub word_list: Region,
    /// Right zone
    pub grid: Region,
}

/// First and last row of `span` whose ink ratio exceeds `threshold`.
fn vertical_extent<S: PixelSource + ?Sized>(
    src: &S,
    span: &Region,
    black_threshold: u8,
    threshold: f64,
) -> Option<(i32, i32)> {
    let rows = ink_profile(src, span, black_threshold, Axis::Rows);
    let mut inked = rows.iter().filter(|&(_, v)| v > threshold).map(|(y, _)| y as i32);
    let first = inked.next()?;
    let last = inked.last().unwrap_or(first);
    Some((first, last))
}

/// Find the word-list and grid zones of a page.
///
/// # Errors
///
/// Returns [`SegError::InsufficientMacroRegions`] if fewer than two zones
/// survive the width and area filters, and
/// [`SegError::InvalidParameter`] for out-of-range options.
pub fn locate_zones<S: PixelSource + ?Sized>(
    src: &S,
    options: &ZoneOptions,
    black_threshold: u8,
) -> SegResult<Zones> {
    options.validate()?;

    let (w, h) = (src.width(), src.height());
    let page = src.bounds();
    let width = w as f64;

    let columns = ink_profile(src, &page, black_threshold, Axis::Columns);
    let window = ((width * options.smooth_fraction).round() as usize).max(1);
    let smoothed = smooth_profile(&columns, window);
    let gap = (width * options.gap_fraction).round() as u32;
    let runs = find_runs(&smoothed, options.fill_threshold, gap);
    debug!("locate_zones: {} column runs (window {window}, gap {gap})", runs.len());

    let min_width = width * options.min_width_fraction;
    let padding = options.padding as i32;
    let mut candidates: Vec<Region> = runs
        .iter()
        .filter(|run| run.width() as f64 >= min_width)
        .filter_map(|run| {
            let span = page.with_columns(run.start as i32, run.end as i32);
            let (y0, y1) = vertical_extent(src, &span, black_threshold, options.row_fill_threshold)
                .unwrap_or((page.y0, page.y1));
            span.with_rows(y0, y1).expand(padding).clamp_to(w, h)
        })
        .filter(|zone| zone.area() as u64 >= options.min_area)
        .collect();

    if candidates.len() < 2 {
        debug!("locate_zones: only {} candidate zone(s) on {w}x{h} page", candidates.len());
        return Err(SegError::InsufficientMacroRegions {
            found: candidates.len(),
        });
    }

    // widest two, then left to right
    candidates.sort_by(|a, b| b.width().cmp(&a.width()).then(a.x0.cmp(&b.x0)));
    candidates.truncate(2);
    candidates.sort_by_key(|zone| zone.x0);

    let zones = Zones {
        word_list: candidates[0],
        grid: candidates[1],
    };
    debug!("locate_zones: word list {}, grid {}", zones.word_list, zones.grid);
    Ok(zones)
}
