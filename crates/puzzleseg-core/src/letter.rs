//! Runs along one axis and located letter boxes

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A run of ink-bearing positions `[start, end]` in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    /// Inclusive
    pub end: u32,
}

impl Interval {
    /// Create an interval, swapping the ends if they are reversed.
    pub fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Number of positions covered, at least 1
    #[inline]
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Midpoint `(start + end) / 2` in floating point
    #[inline]
    pub fn center(&self) -> f64 {
        (self.start as f64 + self.end as f64) / 2.0
    }
}

/// A vertical run of text-bearing rows, one written word or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordBand {
    pub y_start: u32,
    /// Inclusive
    pub y_end: u32,
}

impl WordBand {
    #[inline]
    pub fn height(&self) -> u32 {
        self.y_end - self.y_start + 1
    }
}

impl From<Interval> for WordBand {
    fn from(iv: Interval) -> Self {
        Self {
            y_start: iv.start,
            y_end: iv.end,
        }
    }
}

/// Where a [`LetterBox`] sits in its source layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxPosition {
    /// Letter `index` of the word list (counted across all bands), found in band `band`
    Sequence { index: usize, band: usize },
    /// Grid cell at `(row, col)`
    Cell { row: usize, col: usize },
}

/// A located letter or grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterBox {
    pub region: Region,
    pub position: BoxPosition,
}

impl LetterBox {
    pub fn new(region: Region, position: BoxPosition) -> Self {
        Self { region, position }
    }

    /// Grid coordinates, if this box came from a grid
    pub fn cell(&self) -> Option<(usize, usize)> {
        match self.position {
            BoxPosition::Cell { row, col } => Some((row, col)),
            BoxPosition::Sequence { .. } => None,
        }
    }

    /// Sequence index, if this box came from the word list
    pub fn sequence_index(&self) -> Option<usize> {
        match self.position {
            BoxPosition::Sequence { index, .. } => Some(index),
            BoxPosition::Cell { .. } => None,
        }
    }

    /// File stem for the cropped image: `"row,col"` for cells and the
    /// sequence index for word letters.
    pub fn crop_name(&self) -> String {
        match self.position {
            BoxPosition::Cell { row, col } => format!("{row},{col}"),
            BoxPosition::Sequence { index, .. } => index.to_string(),
        }
    }
}
