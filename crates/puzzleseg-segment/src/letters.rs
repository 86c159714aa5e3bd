//! Word-list letter segmentation
//!
//! The word list is split in two passes. A raw row profile of the zone
//! gives the word bands; inside each band a raw column profile gives the
//! letters. Both passes use unsmoothed profiles so that the narrow gaps
//! between letters survive. Each letter box is tightened to its ink and
//! dropped if it is too small to be a glyph.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{SegResult, check_range};
use crate::profile::ink_profile;
use crate::refine::refine_or_keep;
use crate::runs::find_runs;
use puzzleseg_core::{Axis, BoxPosition, LetterBox, PixelSource, Region, WordBand};

/// Options for band and letter detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterOptions {
    /// Row ink ratio a band row must exceed
    pub line_fill_threshold: f64,
    /// Column ink ratio (within a band) a letter column must exceed
    pub col_fill_threshold: f64,
    /// Bridgeable gap between band rows
    pub gap_line: u32,
    /// Bridgeable gap between letter columns
    pub gap_col: u32,
    /// Letters must be wider than this
    pub min_width: u32,
    /// Letters must be taller than this
    pub min_height: u32,
    /// Tighten each letter to its ink bounding box
    pub refine: bool,
}

impl Default for LetterOptions {
    fn default() -> Self {
        Self {
            line_fill_threshold: 0.05,
            col_fill_threshold: 0.08,
            gap_line: 3,
            gap_col: 1,
            min_width: 5,
            min_height: 5,
            refine: true,
        }
    }
}

impl LetterOptions {
    pub fn with_line_fill_threshold(mut self, threshold: f64) -> Self {
        self.line_fill_threshold = threshold;
        self
    }

    pub fn with_col_fill_threshold(mut self, threshold: f64) -> Self {
        self.col_fill_threshold = threshold;
        self
    }

    pub fn with_gap_line(mut self, gap: u32) -> Self {
        self.gap_line = gap;
        self
    }

    pub fn with_gap_col(mut self, gap: u32) -> Self {
        self.gap_col = gap;
        self
    }

    pub fn with_min_size(mut self, min_width: u32, min_height: u32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn with_refine(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        check_range("line_fill_threshold", self.line_fill_threshold, 0.0, 1.0)?;
        check_range("col_fill_threshold", self.col_fill_threshold, 0.0, 1.0)?;
        Ok(())
    }

    fn is_glyph_sized(&self, region: &Region) -> bool {
        region.width() > self.min_width as i32 && region.height() > self.min_height as i32
    }
}

/// A band and the letter boxes found inside it, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLetters {
    pub band: WordBand,
    pub letters: Vec<Region>,
}

/// Split `region` into horizontal bands, then each band into letters.
///
/// Shared by the word list and the nested grid strategy. Bands without any
/// glyph-sized letter are still reported, with an empty letter list.
pub fn segment_bands_and_columns<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    options: &LetterOptions,
    black_threshold: u8,
) -> Vec<BandLetters> {
    let Some(r) = region.clamp_to(src.width(), src.height()) else {
        debug!("segment_bands_and_columns: degenerate region {region}");
        return Vec::new();
    };

    let rows = ink_profile(src, &r, black_threshold, Axis::Rows);
    let bands = find_runs(&rows, options.line_fill_threshold, options.gap_line);

    bands
        .into_iter()
        .map(|iv| {
            let band = WordBand::from(iv);
            let strip = r.with_rows(band.y_start as i32, band.y_end as i32);
            let columns = ink_profile(src, &strip, black_threshold, Axis::Columns);
            let letters = find_runs(&columns, options.col_fill_threshold, options.gap_col)
                .into_iter()
                .filter_map(|col| {
                    let loose = strip.with_columns(col.start as i32, col.end as i32);
                    if !options.is_glyph_sized(&loose) {
                        trace!("dropping sliver {loose}");
                        return None;
                    }
                    let letter = if options.refine {
                        refine_or_keep(src, &loose, black_threshold)
                    } else {
                        loose
                    };
                    options.is_glyph_sized(&letter).then_some(letter)
                })
                .collect();
            BandLetters { band, letters }
        })
        .collect()
}

/// Result of [`segment_word_list`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordSegmentation {
    /// Every band found, top to bottom
    pub bands: Vec<WordBand>,
    /// Letters in reading order, numbered across all bands
    pub letters: Vec<LetterBox>,
}

impl WordSegmentation {
    /// Letters belonging to band `band`
    pub fn letters_in_band(&self, band: usize) -> impl Iterator<Item = &LetterBox> + '_ {
        self.letters.iter().filter(move |l| {
            matches!(l.position, BoxPosition::Sequence { band: b, .. } if b == band)
        })
    }
}

/// Segment the word-list zone into bands and letters.
///
/// Letters are numbered in reading order: band by band, left to right.
pub fn segment_word_list<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    options: &LetterOptions,
    black_threshold: u8,
) -> WordSegmentation {
    let found = segment_bands_and_columns(src, region, options, black_threshold);

    let mut seg = WordSegmentation::default();
    for (band_index, entry) in found.into_iter().enumerate() {
        seg.bands.push(entry.band);
        for letter in entry.letters {
            let index = seg.letters.len();
            seg.letters.push(LetterBox::new(
                letter,
                BoxPosition::Sequence {
                    index,
                    band: band_index,
                },
            ));
        }
    }

    debug!(
        "segment_word_list: {} bands, {} letters in {region}",
        seg.bands.len(),
        seg.letters.len()
    );
    seg
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzleseg_core::{Pix, PixelDepth};

    fn page(w: u32, h: u32, blocks: &[Region]) -> Pix {
        let mut pm = Pix::new_filled(w, h, PixelDepth::Bit8, 255).unwrap().to_mut();
        for b in blocks {
            for y in b.y0..=b.y1 {
                for x in b.x0..=b.x1 {
                    pm.set_pixel(x as u32, y as u32, 0).unwrap();
                }
            }
        }
        pm.into()
    }

    /// Two words: three 8x10 letters on rows 10..=19, two on rows 40..=49
    fn two_words() -> (Pix, Vec<Region>) {
        let letters = vec![
            Region::new_unchecked(10, 10, 17, 19),
            Region::new_unchecked(22, 10, 29, 19),
            Region::new_unchecked(34, 10, 41, 19),
            Region::new_unchecked(10, 40, 17, 49),
            Region::new_unchecked(22, 40, 29, 49),
        ];
        (page(60, 60, &letters), letters)
    }

    #[test]
    fn test_two_words() {
        let (pix, expected) = two_words();
        let seg = segment_word_list(&pix, &Region::full(60, 60), &LetterOptions::default(), 128);

        assert_eq!(
            seg.bands,
            vec![
                WordBand { y_start: 10, y_end: 19 },
                WordBand { y_start: 40, y_end: 49 }
            ]
        );
        let boxes: Vec<Region> = seg.letters.iter().map(|l| l.region).collect();
        assert_eq!(boxes, expected);
        assert_eq!(seg.letters_in_band(0).count(), 3);
        assert_eq!(seg.letters_in_band(1).count(), 2);
        for (i, l) in seg.letters.iter().enumerate() {
            assert_eq!(l.sequence_index(), Some(i));
        }
    }

    #[test]
    fn test_letters_sorted_and_disjoint_in_band() {
        let (pix, _) = two_words();
        let region = Region::full(60, 60);
        let found = segment_bands_and_columns(&pix, &region, &LetterOptions::default(), 128);
        for entry in &found {
            for pair in entry.letters.windows(2) {
                assert!(pair[0].x1 < pair[1].x0);
            }
            for l in &entry.letters {
                assert!(l.y0 >= entry.band.y_start as i32);
                assert!(l.y1 <= entry.band.y_end as i32);
            }
        }
    }

    #[test]
    fn test_small_marks_dropped() {
        // a 3x3 speck next to a real letter
        let pix = page(
            40,
            30,
            &[Region::new_unchecked(5, 5, 12, 16), Region::new_unchecked(20, 8, 22, 10)],
        );
        let seg = segment_word_list(&pix, &Region::full(40, 30), &LetterOptions::default(), 128);
        assert_eq!(seg.letters.len(), 1);
        assert_eq!(seg.letters[0].region, Region::new_unchecked(5, 5, 12, 16));
    }

    #[test]
    fn test_refine_tightens_ragged_band() {
        // letters of different heights share one band
        let pix = page(
            40,
            30,
            &[Region::new_unchecked(5, 5, 12, 20), Region::new_unchecked(18, 10, 25, 20)],
        );
        let opts = LetterOptions::default();
        let seg = segment_word_list(&pix, &Region::full(40, 30), &opts, 128);
        assert_eq!(seg.letters[1].region, Region::new_unchecked(18, 10, 25, 20));

        let loose = segment_word_list(&pix, &Region::full(40, 30), &opts.with_refine(false), 128);
        assert_eq!(loose.letters[1].region, Region::new_unchecked(18, 5, 25, 20));
    }

    #[test]
    fn test_blank_region() {
        let pix = page(30, 30, &[]);
        let seg = segment_word_list(&pix, &Region::full(30, 30), &LetterOptions::default(), 128);
        assert!(seg.bands.is_empty());
        assert!(seg.letters.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let (pix, _) = two_words();
        let opts = LetterOptions::default();
        let a = segment_word_list(&pix, &Region::full(60, 60), &opts, 128);
        let b = segment_word_list(&pix, &Region::full(60, 60), &opts, 128);
        assert_eq!(a, b);
    }
}
