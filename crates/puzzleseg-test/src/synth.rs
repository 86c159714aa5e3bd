//! Synthetic test pages
//!
//! Pages are white 8 bpp rasters with solid black rectangles standing in
//! for printed letters. Solid glyphs make every expected box exact: the
//! ink bounding box of a glyph is the glyph itself.

use crate::error::TestResult;
use puzzleseg_core::{Pix, PixMut, PixelDepth, Region};

/// Builder for a white page with black rectangles.
pub struct SyntheticPage {
    pix: PixMut,
}

impl SyntheticPage {
    /// A white `width` x `height` 8 bpp page.
    pub fn new(width: u32, height: u32) -> TestResult<Self> {
        let pix = Pix::new_filled(width, height, PixelDepth::Bit8, 255)?.to_mut();
        Ok(Self { pix })
    }

    /// Fill the inclusive rectangle with `val`, clipped to the page.
    pub fn fill_gray(&mut self, region: Region, val: u8) -> &mut Self {
        if let Some(r) = region.clamp_to(self.pix.width(), self.pix.height()) {
            for y in r.y0..=r.y1 {
                for x in r.x0..=r.x1 {
                    self.pix.set_pixel_unchecked(x as u32, y as u32, val as u32);
                }
            }
        }
        self
    }

    /// Fill the inclusive rectangle with black.
    pub fn fill(&mut self, region: Region) -> &mut Self {
        self.fill_gray(region, 0)
    }

    /// Set a single black pixel.
    pub fn dot(&mut self, x: i32, y: i32) -> &mut Self {
        self.fill(Region::new_unchecked(x, y, x, y))
    }

    pub fn build(self) -> Pix {
        self.pix.into()
    }
}

/// Word list geometry: letters are `WORD_GLYPH_W` x `WORD_GLYPH_H`,
/// separated by `WORD_SPACING` blank columns, one word per band.
pub const WORD_ORIGIN: (i32, i32) = (20, 40);
pub const WORD_GLYPH_W: i32 = 10;
pub const WORD_GLYPH_H: i32 = 16;
pub const WORD_SPACING: i32 = 6;
pub const WORD_BAND_PITCH: i32 = 40;

/// Grid geometry: square cells of `GRID_PITCH`, each holding a
/// `GRID_GLYPH_W` x `GRID_GLYPH_H` glyph at `GRID_GLYPH_OFFSET`.
pub const GRID_ORIGIN: (i32, i32) = (200, 40);
pub const GRID_PITCH: i32 = 30;
pub const GRID_GLYPH_OFFSET: (i32, i32) = (8, 7);
pub const GRID_GLYPH_W: i32 = 14;
pub const GRID_GLYPH_H: i32 = 16;

pub const PAGE_WIDTH: u32 = 400;
pub const PAGE_HEIGHT: u32 = 300;

/// A complete synthetic puzzle page with its expected layout.
///
/// The word list occupies the left side of a 400x300 page and an
/// `n` x `n` letter grid the right side, with a wide blank gutter between.
pub struct PuzzleFixture {
    pub pix: Pix,
    /// Expected letter boxes, one `Vec` per word, left to right
    pub words: Vec<Vec<Region>>,
    /// Expected glyph boxes by `[row][col]`; `None` for blank cells
    pub grid: Vec<Vec<Option<Region>>>,
}

impl PuzzleFixture {
    /// Three words of 4, 3 and 5 letters and a full 6x6 grid.
    pub fn standard() -> TestResult<Self> {
        Self::build(&[4, 3, 5], 6, &[])
    }

    /// Like [`PuzzleFixture::standard`] but with grid row `row` left blank.
    pub fn with_blank_grid_row(row: usize) -> TestResult<Self> {
        Self::build(&[4, 3, 5], 6, &[row])
    }

    /// Build a page with the given word lengths and an `n` x `n` grid.
    pub fn build(word_lengths: &[usize], n: usize, blank_rows: &[usize]) -> TestResult<Self> {
        let mut page = SyntheticPage::new(PAGE_WIDTH, PAGE_HEIGHT)?;

        let mut words = Vec::with_capacity(word_lengths.len());
        for (w, &len) in word_lengths.iter().enumerate() {
            let y0 = WORD_ORIGIN.1 + w as i32 * WORD_BAND_PITCH;
            let letters: Vec<Region> = (0..len as i32)
                .map(|i| {
                    let x0 = WORD_ORIGIN.0 + i * (WORD_GLYPH_W + WORD_SPACING);
                    Region::new_unchecked(x0, y0, x0 + WORD_GLYPH_W - 1, y0 + WORD_GLYPH_H - 1)
                })
                .collect();
            for r in &letters {
                page.fill(*r);
            }
            words.push(letters);
        }

        let mut grid = Vec::with_capacity(n);
        for row in 0..n {
            let mut cells = Vec::with_capacity(n);
            for col in 0..n {
                if blank_rows.contains(&row) {
                    cells.push(None);
                    continue;
                }
                let x0 = GRID_ORIGIN.0 + col as i32 * GRID_PITCH + GRID_GLYPH_OFFSET.0;
                let y0 = GRID_ORIGIN.1 + row as i32 * GRID_PITCH + GRID_GLYPH_OFFSET.1;
                let r = Region::new_unchecked(x0, y0, x0 + GRID_GLYPH_W - 1, y0 + GRID_GLYPH_H - 1);
                page.fill(r);
                cells.push(Some(r));
            }
            grid.push(cells);
        }

        Ok(Self {
            pix: page.build(),
            words,
            grid,
        })
    }

    /// All expected word-list letters in reading order
    pub fn word_letters(&self) -> impl Iterator<Item = &Region> {
        self.words.iter().flatten()
    }
}
