//! Annotation and crop export
//!
//! The consumer side of segmentation. [`annotate`] draws every zone and box
//! on a 32bpp copy of the page; the source raster is never written.
//! [`crop_letters`] and [`export_crops`] cut each box out of the page and
//! name it by position: `"{index}"` for word-list letters and
//! `"{row},{col}"` for grid cells.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use puzzleseg_core::{
    BoxPosition, Color, ImageFormat, LetterBox, Pix, render_region, render_regions,
};
use puzzleseg_io::IoError;
use puzzleseg_segment::PageSegmentation;

/// Errors from annotation and crop export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] puzzleseg_core::Error),

    /// Filesystem error while preparing the output directory
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] IoError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Colors and line widths used by [`annotate`]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotateStyle {
    pub zone_color: Color,
    pub word_color: Color,
    pub grid_color: Color,
    /// Outline width of the two zones
    pub zone_width: u32,
    /// Outline width of letter and cell boxes
    pub box_width: u32,
}

impl Default for AnnotateStyle {
    fn default() -> Self {
        Self {
            zone_color: Color::BLUE,
            word_color: Color::RED,
            grid_color: Color::GREEN,
            zone_width: 2,
            box_width: 1,
        }
    }
}

impl AnnotateStyle {
    pub fn with_zone_color(mut self, color: Color) -> Self {
        self.zone_color = color;
        self
    }

    pub fn with_word_color(mut self, color: Color) -> Self {
        self.word_color = color;
        self
    }

    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    pub fn with_zone_width(mut self, width: u32) -> Self {
        self.zone_width = width;
        self
    }

    pub fn with_box_width(mut self, width: u32) -> Self {
        self.box_width = width;
        self
    }
}

/// Draw the zones, word letters and grid cells of `seg` on a 32bpp copy of
/// `src`.
pub fn annotate(src: &Pix, seg: &PageSegmentation, style: &AnnotateStyle) -> ExportResult<Pix> {
    let display = src.convert_to_32()?;
    let mut pm = display.try_into_mut().unwrap_or_else(|p| p.to_mut());

    render_region(&mut pm, &seg.zones.word_list, style.zone_width, style.zone_color);
    render_region(&mut pm, &seg.zones.grid, style.zone_width, style.zone_color);
    render_regions(
        &mut pm,
        seg.words.letters.iter().map(|l| &l.region),
        style.box_width,
        style.word_color,
    );
    render_regions(
        &mut pm,
        seg.grid.cells.iter().map(|c| &c.region),
        style.box_width,
        style.grid_color,
    );

    debug!("annotate: drew {} boxes on {}x{}", seg.letter_count(), pm.width(), pm.height());
    Ok(pm.into())
}

/// A cropped box with its positional name.
#[derive(Debug, Clone)]
pub struct LetterCrop {
    /// `"{index}"` or `"{row},{col}"`
    pub name: String,
    pub position: BoxPosition,
    pub pix: Pix,
}

fn crop_one(src: &Pix, letter: &LetterBox) -> ExportResult<LetterCrop> {
    Ok(LetterCrop {
        name: letter.crop_name(),
        position: letter.position,
        pix: src.clip_region(&letter.region)?,
    })
}

/// Crop every located box out of `src`, word letters first.
pub fn crop_letters(src: &Pix, seg: &PageSegmentation) -> ExportResult<Vec<LetterCrop>> {
    seg.boxes().map(|letter| crop_one(src, letter)).collect()
}

/// Paths written by [`export_crops`]
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub words: Vec<PathBuf>,
    pub grid: Vec<PathBuf>,
}

/// Write every crop under `out_dir`.
///
/// Word letters go to `out_dir/words/{index}.{ext}` and grid cells to
/// `out_dir/grid/{row},{col}.{ext}`. [`ImageFormat::Unknown`] writes PNG.
pub fn export_crops<P: AsRef<Path>>(
    src: &Pix,
    seg: &PageSegmentation,
    out_dir: P,
    format: ImageFormat,
) -> ExportResult<ExportSummary> {
    let format = match format {
        ImageFormat::Unknown => ImageFormat::Png,
        other => other,
    };
    let out_dir = out_dir.as_ref();
    let words_dir = out_dir.join("words");
    let grid_dir = out_dir.join("grid");
    fs::create_dir_all(&words_dir)?;
    fs::create_dir_all(&grid_dir)?;

    let mut summary = ExportSummary::default();
    for crop in crop_letters(src, seg)? {
        let file = format!("{}.{}", crop.name, format.extension());
        let (path, list) = match crop.position {
            BoxPosition::Sequence { .. } => (words_dir.join(file), &mut summary.words),
            BoxPosition::Cell { .. } => (grid_dir.join(file), &mut summary.grid),
        };
        puzzleseg_io::write_image(&crop.pix, &path, format)?;
        list.push(path);
    }

    debug!(
        "export_crops: wrote {} word and {} grid crops to {}",
        summary.words.len(),
        summary.grid.len(),
        out_dir.display()
    );
    Ok(summary)
}
