//! puzzleseg - Segmentation of scanned word-search puzzle pages
//!
//! Turns a binarized puzzle page into located letter boxes: the letters of
//! the free-form word list, and the cells of the letter grid. Boxes can be
//! drawn onto a display copy of the page or cropped out and written one
//! file per letter for an external classifier.
//!
//! # Overview
//!
//! - [`io`]: PNG and JPEG loading and saving
//! - [`segment`]: profiles, runs, zones, word letters and grid cells
//! - [`export`]: annotation and per-letter crops
//!
//! # Example
//!
//! ```no_run
//! use puzzleseg::segment::{SegmentOptions, segment_page};
//! use puzzleseg::export::{AnnotateStyle, annotate};
//!
//! let page = puzzleseg::io::read_image("page.png").unwrap();
//! let seg = segment_page(&page, &SegmentOptions::default()).unwrap();
//! let display = annotate(&page, &seg, &AnnotateStyle::default()).unwrap();
//! puzzleseg::io::write_image(&display, "page.annotated.png", puzzleseg::ImageFormat::Png).unwrap();
//! ```

// Re-export core types (primary data structures used everywhere)
pub use puzzleseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use puzzleseg_io as io;
pub use puzzleseg_segment as segment;

pub mod export;

pub use export::{AnnotateStyle, ExportError, ExportResult};
