//! puzzleseg-segment - Letter and grid segmentation for word-search pages
//!
//! The engine works entirely on 1-D ink profiles:
//!
//! - **Profiles**: per-row or per-column ink ratios ([`profile`])
//! - **Runs**: gap-tolerant thresholding of a profile ([`runs`])
//! - **Pitch**: median cell spacing with a fallback ([`pitch`])
//! - **Tiling**: uniform cell layout at a measured pitch ([`tiling`])
//! - **Refinement**: tightening boxes to their ink ([`refine`])
//! - **Zones**: the word list and the grid on a page ([`zones`])
//! - **Letters**: bands then letters in the word list ([`letters`])
//! - **Grid**: tiled or nested grid cells ([`grid`])
//!
//! [`segment_page`] runs all of them on one page.
//!
//! # Example
//!
//! ```no_run
//! use puzzleseg_core::Pix;
//! use puzzleseg_segment::{SegmentOptions, segment_page};
//!
//! fn boxes(page: &Pix) -> puzzleseg_segment::SegResult<usize> {
//!     let seg = segment_page(page, &SegmentOptions::default())?;
//!     Ok(seg.letter_count())
//! }
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod letters;
pub mod pipeline;
pub mod pitch;
pub mod profile;
pub mod refine;
pub mod runs;
pub mod tiling;
pub mod zones;

pub use config::{load_options, options_from_json, options_to_json};
pub use error::{SegError, SegResult};
pub use grid::{GridOptions, GridSegmentation, GridStrategy, segment_grid};
pub use letters::{
    BandLetters, LetterOptions, WordSegmentation, segment_bands_and_columns, segment_word_list,
};
pub use pipeline::{PageSegmentation, SegmentOptions, segment_page};
pub use pitch::{PitchFallback, estimate_pitch, pitch_or_fallback};
pub use profile::{ink_profile, smooth_profile};
pub use refine::{find_ink_box, refine_or_keep};
pub use runs::{RunState, RunTracker, find_runs};
pub use tiling::{GridLayout, TileOptions, tile_region};
pub use zones::{ZoneOptions, Zones, locate_zones};
