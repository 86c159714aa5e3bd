//! puzzleseg-test - Regression test framework for puzzleseg
//!
//! Provides [`RegParams`], which counts and reports value comparisons the
//! way the regression suites expect, and [`SyntheticPage`], which paints
//! test pages from rectangles so no image files need to be checked in.
//!
//! # Usage
//!
//! ```ignore
//! use puzzleseg_test::RegParams;
//!
//! let mut rp = RegParams::new("runs");
//! rp.compare_values(2.0, runs.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". Display mode
//!   additionally writes the images passed to [`RegParams::display_pix`]
//!   under `tests/regout`.

mod error;
mod params;
mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{PuzzleFixture, SyntheticPage};
pub use synth::{
    GRID_GLYPH_H, GRID_GLYPH_OFFSET, GRID_GLYPH_W, GRID_ORIGIN, GRID_PITCH, PAGE_HEIGHT, PAGE_WIDTH,
    WORD_BAND_PITCH, WORD_GLYPH_H, WORD_GLYPH_W, WORD_ORIGIN, WORD_SPACING,
};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // puzzleseg-test is at crates/puzzleseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
