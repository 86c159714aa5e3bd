//! Comparison bookkeeping for the `*_reg` suites
//!
//! A suite creates one [`RegParams`], feeds it every check, and asserts on
//! [`RegParams::cleanup`] at the end. Checks never panic, so a single run
//! lists every mismatching box or value instead of stopping at the first.

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use puzzleseg_core::{ImageFormat, Pix, Region};
use std::fs;

/// What a suite does besides comparing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    #[default]
    Compare,
    /// Also write annotated pages to `tests/regout`
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; anything but "display" means compare.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Running state of one regression suite.
pub struct RegParams {
    /// Suite name, used in messages and output file names
    pub test_name: String,
    pub mode: RegTestMode,
    /// Number of checks made so far
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        eprintln!("=== {test_name}_reg ({mode:?}) ===");
        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks made so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Count one check and record `detail` if it failed.
    fn check(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{}_reg check #{}: {}", self.test_name, self.index, detail());
            eprintln!("{msg}");
            self.failures.push(msg);
        }
        ok
    }

    /// Pass if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.check(diff <= delta, || {
            format!("expected {expected}, got {actual} (off by {diff}, allowed {delta})")
        })
    }

    pub fn compare_true(&mut self, condition: bool) -> bool {
        self.check(condition, || "condition is false".to_string())
    }

    /// Pass if no corner coordinate differs by more than `delta` pixels.
    pub fn compare_regions(&mut self, expected: &Region, actual: &Region, delta: i32) -> bool {
        let worst = (expected.x0 - actual.x0)
            .abs()
            .max((expected.y0 - actual.y0).abs())
            .max((expected.x1 - actual.x1).abs())
            .max((expected.y1 - actual.y1).abs());
        self.check(worst <= delta, || {
            format!("expected box {expected}, got {actual} (allowed {delta}px)")
        })
    }

    /// Pass if both rasters have the same geometry, depth and samples.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        if !pix1.sizes_equal(pix2) || pix1.depth() != pix2.depth() {
            return self.check(false, || {
                format!(
                    "raster {}x{}@{:?} differs from {}x{}@{:?}",
                    pix1.width(),
                    pix1.height(),
                    pix1.depth(),
                    pix2.width(),
                    pix2.height(),
                    pix2.depth()
                )
            });
        }
        let w = pix1.width() as usize;
        let first_diff = pix1.data().iter().zip(pix2.data()).position(|(a, b)| a != b);
        self.check(first_diff.is_none(), || {
            let pos = first_diff.unwrap_or(0);
            format!("rasters differ first at ({}, {})", pos % w, pos / w)
        })
    }

    /// In display mode, write `pix` to `tests/regout/{test}.{label}.png`.
    pub fn display_pix(&self, pix: &Pix, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        fs::create_dir_all(regout_dir())?;
        let path = format!(
            "{}/{}.{}.{}",
            regout_dir(),
            self.test_name,
            label,
            ImageFormat::Png.extension()
        );
        puzzleseg_io::write_image(pix, &path, ImageFormat::Png).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("wrote {path}");
        Ok(())
    }

    /// Print a summary and return `true` if every check passed.
    pub fn cleanup(self) -> bool {
        let ok = self.failures.is_empty();
        eprintln!(
            "=== {}_reg: {} of {} checks passed ===",
            self.test_name,
            self.index - self.failures.len(),
            self.index
        );
        ok
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Messages of the failed checks, in order
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
