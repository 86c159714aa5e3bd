//! Cell pitch estimation
//!
//! The pitch of a grid is the median distance between the centers of
//! consecutive runs. The median keeps one missing or merged row from
//! skewing the estimate.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{SegResult, check_range};
use puzzleseg_core::Interval;

/// Median center-to-center distance of consecutive intervals.
///
/// Returns 0.0 when fewer than two intervals are given; callers substitute
/// a fallback with [`pitch_or_fallback`].
///
/// # Example
/// ```
/// use puzzleseg_core::Interval;
/// use puzzleseg_segment::pitch::estimate_pitch;
///
/// let runs = [
///     Interval::new(8, 12),
///     Interval::new(18, 22),
///     Interval::new(28, 32),
///     Interval::new(39, 43),
/// ];
/// assert_eq!(estimate_pitch(&runs), 10.0);
/// ```
pub fn estimate_pitch(intervals: &[Interval]) -> f64 {
    if intervals.len() < 2 {
        return 0.0;
    }
    let mut diffs: Vec<f64> = intervals
        .windows(2)
        .map(|w| w[1].center() - w[0].center())
        .collect();
    median(&mut diffs)
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Replacement cell size used when too few runs were found to measure a
/// pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchFallback {
    /// Pitches below this are not trusted
    pub min_cell_size: f64,
    /// Fallback is `extent / divisor` ...
    pub divisor: f64,
    /// ... but never less than `floor`
    pub floor: f64,
}

impl Default for PitchFallback {
    fn default() -> Self {
        Self {
            min_cell_size: 2.0,
            divisor: 20.0,
            floor: 8.0,
        }
    }
}

impl PitchFallback {
    pub fn with_min_cell_size(mut self, size: f64) -> Self {
        self.min_cell_size = size;
        self
    }

    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn validate(&self) -> SegResult<()> {
        check_range("fallback.min_cell_size", self.min_cell_size, 1.0, f64::MAX)?;
        check_range("fallback.divisor", self.divisor, f64::MIN_POSITIVE, f64::MAX)?;
        check_range("fallback.floor", self.floor, 1.0, f64::MAX)?;
        Ok(())
    }

    /// `max(extent / divisor, floor)`
    pub fn cell_size(&self, extent: u32) -> f64 {
        (extent as f64 / self.divisor).max(self.floor)
    }
}

/// Return `pitch` if it is usable, otherwise the fallback cell size for a
/// region `extent` pixels long.
pub fn pitch_or_fallback(pitch: f64, extent: u32, fallback: &PitchFallback) -> f64 {
    if pitch.is_finite() && pitch >= fallback.min_cell_size {
        return pitch;
    }
    let size = fallback.cell_size(extent);
    warn!("pitch {pitch:.2} unusable over {extent}px, falling back to {size:.2}");
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_needs_two_runs() {
        assert_eq!(estimate_pitch(&[]), 0.0);
        assert_eq!(estimate_pitch(&[Interval::new(3, 9)]), 0.0);
    }

    #[test]
    fn test_pitch_even_count_averages_middle() {
        // diffs 30, 60, 30, 30 -> sorted 30, 30, 30, 60
        let runs = [
            Interval::new(0, 10),
            Interval::new(30, 40),
            Interval::new(90, 100),
            Interval::new(120, 130),
            Interval::new(150, 160),
        ];
        assert_eq!(estimate_pitch(&runs), 30.0);

        let two_diffs = [Interval::new(0, 0), Interval::new(10, 10), Interval::new(30, 30)];
        assert_eq!(estimate_pitch(&two_diffs), 15.0);
    }

    #[test]
    fn test_pitch_ignores_outlier() {
        let runs = [
            Interval::new(0, 4),
            Interval::new(10, 14),
            Interval::new(20, 24),
            Interval::new(75, 79),
        ];
        assert_eq!(estimate_pitch(&runs), 10.0);
    }

    #[test]
    fn test_fallback() {
        let fb = PitchFallback::default();
        assert_eq!(pitch_or_fallback(12.5, 300, &fb), 12.5);
        assert_eq!(pitch_or_fallback(0.0, 300, &fb), 15.0);
        assert_eq!(pitch_or_fallback(1.5, 100, &fb), 8.0);
        assert_eq!(pitch_or_fallback(f64::NAN, 400, &fb), 20.0);
    }

    #[test]
    fn test_fallback_validate() {
        assert!(PitchFallback::default().validate().is_ok());
        assert!(PitchFallback::default().with_divisor(0.0).validate().is_err());
        assert!(PitchFallback::default().with_floor(0.5).validate().is_err());
    }
}
