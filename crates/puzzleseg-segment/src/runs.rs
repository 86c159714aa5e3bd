//! Run segmentation with gap tolerance
//!
//! A profile is cut into maximal runs of positions whose value exceeds a
//! threshold. Short dips of at most `gap` sub-threshold positions are
//! bridged, so a thin stroke gap inside a letter or a faint row inside a
//! word does not split it; `gap + 1` consecutive sub-threshold positions
//! close the run.

use puzzleseg_core::{Interval, Profile};

/// State of the run scanner between two profile samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Outside,
    /// Inside a run that began at `start`; `last_good` is the most recent
    /// position above the threshold.
    InRun { start: u32, last_good: u32 },
}

/// Incremental run scanner.
///
/// Feed positions in increasing order with [`RunTracker::push`], then call
/// [`RunTracker::finish`] to flush a run still open at the end.
#[derive(Debug, Clone)]
pub struct RunTracker {
    threshold: f64,
    gap: u32,
    state: RunState,
}

impl RunTracker {
    pub fn new(threshold: f64, gap: u32) -> Self {
        Self {
            threshold,
            gap,
            state: RunState::Outside,
        }
    }

    /// Current scanner state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Consume the sample at `pos`. Returns a run when this sample closes one.
    pub fn push(&mut self, pos: u32, value: f64) -> Option<Interval> {
        let above = value > self.threshold;
        match (self.state, above) {
            (RunState::Outside, true) => {
                self.state = RunState::InRun {
                    start: pos,
                    last_good: pos,
                };
                None
            }
            (RunState::Outside, false) => None,
            (RunState::InRun { start, .. }, true) => {
                self.state = RunState::InRun {
                    start,
                    last_good: pos,
                };
                None
            }
            (RunState::InRun { start, last_good }, false) => {
                if pos - last_good > self.gap {
                    self.state = RunState::Outside;
                    Some(Interval::new(start, last_good))
                } else {
                    None
                }
            }
        }
    }

    /// Close a run still open after the last sample.
    pub fn finish(&mut self) -> Option<Interval> {
        match std::mem::take(&mut self.state) {
            RunState::InRun { start, last_good } => Some(Interval::new(start, last_good)),
            RunState::Outside => None,
        }
    }
}

/// Find the runs of `profile` whose values exceed `threshold`, bridging
/// dips of at most `gap` positions.
///
/// Runs are reported in absolute coordinates (the profile origin is added),
/// sorted and non-overlapping. Every run starts and ends on an
/// above-threshold sample.
///
/// # Example
/// ```
/// use puzzleseg_core::{Axis, Interval, Profile};
/// use puzzleseg_segment::runs::find_runs;
///
/// let p = Profile::new(Axis::Columns, 10, vec![0.0, 0.9, 0.0, 0.9, 0.0, 0.0, 0.0, 0.9]);
/// let runs = find_runs(&p, 0.5, 2);
/// assert_eq!(runs, vec![Interval::new(11, 13), Interval::new(17, 17)]);
/// ```
pub fn find_runs(profile: &Profile, threshold: f64, gap: u32) -> Vec<Interval> {
    let mut tracker = RunTracker::new(threshold, gap);
    let mut runs: Vec<Interval> = profile
        .iter()
        .filter_map(|(pos, value)| tracker.push(pos, value))
        .collect();
    runs.extend(tracker.finish());
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ink_profile, smooth_profile};
    use puzzleseg_core::{Axis, Region};
    use puzzleseg_test::SyntheticPage;

    fn profile(values: &[f64]) -> Profile {
        Profile::new(Axis::Rows, 0, values.to_vec())
    }

    /// Deterministic pseudo-random sequence in [0, 1)
    fn lcg_values(seed: u64, n: usize) -> Vec<f64> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 11) as f64 / (1u64 << 53) as f64
            })
            .collect()
    }

    #[test]
    fn test_all_zero_has_no_runs() {
        assert!(find_runs(&profile(&[0.0; 50]), 0.0, 3).is_empty());
        assert!(find_runs(&Profile::empty(), 0.1, 0).is_empty());
    }

    #[test]
    fn test_run_open_at_end() {
        let runs = find_runs(&profile(&[0.0, 0.0, 1.0, 1.0]), 0.5, 0);
        assert_eq!(runs, vec![Interval::new(2, 3)]);
    }

    #[test]
    fn test_gap_bridging() {
        // two blank positions between inks
        let p = profile(&[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(find_runs(&p, 0.5, 2), vec![Interval::new(0, 3)]);
        assert_eq!(find_runs(&p, 0.5, 1), vec![Interval::new(0, 0), Interval::new(3, 3)]);
    }

    #[test]
    fn test_zero_gap_splits_on_single_blank() {
        let p = profile(&[1.0, 0.0, 1.0]);
        assert_eq!(find_runs(&p, 0.5, 0).len(), 2);
    }

    #[test]
    fn test_trailing_blanks_not_included() {
        let p = profile(&[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(find_runs(&p, 0.5, 5), vec![Interval::new(0, 1)]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let p = profile(&[0.5, 0.5, 0.6]);
        assert_eq!(find_runs(&p, 0.5, 0), vec![Interval::new(2, 2)]);
    }

    #[test]
    fn test_origin_offset() {
        let p = Profile::new(Axis::Columns, 100, vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(find_runs(&p, 0.5, 0), vec![Interval::new(101, 102)]);
    }

    #[test]
    fn test_bars_on_page() {
        let mut page = SyntheticPage::new(100, 40).unwrap();
        page.fill(Region::new_unchecked(10, 0, 15, 39))
            .fill(Region::new_unchecked(60, 0, 68, 39));
        let pix = page.build();

        let raw = ink_profile(&pix, &Region::full(100, 40), 128, Axis::Columns);
        let smoothed = smooth_profile(&raw, 3);
        let runs = find_runs(&smoothed, 0.5, 2);

        assert_eq!(runs.len(), 2);
        for (run, (start, end)) in runs.iter().zip([(10, 15), (60, 68)]) {
            assert!(run.start.abs_diff(start) <= 1, "{run:?}");
            assert!(run.end.abs_diff(end) <= 1, "{run:?}");
        }
    }

    #[test]
    fn test_tracker_states() {
        let mut t = RunTracker::new(0.5, 1);
        assert_eq!(t.push(0, 1.0), None);
        assert_eq!(t.state(), RunState::InRun { start: 0, last_good: 0 });
        assert_eq!(t.push(1, 0.0), None);
        assert_eq!(t.push(2, 0.0), Some(Interval::new(0, 0)));
        assert_eq!(t.state(), RunState::Outside);
        assert_eq!(t.finish(), None);
    }

    #[test]
    fn test_random_profiles_sorted_and_anchored() {
        for seed in 1..40u64 {
            let values = lcg_values(seed, 200);
            let p = profile(&values);
            let threshold = 0.6;
            let gap = (seed % 4) as u32;
            let runs = find_runs(&p, threshold, gap);

            for pair in runs.windows(2) {
                // at least gap + 1 blanks between consecutive runs
                assert!(pair[1].start - pair[0].end > gap + 1);
            }
            for run in &runs {
                assert!(values[run.start as usize] > threshold);
                assert!(values[run.end as usize] > threshold);
            }
            // every above-threshold sample is covered by some run
            for (i, &v) in values.iter().enumerate() {
                if v > threshold {
                    let i = i as u32;
                    assert!(runs.iter().any(|r| r.start <= i && i <= r.end));
                }
            }
        }
    }
}
