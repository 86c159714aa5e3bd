//! Profile - Per-line ink ratio sequence
//!
//! A `Profile` is the 1-D signal every run detector works on: one value in
//! `[0, 1]` per row or column of a region. Index `i` corresponds to the
//! absolute coordinate `origin + i` along the profile's axis.

/// Scan axis of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One value per row (horizontal projection)
    Rows,
    /// One value per column (vertical projection)
    Columns,
}

/// Ink ratio sequence along one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    values: Vec<f64>,
    origin: u32,
    axis: Option<Axis>,
}

impl Profile {
    /// Create a profile from its values.
    pub fn new(axis: Axis, origin: u32, values: Vec<f64>) -> Self {
        Self {
            values,
            origin,
            axis: Some(axis),
        }
    }

    /// An empty profile (degenerate input)
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Absolute coordinate of index 0
    #[inline]
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Scan axis; `None` only for [`Profile::empty`]
    #[inline]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Absolute coordinate of `index`
    #[inline]
    pub fn position(&self, index: usize) -> u32 {
        self.origin + index as u32
    }

    /// Iterate `(absolute position, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.origin + i as u32, v))
    }

    /// Largest value, or 0 for an empty profile
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Centered moving average over a window of `window` samples.
    ///
    /// An even `window` is incremented to the next odd size and 0 is
    /// treated as 1. Windows that overhang either end average only the
    /// samples that exist, so the ends are neither zero-padded nor
    /// mirrored.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzleseg_core::{Axis, Profile};
    ///
    /// let p = Profile::new(Axis::Columns, 0, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    /// let s = p.moving_average(3);
    /// assert!((s.get(2).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(s.get(0), Some(0.0));
    /// ```
    pub fn moving_average(&self, window: usize) -> Profile {
        let n = self.values.len();
        let window = if window % 2 == 0 { window + 1 } else { window };
        let half = window / 2;

        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0.0f64);
        let mut sum = 0.0;
        for &v in &self.values {
            sum += v;
            prefix.push(sum);
        }

        let values = (0..n)
            .map(|i| {
                let lo = i.saturating_sub(half);
                let hi = (i + half).min(n - 1);
                (prefix[hi + 1] - prefix[lo]) / (hi - lo + 1) as f64
            })
            .collect();

        Profile {
            values,
            origin: self.origin,
            axis: self.axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let p = Profile::new(Axis::Rows, 40, vec![0.1, 0.2, 0.3]);
        assert_eq!(p.position(2), 42);
        let collected: Vec<_> = p.iter().map(|(pos, _)| pos).collect();
        assert_eq!(collected, vec![40, 41, 42]);
        assert_eq!(p.axis(), Some(Axis::Rows));
    }

    #[test]
    fn test_moving_average_constant() {
        let p = Profile::new(Axis::Columns, 0, vec![0.5; 20]);
        let s = p.moving_average(7);
        assert_eq!(s.len(), 20);
        assert!(s.values().iter().all(|v| (v - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_moving_average_boundary_uses_in_range_samples() {
        let p = Profile::new(Axis::Columns, 0, vec![1.0, 1.0, 0.0, 0.0]);
        let s = p.moving_average(3);
        // index 0 averages [1.0, 1.0] only
        assert!((s.get(0).unwrap() - 1.0).abs() < 1e-12);
        assert!((s.get(1).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((s.get(3).unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_moving_average_even_window_forced_odd() {
        let p = Profile::new(Axis::Columns, 0, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(p.moving_average(2), p.moving_average(3));
        assert_eq!(p.moving_average(0), p);
    }

    #[test]
    fn test_moving_average_empty() {
        let p = Profile::empty();
        assert!(p.moving_average(5).is_empty());
    }
}
