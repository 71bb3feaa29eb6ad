//! Sum-and-count accumulator for one scalar metric.

/// Accumulates values for a single metric and answers their arithmetic mean.
/// Only ever grows; there is no way to remove a value once added.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningAverage {
    sum: f64,
    count: i64,
}

impl RunningAverage {
    /// Folds one value in. Any float is accepted without validation.
    pub fn add(&mut self, value: f32) {
        self.sum += f64::from(value);
        self.count += 1;
    }

    /// The mean of everything added so far, or `None` when nothing has been
    /// added yet.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }

        Some(self.sum / self.count as f64)
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_compute_mean_of_added_values() {
        let mut average = RunningAverage::default();

        for value in [10.0, 20.0, 12.5] {
            average.add(value);
        }

        assert_eq!(average.count(), 3);
        assert!((average.mean().unwrap() - 14.166_666).abs() < 1e-5);
    }

    #[test]
    fn should_signal_empty_accumulator() {
        let average = RunningAverage::default();

        assert_eq!(average.mean(), None);
        assert_eq!(average.count(), 0);
    }

    #[test]
    fn should_accept_garbage_values() {
        let mut average = RunningAverage::default();

        average.add(f32::NAN);
        average.add(1.0);

        assert_eq!(average.count(), 2);
        assert!(average.mean().unwrap().is_nan());
    }
}
