//! Rolling window statistics.
//!
//! Fixed-capacity ring buffer with O(1) push. Running sums are kept relative
//! to the first sample ever pushed, which keeps the sum-of-squares variance
//! formula accurate for prices far from zero.

/// Summary of the current window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollingStats {
    Ready { mean: f64, std_dev: f64, count: usize },
    InsufficientData { count: usize, required: usize },
}

#[derive(Debug, Clone)]
pub struct RollingWindow {
    buffer: Vec<f64>,
    capacity: usize,
    head: usize,
    /// Offset subtracted from every sample before summing.
    shift: Option<f64>,
    sum: f64,
    sum_sq: f64,
}

impl RollingWindow {
    /// Window holding the last `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            shift: None,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Append a sample, evicting the oldest once full.
    pub fn push(&mut self, value: f64) {
        let shift = *self.shift.get_or_insert(value);
        let centered = value - shift;

        if self.is_full() {
            let old = self.buffer[self.head] - shift;
            self.sum -= old;
            self.sum_sq -= old * old;
            self.buffer[self.head] = value;
        } else {
            self.buffer.push(value);
        }
        self.head = (self.head + 1) % self.capacity;
        self.sum += centered;
        self.sum_sq += centered * centered;
    }

    /// Mean and sample standard deviation (n - 1 denominator).
    pub fn stats(&self, min_samples: usize) -> RollingStats {
        let count = self.buffer.len();
        let required = min_samples.max(2);
        if count < required {
            return RollingStats::InsufficientData { count, required };
        }

        let n = count as f64;
        let shift = self.shift.unwrap_or_default();
        let mean = shift + self.sum / n;
        let variance = ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0);
        RollingStats::Ready {
            mean,
            std_dev: variance.sqrt(),
            count,
        }
    }

    /// Standardised distance of `value` from the window mean.
    ///
    /// `None` on insufficient data or when the standard deviation is below
    /// `min_std`.
    pub fn z_score(&self, value: f64, min_samples: usize, min_std: f64) -> Option<f64> {
        match self.stats(min_samples) {
            RollingStats::Ready { mean, std_dev, .. } if std_dev >= min_std && std_dev > 0.0 => {
                Some((value - mean) / std_dev)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, var.sqrt())
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_insufficient_data() {
        let mut w = RollingWindow::new(20);
        for i in 0..14 {
            w.push(100.0 + i as f64);
        }
        assert_eq!(
            w.stats(15),
            RollingStats::InsufficientData {
                count: 14,
                required: 15
            }
        );
        assert_eq!(w.z_score(110.0, 15, 0.01), None);
        w.push(50.0);
        assert!(matches!(w.stats(15), RollingStats::Ready { count: 15, .. }));
    }

    #[test]
    fn test_single_sample_never_ready() {
        let mut w = RollingWindow::new(5);
        w.push(1.0);
        assert_eq!(
            w.stats(0),
            RollingStats::InsufficientData {
                count: 1,
                required: 2
            }
        );
    }

    #[test]
    fn test_matches_direct_recomputation_after_wrap() {
        let samples: Vec<f64> = (0..57)
            .map(|i| 10_000.0 + ((i * 37) % 11) as f64 * 0.5 - (i % 3) as f64)
            .collect();
        let mut w = RollingWindow::new(20);
        for (i, &s) in samples.iter().enumerate() {
            w.push(s);
            let start = (i + 1).saturating_sub(20);
            let window = &samples[start..=i];
            if window.len() >= 2 {
                let (mean, std) = direct(window);
                match w.stats(2) {
                    RollingStats::Ready {
                        mean: m,
                        std_dev,
                        count,
                    } => {
                        assert_close(m, mean);
                        assert_close(std_dev, std);
                        assert_eq!(count, window.len());
                    }
                    other => panic!("unexpected {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_evicts_oldest_once_full() {
        let mut w = RollingWindow::new(3);
        assert!(w.is_empty());
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            w.push(v);
        }
        assert_eq!(w.len(), 3);
        assert!(w.is_full());
        match w.stats(2) {
            RollingStats::Ready { mean, .. } => assert_close(mean, 4.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_constant_series_zero_std() {
        let mut w = RollingWindow::new(10);
        for _ in 0..10 {
            w.push(250.5);
        }
        match w.stats(2) {
            RollingStats::Ready { mean, std_dev, .. } => {
                assert_close(mean, 250.5);
                assert_eq!(std_dev, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(w.z_score(251.0, 2, 0.01), None);
    }

    #[test]
    fn test_z_score() {
        let mut w = RollingWindow::new(4);
        for v in [1.0, 2.0, 3.0, 4.0] {
            w.push(v);
        }
        let (mean, std) = direct(&[1.0, 2.0, 3.0, 4.0]);
        let z = w.z_score(6.0, 4, 0.01).unwrap();
        assert_close(z, (6.0 - mean) / std);
        assert_eq!(w.z_score(6.0, 4, 5.0), None);
    }
}
