//! Descriptive statistics over sample sets.
//!
//! This module provides percentile calculation and the summary record
//! derived from one sample set. Standard deviation is the **population**
//! form (divisor `n`), matching the statistics emitted by every producer of
//! the result files this crate consumes.

use serde::{Deserialize, Serialize};

/// Calculate a percentile value from a slice of f64 samples.
///
/// Uses linear interpolation between nearest ranks.
///
/// # Arguments
///
/// * `samples` - Slice of samples (will be sorted internally)
/// * `p` - Percentile to calculate (0.0 to 100.0)
///
/// # Returns
///
/// * `Some(value)` - The percentile value
/// * `None` - If samples is empty or p is invalid
///
/// # Examples
///
/// ```
/// use bench_analysis::stats::percentile;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), Some(3.0));
/// ```
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    if samples.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if sorted.len() == 1 {
        return Some(sorted[0]);
    }

    // Calculate the rank using linear interpolation
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;

    if lower_index == upper_index {
        Some(sorted[lower_index])
    } else {
        let lower_value = sorted[lower_index];
        let upper_value = sorted[upper_index];
        let fraction = rank - lower_index as f64;
        Some(lower_value + fraction * (upper_value - lower_value))
    }
}

/// Summary statistics of one sample set.
///
/// Only computable from a non-empty set; [`SummaryStats::from_samples`]
/// returns `None` for empty input rather than producing NaN or zero
/// placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Compute summary statistics from samples.
    ///
    /// # Returns
    ///
    /// * `Some(stats)` - Statistical summary
    /// * `None` - If samples is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_analysis::stats::SummaryStats;
    ///
    /// let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    /// let stats = SummaryStats::from_samples(&data).unwrap();
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = sorted.len();
        let min = sorted[0];
        let max = sorted[count - 1];

        let sum: f64 = sorted.iter().sum();
        let mean = sum / count as f64;

        // Population standard deviation: divisor is n, not n - 1.
        let squared_diffs: f64 = sorted.iter().map(|&x| (x - mean).powi(2)).sum();
        let std_dev = (squared_diffs / count as f64).sqrt();

        let median = percentile(&sorted, 50.0)?;

        Some(SummaryStats {
            count,
            mean,
            median,
            std_dev,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_empty_samples() {
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn test_percentile_single_sample() {
        let samples = vec![42.0];
        assert_eq!(percentile(&samples, 50.0), Some(42.0));
        assert_eq!(percentile(&samples, 0.0), Some(42.0));
        assert_eq!(percentile(&samples, 100.0), Some(42.0));
    }

    #[test]
    fn test_percentile_invalid_p() {
        let samples = vec![1.0, 2.0, 3.0];
        assert_eq!(percentile(&samples, -1.0), None);
        assert_eq!(percentile(&samples, 101.0), None);
    }

    #[test]
    fn test_percentile_unsorted_samples() {
        let samples = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(percentile(&samples, 50.0), Some(3.0));
    }

    #[test]
    fn test_median_even_count_interpolates() {
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&samples, 50.0), Some(2.5));
    }

    #[test]
    fn test_summary_empty() {
        assert!(SummaryStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_summary_single_sample() {
        let stats = SummaryStats::from_samples(&[42.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
    }

    #[test]
    fn test_summary_population_std_dev() {
        // Known set: population variance 4.0, sample variance would be 32/7.
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_samples(&samples).unwrap();

        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.median, 4.5);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_summary_unsorted_input() {
        let samples = vec![10.0, 1.0, 5.0, 3.0, 8.0, 2.0, 9.0, 4.0, 7.0, 6.0];
        let stats = SummaryStats::from_samples(&samples).unwrap();

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 5.5);
        assert_eq!(stats.median, 5.5);
    }

    #[test]
    fn test_summary_all_finite() {
        let samples = vec![0.070656, 1.854131, 1853.0];
        let stats = SummaryStats::from_samples(&samples).unwrap();

        assert!(stats.mean.is_finite());
        assert!(stats.median.is_finite());
        assert!(stats.std_dev.is_finite());
        assert!(stats.min.is_finite());
        assert!(stats.max.is_finite());
    }
}
