/// First-degree least-squares fit of a sales series.
///
/// The independent variable is the position `0, 1, 2, ..` within the series
/// handed in; callers that fit a filtered subset renumber positions within
/// that subset first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fitted value for every position of a series of length `n`.
    pub fn fitted(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.value_at(i as f64)).collect()
    }
}

/// Ordinary least-squares line through `(i, values[i])`.
///
/// `None` for fewer than two points: a single observation fixes no slope.
pub fn fit_line(values: &[f64]) -> Option<TrendLine> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..values.len()).map(|i| (i as f64) * (i as f64)).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(TrendLine { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_is_recovered() {
        // y = 2x + 5 over 4 positions.
        let line = fit_line(&[5.0, 7.0, 9.0, 11.0]).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-6);
        assert!((line.intercept - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_fitted_values_follow_the_line() {
        let line = fit_line(&[5.0, 7.0, 9.0, 11.0]).unwrap();
        let fitted = line.fitted(4);
        assert_eq!(fitted.len(), 4);
        for (i, value) in fitted.iter().enumerate() {
            assert!((value - (2.0 * i as f64 + 5.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_noisy_series_fits_between_extremes() {
        let line = fit_line(&[10.0, 12.0, 11.0, 15.0, 14.0]).unwrap();
        assert!(line.slope > 0.0);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(fit_line(&[]), None);
        assert_eq!(fit_line(&[42.0]), None);
    }

    #[test]
    fn test_flat_series_has_zero_slope() {
        let line = fit_line(&[3.0, 3.0, 3.0]).unwrap();
        assert!(line.slope.abs() < 1e-12);
        assert!((line.intercept - 3.0).abs() < 1e-9);
    }
}
