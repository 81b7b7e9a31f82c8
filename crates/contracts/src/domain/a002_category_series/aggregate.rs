use serde::{Deserialize, Serialize};

/// Sales of one product category across months, independent of the monthly
/// P&L table. Used by the category bubble chart only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    /// Category name, e.g. "Pharmacy".
    pub name: String,
    /// `(month_index, sales)` pairs. Month indexes are 1-based and strictly
    /// increasing within one category; the dataset loader enforces this.
    pub points: Vec<CategoryPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub month_index: u32,
    pub sales: f64,
}

impl CategorySeries {
    /// Whether `month_index` strictly increases across `points`.
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].month_index < w[1].month_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(indexes: &[u32]) -> CategorySeries {
        CategorySeries {
            name: "Pharmacy".into(),
            points: indexes
                .iter()
                .map(|&month_index| CategoryPoint {
                    month_index,
                    sales: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_monotonic_indexes() {
        assert!(series(&[1, 2, 3, 7]).is_monotonic());
        assert!(series(&[4]).is_monotonic());
        assert!(series(&[]).is_monotonic());
    }

    #[test]
    fn test_non_monotonic_indexes() {
        assert!(!series(&[1, 3, 3]).is_monotonic());
        assert!(!series(&[2, 1]).is_monotonic());
    }
}
