use serde::{Deserialize, Serialize};

/// Year-over-year sales comparison input: for each month of the current year
/// so far, the full prior-year month, the prior-year month-to-date slice and
/// the current-year month-to-date slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearComparison {
    /// Label of the prior year, e.g. "2024".
    pub prior_year: String,
    /// Label of the current year, e.g. "2025".
    pub current_year: String,
    /// Month labels, e.g. ["Jan", "Feb", ...]. All value vectors below have
    /// this length; the dataset loader enforces it.
    pub months: Vec<String>,
    /// Full-month sales of the prior year.
    pub prior_full: Vec<f64>,
    /// Month-to-date sales of the prior year (same partial period as
    /// `current_mtd`).
    pub prior_mtd: Vec<f64>,
    /// Month-to-date sales of the current year.
    pub current_mtd: Vec<f64>,
}

/// One comparison row with the derived MTD growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearComparisonRow {
    pub month: String,
    pub prior_full: f64,
    pub prior_mtd: f64,
    pub current_mtd: f64,
    /// `(current_mtd - prior_mtd) / prior_mtd * 100`; `None` when the prior
    /// MTD is zero.
    pub growth_pct: Option<f64>,
}
