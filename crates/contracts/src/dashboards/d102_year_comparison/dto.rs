use serde::{Deserialize, Serialize};

use crate::domain::a003_year_comparison::YearComparisonRow;
use crate::shared::series::ChartData;

/// Response for the year-over-year comparison dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearComparisonResponse {
    pub prior_year: String,
    pub current_year: String,
    /// Per-month comparison rows with derived MTD growth.
    pub rows: Vec<YearComparisonRow>,
    /// Grouped bars: prior full year, prior MTD, current MTD (the current
    /// MTD series carries growth annotations).
    pub chart: ChartData,
}
