use serde::{Deserialize, Serialize};

// ============================================================================
// Monthly P&L record
// ============================================================================

/// One row of the monthly P&L table, as loaded from the dataset file.
///
/// Records are chronologically ordered by position in the containing series;
/// `month` is a display token and never participates in ordering or
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Display label, e.g. "Dec-24".
    pub month: String,
    /// Sales amount. Required for every record.
    pub sales: f64,
    /// Cost of sales. Absent for the earliest record(s) of a series, where no
    /// cost baseline exists yet.
    #[serde(default)]
    pub cost_of_sales: Option<f64>,
    /// Invoices generated. Same availability rule as `cost_of_sales`.
    #[serde(default)]
    pub invoices: Option<f64>,
    /// Units sold. Same availability rule as `cost_of_sales`.
    #[serde(default)]
    pub units_sold: Option<f64>,
}

/// Fields derived from one [`MonthlyRecord`] (and its predecessor, for
/// growth). A `None` means "no value": the inputs were absent or a
/// denominator was zero. Renderers omit `None` points instead of plotting
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    /// `sales - cost_of_sales`.
    pub operating_profit: Option<f64>,
    /// `operating_profit / sales * 100`.
    pub operating_margin_pct: Option<f64>,
    /// `units_sold / invoices`.
    pub avg_units_per_invoice: Option<f64>,
    /// Month-over-month sales change in percent. Always `None` at index 0.
    pub sales_growth_pct: Option<f64>,
}

/// A record joined with its derived metrics, as returned by dashboard
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRow {
    #[serde(flatten)]
    pub record: MonthlyRecord,
    #[serde(flatten)]
    pub metrics: MonthlyMetrics,
}
