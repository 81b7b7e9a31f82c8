use serde::{Deserialize, Serialize};

use crate::domain::a001_monthly_record::MonthlyRow;
use crate::shared::indicators::IndicatorValue;
use crate::shared::series::ChartData;

/// Response for the P&L overview dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlOverviewResponse {
    /// Month labels of the full series, in chronological order.
    pub months: Vec<String>,
    /// The monthly table joined with its derived fields.
    pub rows: Vec<MonthlyRow>,
    /// KPI cards for the last recorded month.
    pub kpis: Vec<IndicatorValue>,
    /// The four overview charts, in display order:
    /// sales & operating profit, invoices & units, growth & trend,
    /// average units per invoice.
    pub charts: Vec<ChartData>,
}
