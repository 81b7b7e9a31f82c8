use contracts::domain::a001_monthly_record::{MonthlyMetrics, MonthlyRecord};
use contracts::shared::indicators::*;

use crate::shared::indicators::metadata::ids;
use crate::shared::metrics::growth_pct;

/// Changes inside this band read as flat rather than good or bad.
const STATUS_THRESHOLD_PCT: f64 = 5.0;

fn status_by_change(change: Option<f64>, higher_is_good: bool) -> IndicatorStatus {
    match change {
        Some(c) if c > STATUS_THRESHOLD_PCT => {
            if higher_is_good {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            }
        }
        Some(c) if c < -STATUS_THRESHOLD_PCT => {
            if higher_is_good {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            }
        }
        _ => IndicatorStatus::Neutral,
    }
}

/// Month-over-month change when both endpoints have a value.
fn change_between(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(cur), Some(prev)) => growth_pct(cur, prev),
        _ => None,
    }
}

/// KPI cards for the last recorded month.
///
/// `records` and `metrics` are the positional outputs of the calculator:
/// equal length, chronological order. An absent input keeps its card but
/// blanks the value; the card renders a dash.
pub fn compute_kpis(records: &[MonthlyRecord], metrics: &[MonthlyMetrics]) -> Vec<IndicatorValue> {
    let Some(last) = records.len().checked_sub(1) else {
        return Vec::new();
    };
    let prev = last.checked_sub(1);
    let subtitle = Some(records[last].month.clone());

    let sales_change = metrics[last].sales_growth_pct;
    let sales = IndicatorValue {
        id: ids::sales(),
        value: Some(records[last].sales),
        previous_value: prev.map(|p| records[p].sales),
        change_percent: sales_change,
        status: status_by_change(sales_change, true),
        subtitle: subtitle.clone(),
    };

    let profit = metrics[last].operating_profit;
    let prev_profit = prev.and_then(|p| metrics[p].operating_profit);
    let profit_change = change_between(profit, prev_profit);
    let operating_profit = IndicatorValue {
        id: ids::operating_profit(),
        value: profit,
        previous_value: prev_profit,
        change_percent: profit_change,
        status: status_by_change(profit_change, true),
        subtitle: subtitle.clone(),
    };

    let invoice_count = records[last].invoices;
    let prev_invoices = prev.and_then(|p| records[p].invoices);
    let invoices_change = change_between(invoice_count, prev_invoices);
    let invoices = IndicatorValue {
        id: ids::invoices(),
        value: invoice_count,
        previous_value: prev_invoices,
        change_percent: invoices_change,
        status: status_by_change(invoices_change, true),
        subtitle: subtitle.clone(),
    };

    let avg_units = metrics[last].avg_units_per_invoice;
    let prev_avg_units = prev.and_then(|p| metrics[p].avg_units_per_invoice);
    let avg_units_change = change_between(avg_units, prev_avg_units);
    let avg_units_per_invoice = IndicatorValue {
        id: ids::avg_units_per_invoice(),
        value: avg_units,
        previous_value: prev_avg_units,
        change_percent: avg_units_change,
        status: status_by_change(avg_units_change, true),
        subtitle,
    };

    vec![sales, operating_profit, invoices, avg_units_per_invoice]
}
