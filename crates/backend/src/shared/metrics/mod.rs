//! Derived-metric computation over the monthly P&L table.
//!
//! Everything here is pure arithmetic over an already-ordered series: no
//! I/O, no state, no validation. A missing input or a zero denominator
//! produces `None` ("no value"), never an error and never a float special.

pub mod trend;

use contracts::domain::a001_monthly_record::{MonthlyMetrics, MonthlyRecord};

/// Percent change from `previous` to `current`.
///
/// `None` when the denominator is zero: a zero-sales month has no defined
/// growth, and infinities or NaN must never reach a renderer.
pub fn growth_pct(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Compute the four derived fields for every record of an ordered series.
///
/// The input order is taken as chronological order; records are never
/// sorted. The result has exactly one element per input record, and
/// recomputing from the same input yields the same output.
pub fn compute(records: &[MonthlyRecord]) -> Vec<MonthlyMetrics> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let operating_profit = record.cost_of_sales.map(|cost| record.sales - cost);

            let operating_margin_pct = match operating_profit {
                Some(profit) if record.sales != 0.0 => Some(profit / record.sales * 100.0),
                _ => None,
            };

            let avg_units_per_invoice = match (record.units_sold, record.invoices) {
                (Some(units), Some(invoices)) if invoices != 0.0 => Some(units / invoices),
                _ => None,
            };

            // Index 0 has no predecessor, so growth is structurally absent.
            let sales_growth_pct = if i == 0 {
                None
            } else {
                growth_pct(record.sales, records[i - 1].sales)
            };

            MonthlyMetrics {
                operating_profit,
                operating_margin_pct,
                avg_units_per_invoice,
                sales_growth_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sales: f64, cost: Option<f64>) -> MonthlyRecord {
        MonthlyRecord {
            month: String::new(),
            sales,
            cost_of_sales: cost,
            invoices: None,
            units_sold: None,
        }
    }

    #[test]
    fn test_absent_cost_blanks_profit_and_margin() {
        let records = vec![record(100.0, None), record(110.0, Some(50.0))];
        let metrics = compute(&records);
        assert_eq!(metrics[0].operating_profit, None);
        assert_eq!(metrics[0].operating_margin_pct, None);
        assert_eq!(metrics[1].operating_profit, Some(60.0));
    }

    #[test]
    fn test_growth_is_absent_for_first_record() {
        let records = vec![record(100.0, Some(1.0))];
        assert_eq!(compute(&records)[0].sales_growth_pct, None);
    }

    #[test]
    fn test_three_month_growth_and_margin() {
        // sales [100, 110, 99], cost [absent, 50, 40]
        let records = vec![
            record(100.0, None),
            record(110.0, Some(50.0)),
            record(99.0, Some(40.0)),
        ];
        let metrics = compute(&records);

        let growth: Vec<Option<f64>> = metrics.iter().map(|m| m.sales_growth_pct).collect();
        assert_eq!(growth[0], None);
        assert!((growth[1].unwrap() - 10.0).abs() < 1e-9);
        assert!((growth[2].unwrap() - (-10.0)).abs() < 1e-9);

        assert_eq!(metrics[1].operating_profit, Some(60.0));
        assert_eq!(metrics[2].operating_profit, Some(59.0));

        assert!((metrics[1].operating_margin_pct.unwrap() - 60.0 / 110.0 * 100.0).abs() < 1e-9);
        assert!((metrics[2].operating_margin_pct.unwrap() - 59.0 / 99.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_previous_sales_has_no_growth() {
        let records = vec![record(0.0, None), record(50.0, None)];
        let metrics = compute(&records);
        assert_eq!(metrics[1].sales_growth_pct, None);
    }

    #[test]
    fn test_zero_sales_has_no_margin() {
        let records = vec![record(0.0, Some(10.0))];
        let metrics = compute(&records);
        // Profit is still defined (plain subtraction), margin is not.
        assert_eq!(metrics[0].operating_profit, Some(-10.0));
        assert_eq!(metrics[0].operating_margin_pct, None);
    }

    #[test]
    fn test_zero_invoices_never_faults() {
        let mut r = record(100.0, None);
        r.invoices = Some(0.0);
        r.units_sold = Some(500.0);
        let metrics = compute(&[r]);
        assert_eq!(metrics[0].avg_units_per_invoice, None);
    }

    #[test]
    fn test_units_per_invoice() {
        let mut r = record(100.0, None);
        r.invoices = Some(4.0);
        r.units_sold = Some(10.0);
        let metrics = compute(&[r]);
        assert_eq!(metrics[0].avg_units_per_invoice, Some(2.5));
    }

    #[test]
    fn test_all_optionals_missing_degrades_to_none() {
        let records = vec![record(145032.0, None)];
        let metrics = compute(&records);
        assert_eq!(metrics[0], Default::default());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let records = vec![
            record(100.0, None),
            record(110.0, Some(50.0)),
            record(99.0, Some(40.0)),
        ];
        assert_eq!(compute(&records), compute(&records));
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        // No validation: a negative cost just yields a profit above sales.
        let records = vec![record(100.0, Some(-20.0))];
        let metrics = compute(&records);
        assert_eq!(metrics[0].operating_profit, Some(120.0));
    }
}
