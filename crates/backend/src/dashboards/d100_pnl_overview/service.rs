use contracts::dashboards::d100_pnl_overview::PnlOverviewResponse;
use contracts::domain::a001_monthly_record::{MonthlyMetrics, MonthlyRecord, MonthlyRow};
use contracts::shared::series::{ChartData, ChartSeries, SeriesKind};

use crate::shared::config::TrendFit;
use crate::shared::format::signed_pct;
use crate::shared::indicators::compute::compute_kpis;
use crate::shared::metrics::{self, trend};

/// Assemble the full P&L overview: table rows, KPI cards and the four charts.
pub fn build_overview(records: &[MonthlyRecord], trend_fit: TrendFit) -> PnlOverviewResponse {
    let derived = metrics::compute(records);

    let months: Vec<String> = records.iter().map(|r| r.month.clone()).collect();
    let kpis = compute_kpis(records, &derived);
    let rows: Vec<MonthlyRow> = records
        .iter()
        .cloned()
        .zip(derived.iter().cloned())
        .map(|(record, metrics)| MonthlyRow { record, metrics })
        .collect();

    let charts = vec![
        sales_and_profit_chart(records, &derived),
        invoices_and_units_chart(records),
        growth_and_trend_chart(records, &derived, trend_fit),
        avg_units_chart(records, &derived),
    ];

    PnlOverviewResponse {
        months,
        rows,
        kpis,
        charts,
    }
}

/// Indexes of records with every optional input present. Charts show only
/// these months; leading records without a cost baseline stay in the table
/// but never reach a chart.
fn complete_indexes(records: &[MonthlyRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.cost_of_sales.is_some() && r.invoices.is_some() && r.units_sold.is_some()
        })
        .map(|(i, _)| i)
        .collect()
}

fn chart_labels(records: &[MonthlyRecord], indexes: &[usize]) -> Vec<String> {
    indexes.iter().map(|&i| records[i].month.clone()).collect()
}

// ---------------------------------------------------------------------------
// The four overview charts
// ---------------------------------------------------------------------------

fn sales_and_profit_chart(records: &[MonthlyRecord], derived: &[MonthlyMetrics]) -> ChartData {
    let complete = complete_indexes(records);

    let sales: Vec<Option<f64>> = complete.iter().map(|&i| Some(records[i].sales)).collect();
    let profit: Vec<Option<f64>> = complete
        .iter()
        .map(|&i| derived[i].operating_profit)
        .collect();
    let margin: Vec<Option<f64>> = complete
        .iter()
        .map(|&i| derived[i].operating_margin_pct)
        .collect();

    ChartData {
        id: "sales_profit".into(),
        title: "Sales and Operating Profit".into(),
        x_labels: chart_labels(records, &complete),
        series: vec![
            ChartSeries::new("sales", "Sales", SeriesKind::Bar, sales),
            ChartSeries::new("operating_profit", "Operating profit", SeriesKind::Bar, profit),
            ChartSeries::new("operating_margin", "Operating margin", SeriesKind::Line, margin)
                .on_secondary_axis(),
        ],
        y_axis_title: "Amount ($)".into(),
        secondary_axis_title: Some("Margin (%)".into()),
    }
}

fn invoices_and_units_chart(records: &[MonthlyRecord]) -> ChartData {
    let complete = complete_indexes(records);

    let invoices: Vec<Option<f64>> = complete.iter().map(|&i| records[i].invoices).collect();
    let units: Vec<Option<f64>> = complete.iter().map(|&i| records[i].units_sold).collect();

    ChartData {
        id: "invoices_units".into(),
        title: "Invoices and Units Sold".into(),
        x_labels: chart_labels(records, &complete),
        series: vec![
            ChartSeries::new("invoices", "Invoices", SeriesKind::Bar, invoices),
            ChartSeries::new("units_sold", "Units sold", SeriesKind::Line, units)
                .on_secondary_axis(),
        ],
        y_axis_title: "Invoices".into(),
        secondary_axis_title: Some("Units".into()),
    }
}

fn growth_and_trend_chart(
    records: &[MonthlyRecord],
    derived: &[MonthlyMetrics],
    trend_fit: TrendFit,
) -> ChartData {
    let complete = complete_indexes(records);

    let growth: Vec<Option<f64>> = complete
        .iter()
        .map(|&i| derived[i].sales_growth_pct)
        .collect();
    let annotations: Vec<Option<String>> = growth.iter().map(|g| g.map(signed_pct)).collect();

    let mut series = vec![
        ChartSeries::new("sales_growth", "Sales growth", SeriesKind::Bar, growth)
            .with_annotations(annotations),
    ];

    // The fit subset depends on the configured policy; positions renumber
    // from zero within whichever subset is fitted.
    let trend_points: Option<Vec<Option<f64>>> = match trend_fit {
        TrendFit::CompleteRecords => {
            let subset: Vec<f64> = complete.iter().map(|&i| records[i].sales).collect();
            trend::fit_line(&subset)
                .map(|line| line.fitted(subset.len()).into_iter().map(Some).collect())
        }
        TrendFit::AllRecords => {
            let all: Vec<f64> = records.iter().map(|r| r.sales).collect();
            trend::fit_line(&all)
                .map(|line| complete.iter().map(|&i| Some(line.value_at(i as f64))).collect())
        }
    };

    if let Some(points) = trend_points {
        series.push(
            ChartSeries::new("sales_trend", "Sales trend", SeriesKind::Line, points)
                .on_secondary_axis()
                .with_dash(),
        );
    }

    ChartData {
        id: "growth_trend".into(),
        title: "Sales Growth and Trend".into(),
        x_labels: chart_labels(records, &complete),
        series,
        y_axis_title: "Growth (%)".into(),
        secondary_axis_title: Some("Sales trend ($)".into()),
    }
}

fn avg_units_chart(records: &[MonthlyRecord], derived: &[MonthlyMetrics]) -> ChartData {
    let complete = complete_indexes(records);

    let avg_units: Vec<Option<f64>> = complete
        .iter()
        .map(|&i| derived[i].avg_units_per_invoice)
        .collect();

    ChartData {
        id: "avg_units".into(),
        title: "Average Units per Invoice".into(),
        x_labels: chart_labels(records, &complete),
        series: vec![ChartSeries::new(
            "avg_units_per_invoice",
            "Units per invoice",
            SeriesKind::Line,
            avg_units,
        )],
        y_axis_title: "Units per invoice".into(),
        secondary_axis_title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        month: &str,
        sales: f64,
        cost: Option<f64>,
        inv: Option<f64>,
        units: Option<f64>,
    ) -> MonthlyRecord {
        MonthlyRecord {
            month: month.to_string(),
            sales,
            cost_of_sales: cost,
            invoices: inv,
            units_sold: units,
        }
    }

    fn sample_records() -> Vec<MonthlyRecord> {
        vec![
            record("Dec-24", 100.0, None, None, None),
            record("Jan-25", 110.0, Some(50.0), Some(10.0), Some(40.0)),
            record("Feb-25", 99.0, Some(44.0), Some(11.0), Some(44.0)),
        ]
    }

    #[test]
    fn test_overview_shape() {
        let records = sample_records();
        let response = build_overview(&records, TrendFit::CompleteRecords);

        assert_eq!(response.months, vec!["Dec-24", "Jan-25", "Feb-25"]);
        assert_eq!(response.rows.len(), 3);
        assert_eq!(response.kpis.len(), 4);
        assert_eq!(response.charts.len(), 4);

        let ids: Vec<&str> = response.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["sales_profit", "invoices_units", "growth_trend", "avg_units"]
        );
    }

    #[test]
    fn test_charts_skip_incomplete_months() {
        let records = sample_records();
        let response = build_overview(&records, TrendFit::CompleteRecords);

        for chart in &response.charts {
            assert_eq!(chart.x_labels, vec!["Jan-25", "Feb-25"]);
            for series in &chart.series {
                assert_eq!(series.points.len(), 2);
            }
        }
    }

    #[test]
    fn test_growth_spans_the_chart_boundary() {
        // Jan has a growth value against December even though December
        // itself is not charted.
        let records = sample_records();
        let response = build_overview(&records, TrendFit::CompleteRecords);

        let growth = &response.charts[2].series[0];
        assert_eq!(growth.id, "sales_growth");
        assert_eq!(growth.kind, SeriesKind::Bar);
        assert_eq!(growth.points, vec![Some(10.0), Some(-10.0)]);
        assert_eq!(growth.annotations[0].as_deref(), Some("+10.0%"));
        assert_eq!(growth.annotations[1].as_deref(), Some("-10.0%"));
    }

    #[test]
    fn test_trend_line_is_dashed_and_secondary() {
        let records = sample_records();
        let response = build_overview(&records, TrendFit::CompleteRecords);

        let trend = &response.charts[2].series[1];
        assert_eq!(trend.id, "sales_trend");
        assert!(trend.dashed);
        assert!(trend.secondary_axis);
        // Two points fit exactly: 110 and 99.
        let points: Vec<f64> = trend.points.iter().map(|p| p.unwrap()).collect();
        assert!((points[0] - 110.0).abs() < 1e-9);
        assert!((points[1] - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_omitted_below_two_points() {
        let records = vec![
            record("Dec-24", 100.0, None, None, None),
            record("Jan-25", 110.0, Some(50.0), Some(10.0), Some(40.0)),
        ];
        let response = build_overview(&records, TrendFit::CompleteRecords);

        let chart = &response.charts[2];
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].id, "sales_growth");
    }

    #[test]
    fn test_all_records_policy_fits_the_full_axis() {
        // Sales follow y = 100 + 10x over the full series; positions keep
        // their full-axis numbering, so the fitted values at the complete
        // months are 110 and 120 under either subset's exact fit.
        let records = vec![
            record("Dec-24", 100.0, None, None, None),
            record("Jan-25", 110.0, Some(50.0), Some(10.0), Some(40.0)),
            record("Feb-25", 120.0, Some(44.0), Some(11.0), Some(44.0)),
        ];
        let response = build_overview(&records, TrendFit::AllRecords);

        let trend = &response.charts[2].series[1];
        let points: Vec<f64> = trend.points.iter().map(|p| p.unwrap()).collect();
        assert!((points[0] - 110.0).abs() < 1e-9);
        assert!((points[1] - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_sales_chart_series_layout() {
        let records = sample_records();
        let response = build_overview(&records, TrendFit::CompleteRecords);

        let chart = &response.charts[0];
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].kind, SeriesKind::Bar);
        assert_eq!(chart.series[1].kind, SeriesKind::Bar);
        assert_eq!(chart.series[2].kind, SeriesKind::Line);
        assert!(chart.series[2].secondary_axis);
        assert_eq!(chart.series[1].points, vec![Some(60.0), Some(55.0)]);
    }
}
