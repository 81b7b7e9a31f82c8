use contracts::dashboards::d102_year_comparison::YearComparisonResponse;
use contracts::domain::a003_year_comparison::{YearComparison, YearComparisonRow};
use contracts::shared::series::{ChartData, ChartSeries, SeriesKind};

use crate::shared::format::signed_pct;
use crate::shared::metrics::growth_pct;

/// Assemble the year-over-year comparison: per-month rows with derived MTD
/// growth, plus the grouped bar chart.
pub fn build_year_comparison(input: &YearComparison) -> YearComparisonResponse {
    let rows: Vec<YearComparisonRow> = input
        .months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let prior_mtd = input.prior_mtd[i];
            let current_mtd = input.current_mtd[i];
            YearComparisonRow {
                month: month.clone(),
                prior_full: input.prior_full[i],
                prior_mtd,
                current_mtd,
                growth_pct: growth_pct(current_mtd, prior_mtd),
            }
        })
        .collect();

    let chart = comparison_chart(input, &rows);

    YearComparisonResponse {
        prior_year: input.prior_year.clone(),
        current_year: input.current_year.clone(),
        rows,
        chart,
    }
}

fn comparison_chart(input: &YearComparison, rows: &[YearComparisonRow]) -> ChartData {
    let prior_full: Vec<Option<f64>> = rows.iter().map(|r| Some(r.prior_full)).collect();
    let prior_mtd: Vec<Option<f64>> = rows.iter().map(|r| Some(r.prior_mtd)).collect();
    let current_mtd: Vec<Option<f64>> = rows.iter().map(|r| Some(r.current_mtd)).collect();
    let annotations: Vec<Option<String>> =
        rows.iter().map(|r| r.growth_pct.map(signed_pct)).collect();

    ChartData {
        id: "year_comparison".into(),
        title: format!(
            "Sales {} vs {} (month to date)",
            input.prior_year, input.current_year
        ),
        x_labels: input.months.clone(),
        series: vec![
            ChartSeries::new(
                "prior_full",
                &format!("{} full month", input.prior_year),
                SeriesKind::Bar,
                prior_full,
            ),
            ChartSeries::new(
                "prior_mtd",
                &format!("{} MTD", input.prior_year),
                SeriesKind::Bar,
                prior_mtd,
            ),
            ChartSeries::new(
                "current_mtd",
                &format!("{} MTD", input.current_year),
                SeriesKind::Bar,
                current_mtd,
            )
            .with_annotations(annotations),
        ],
        y_axis_title: "Sales ($)".into(),
        secondary_axis_title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> YearComparison {
        YearComparison {
            prior_year: "2024".into(),
            current_year: "2025".into(),
            months: vec!["Jan".into(), "Feb".into()],
            prior_full: vec![142891.0, 135770.0],
            prior_mtd: vec![50.0, 0.0],
            current_mtd: vec![60.0, 112908.0],
        }
    }

    #[test]
    fn test_rows_carry_mtd_growth() {
        let response = build_year_comparison(&input());

        assert_eq!(response.rows.len(), 2);
        let jan = &response.rows[0];
        assert_eq!(jan.month, "Jan");
        assert_eq!(jan.prior_full, 142891.0);
        assert_eq!(jan.growth_pct, Some(20.0));
    }

    #[test]
    fn test_zero_prior_mtd_has_no_growth() {
        let response = build_year_comparison(&input());

        let feb = &response.rows[1];
        assert!(feb.growth_pct.is_none());
    }

    #[test]
    fn test_chart_layout() {
        let response = build_year_comparison(&input());
        let chart = response.chart;

        assert_eq!(chart.x_labels, vec!["Jan", "Feb"]);
        assert_eq!(chart.series.len(), 3);
        assert!(chart.series.iter().all(|s| s.kind == SeriesKind::Bar));
        assert_eq!(chart.series[0].label, "2024 full month");
        assert_eq!(chart.series[2].label, "2025 MTD");

        // Only the current MTD series is annotated, and only where the
        // prior MTD was non-zero.
        assert!(chart.series[0].annotations.is_empty());
        assert_eq!(chart.series[2].annotations[0].as_deref(), Some("+20.0%"));
        assert!(chart.series[2].annotations[1].is_none());
    }
}
