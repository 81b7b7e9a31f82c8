use contracts::dashboards::d101_category_sales::{
    BubblePoint, CategoryBubbleSeries, CategorySalesResponse,
};

use crate::shared::data::dataset::CategoryTable;

/// Assemble the category bubble payload, resolving month labels from the
/// dataset's month axis.
pub fn build_category_sales(table: &CategoryTable) -> CategorySalesResponse {
    let categories = table
        .series
        .iter()
        .map(|series| CategoryBubbleSeries {
            name: series.name.clone(),
            points: series
                .points
                .iter()
                .map(|p| BubblePoint {
                    month_index: p.month_index,
                    month_label: month_label(&table.month_labels, p.month_index),
                    sales: p.sales,
                })
                .collect(),
        })
        .collect();

    CategorySalesResponse {
        month_labels: table.month_labels.clone(),
        categories,
    }
}

/// Label for a 1-based month index. Indexes beyond the axis (or zero) fall
/// back to the bare index.
fn month_label(labels: &[String], month_index: u32) -> String {
    month_index
        .checked_sub(1)
        .and_then(|i| labels.get(i as usize))
        .cloned()
        .unwrap_or_else(|| month_index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category_series::{CategoryPoint, CategorySeries};

    fn table() -> CategoryTable {
        CategoryTable {
            month_labels: vec!["Jan-25".into(), "Feb-25".into()],
            series: vec![
                CategorySeries {
                    name: "Pharmacy".into(),
                    points: vec![
                        CategoryPoint {
                            month_index: 1,
                            sales: 120873.0,
                        },
                        CategoryPoint {
                            month_index: 2,
                            sales: 130167.0,
                        },
                    ],
                },
                CategorySeries {
                    name: "Miscellaneous".into(),
                    points: vec![CategoryPoint {
                        month_index: 9,
                        sales: 100.0,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_month_labels_resolve_from_axis() {
        let response = build_category_sales(&table());

        assert_eq!(response.categories.len(), 2);
        let pharmacy = &response.categories[0];
        assert_eq!(pharmacy.name, "Pharmacy");
        assert_eq!(pharmacy.points[0].month_label, "Jan-25");
        assert_eq!(pharmacy.points[1].month_label, "Feb-25");
        assert_eq!(pharmacy.points[1].sales, 130167.0);
    }

    #[test]
    fn test_out_of_axis_index_falls_back_to_number() {
        let response = build_category_sales(&table());

        let misc = &response.categories[1];
        assert_eq!(misc.points[0].month_index, 9);
        assert_eq!(misc.points[0].month_label, "9");
    }

    #[test]
    fn test_zero_index_falls_back_to_number() {
        assert_eq!(month_label(&["Jan-25".to_string()], 0), "0");
    }
}
