//! SVG bubble chart: one bubble per category and month, bubble area scaled
//! by that month's sales

use super::series_color;
use crate::shared::components::number_format::{compact, format_money};
use contracts::dashboards::d101_category_sales::CategoryBubbleSeries;
use leptos::prelude::*;
use std::collections::HashSet;

const VIEW_W: f64 = 720.0;
const VIEW_H: f64 = 360.0;

const PLOT_LEFT: f64 = 56.0;
const PLOT_RIGHT: f64 = VIEW_W - 24.0;
const PLOT_TOP: f64 = 24.0;
const PLOT_BOTTOM: f64 = VIEW_H - 36.0;

/// Radius grows with the square root of sales so bubble area tracks the
/// value. Smallest bubbles stay clickable at 4px.
fn bubble_radius(sales: f64, max_sales: f64) -> f64 {
    if max_sales <= 0.0 {
        return 4.0;
    }
    4.0 + 20.0 * (sales / max_sales).sqrt()
}

/// Largest sales value across every category. Axis and radius scales use
/// all categories so toggling one does not rescale the chart.
fn max_sales(categories: &[CategoryBubbleSeries]) -> f64 {
    let mut max = 0.0f64;
    for category in categories {
        for point in &category.points {
            max = max.max(point.sales);
        }
    }
    max
}

/// Number of x-axis slots: the month axis, stretched when a point carries
/// an index past the end of it.
fn x_slot_count(label_count: usize, categories: &[CategoryBubbleSeries]) -> usize {
    let max_index = categories
        .iter()
        .flat_map(|c| c.points.iter().map(|p| p.month_index))
        .max()
        .unwrap_or(0) as usize;
    label_count.max(max_index).max(1)
}

fn slot_center(month_index: u32, slots: usize) -> f64 {
    let slot = (PLOT_RIGHT - PLOT_LEFT) / slots as f64;
    PLOT_LEFT + slot * (month_index as f64 - 0.5)
}

fn sales_y(sales: f64, max: f64) -> f64 {
    let cap = if max <= 0.0 { 1.0 } else { max };
    PLOT_BOTTOM - (sales / cap) * (PLOT_BOTTOM - PLOT_TOP)
}

#[component]
pub fn BubbleChart(
    /// Chart heading
    title: String,
    /// Month labels addressable by 1-based month index
    month_labels: Vec<String>,
    /// Every category, in palette order; visibility is filtered per render
    categories: Vec<CategoryBubbleSeries>,
    /// Category names currently shown
    #[prop(into)]
    visible: Signal<HashSet<String>>,
) -> impl IntoView {
    let slots = x_slot_count(month_labels.len(), &categories);
    let max = max_sales(&categories);
    let categories = StoredValue::new(categories);

    let mut frame: Vec<AnyView> = Vec::new();

    // Horizontal gridlines with sales tick labels
    for i in 0..=4 {
        let tick = if max <= 0.0 { i as f64 / 4.0 } else { max * i as f64 / 4.0 };
        let y = format!("{:.1}", sales_y(tick, max));
        frame.push(
            view! {
                <g>
                    <line
                        x1="56" y1=y.clone() x2="696" y2=y.clone()
                        stroke="#e2e2e2" stroke-width="1"
                    />
                    <text
                        x="48" y=format!("{:.1}", sales_y(tick, max) + 4.0)
                        text-anchor="end" font-size="11" fill="#666"
                    >
                        {compact(tick)}
                    </text>
                </g>
            }
            .into_any(),
        );
    }

    // Month labels under each slot, 1-based index past the end of the axis
    for j in 0..slots {
        let label = month_labels
            .get(j)
            .cloned()
            .unwrap_or_else(|| (j + 1).to_string());
        frame.push(
            view! {
                <text
                    x=format!("{:.1}", slot_center(j as u32 + 1, slots))
                    y="340"
                    text-anchor="middle" font-size="11" fill="#444"
                >
                    {label}
                </text>
            }
            .into_any(),
        );
    }

    let mid_y = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
    frame.push(
        view! {
            <text
                transform="rotate(-90)"
                x=format!("{:.1}", -mid_y)
                y="14"
                text-anchor="middle" font-size="12" fill="#333"
            >
                "Sales ($)"
            </text>
        }
        .into_any(),
    );

    let bubbles = move || {
        let shown = visible.get();
        categories.with_value(|cats| {
            cats.iter()
                .enumerate()
                .filter(|(_, c)| shown.contains(&c.name))
                .flat_map(|(i, c)| {
                    let color = series_color(i);
                    c.points
                        .iter()
                        .map(|p| {
                            let label = format!(
                                "{} {}: {}",
                                c.name,
                                p.month_label,
                                format_money(p.sales, "$")
                            );
                            view! {
                                <circle
                                    cx=format!("{:.1}", slot_center(p.month_index, slots))
                                    cy=format!("{:.1}", sales_y(p.sales, max))
                                    r=format!("{:.1}", bubble_radius(p.sales, max))
                                    fill=color
                                    fill-opacity="0.65"
                                    stroke=color
                                    stroke-width="1.5"
                                    aria-label=label
                                />
                            }
                            .into_any()
                        })
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>()
        })
    };

    let legend = move || {
        let shown = visible.get();
        categories.with_value(|cats| {
            cats.iter()
                .enumerate()
                .map(|(i, c)| {
                    let cls = if shown.contains(&c.name) {
                        "chart__legend-item"
                    } else {
                        "chart__legend-item chart__legend-item--muted"
                    };
                    view! {
                        <span class=cls>
                            <span
                                class="chart__legend-swatch"
                                style=format!("background-color: {}", series_color(i))
                            ></span>
                            {c.name.clone()}
                        </span>
                    }
                    .into_any()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox="0 0 720 360" class="chart__canvas" role="img">
                {frame}
                {bubbles}
            </svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d101_category_sales::BubblePoint;

    fn category(name: &str, points: Vec<(u32, f64)>) -> CategoryBubbleSeries {
        CategoryBubbleSeries {
            name: name.to_string(),
            points: points
                .into_iter()
                .map(|(month_index, sales)| BubblePoint {
                    month_index,
                    month_label: month_index.to_string(),
                    sales,
                })
                .collect(),
        }
    }

    #[test]
    fn test_radius_tracks_share_of_max() {
        assert_eq!(bubble_radius(100.0, 100.0), 24.0);
        assert_eq!(bubble_radius(25.0, 100.0), 14.0);
        assert_eq!(bubble_radius(0.0, 100.0), 4.0);
    }

    #[test]
    fn test_radius_with_no_sales_stays_minimal() {
        assert_eq!(bubble_radius(0.0, 0.0), 4.0);
    }

    #[test]
    fn test_slot_count_stretches_past_axis() {
        let cats = vec![category("A", vec![(9, 10.0)])];
        assert_eq!(x_slot_count(3, &cats), 9);
        assert_eq!(x_slot_count(12, &cats), 12);
    }

    #[test]
    fn test_slot_count_never_zero() {
        assert_eq!(x_slot_count(0, &[]), 1);
    }

    #[test]
    fn test_max_sales_spans_all_categories() {
        let cats = vec![
            category("A", vec![(1, 10.0), (2, 80.0)]),
            category("B", vec![(1, 120.0)]),
        ];
        assert_eq!(max_sales(&cats), 120.0);
    }

    #[test]
    fn test_sales_y_maps_domain_onto_plot() {
        assert_eq!(sales_y(0.0, 100.0), 324.0);
        assert_eq!(sales_y(100.0, 100.0), 24.0);
        assert_eq!(sales_y(50.0, 100.0), 174.0);
    }
}
