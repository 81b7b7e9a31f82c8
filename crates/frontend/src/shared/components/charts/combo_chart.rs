//! SVG combo chart: grouped bars plus line series over shared month labels,
//! with an optional secondary value axis on the right

use super::series_color;
use crate::shared::components::number_format::compact;
use contracts::shared::series::{ChartData, ChartSeries, SeriesKind};
use leptos::prelude::*;

const VIEW_W: f64 = 720.0;
const VIEW_H: f64 = 360.0;

const PLOT_LEFT: f64 = 56.0;
const PLOT_RIGHT: f64 = VIEW_W - 56.0;
const PLOT_TOP: f64 = 24.0;
const PLOT_BOTTOM: f64 = VIEW_H - 36.0;

/// Maps data values onto vertical pixel positions inside the plot area.
#[derive(Debug, Clone, Copy)]
struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    /// Covers every plotted value of `series` plus the zero baseline.
    fn covering(series: &[&ChartSeries]) -> Self {
        let mut min = 0.0f64;
        let mut max = 0.0f64;
        for s in series {
            for v in s.points.iter().flatten() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        // Degenerate domain (no points, or everything zero)
        if max - min == 0.0 {
            max = min + 1.0;
        }
        Self { min, max }
    }

    fn y(&self, value: f64) -> f64 {
        let t = (value - self.min) / (self.max - self.min);
        PLOT_BOTTOM - t * (PLOT_BOTTOM - PLOT_TOP)
    }

    /// Five tick values, bottom to top.
    fn ticks(&self) -> Vec<f64> {
        (0..=4)
            .map(|i| self.min + (self.max - self.min) * i as f64 / 4.0)
            .collect()
    }
}

/// Consecutive runs of present points as (index, value) pairs. Lines break
/// where a month has no value instead of bridging the gap.
fn present_runs(points: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();
    for (i, p) in points.iter().enumerate() {
        match p {
            Some(v) => current.push((i, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn slot_center(index: usize, count: usize) -> f64 {
    let slot = (PLOT_RIGHT - PLOT_LEFT) / count as f64;
    PLOT_LEFT + slot * (index as f64 + 0.5)
}

#[component]
pub fn ComboChart(chart: ChartData) -> impl IntoView {
    let n = chart.x_labels.len().max(1);

    let primary_series: Vec<&ChartSeries> =
        chart.series.iter().filter(|s| !s.secondary_axis).collect();
    let secondary_series: Vec<&ChartSeries> =
        chart.series.iter().filter(|s| s.secondary_axis).collect();

    let primary = ValueScale::covering(&primary_series);
    let secondary = if secondary_series.is_empty() {
        None
    } else {
        Some(ValueScale::covering(&secondary_series))
    };

    let scale_for = |s: &ChartSeries| -> ValueScale {
        if s.secondary_axis {
            secondary.unwrap_or(primary)
        } else {
            primary
        }
    };

    let slot = (PLOT_RIGHT - PLOT_LEFT) / n as f64;
    let bar_count = chart
        .series
        .iter()
        .filter(|s| s.kind == SeriesKind::Bar)
        .count()
        .max(1);
    let group_w = slot * 0.7;
    let bar_w = group_w / bar_count as f64;

    let mut marks: Vec<AnyView> = Vec::new();

    // Horizontal gridlines with tick labels on the left (and on the right
    // when a secondary axis is present)
    for (i, tick) in primary.ticks().into_iter().enumerate() {
        let y = format!("{:.1}", primary.y(tick));
        let label = compact(tick);
        marks.push(
            view! {
                <g>
                    <line
                        x1="56" y1=y.clone() x2="664" y2=y.clone()
                        stroke="#e2e2e2" stroke-width="1"
                    />
                    <text
                        x="48" y=format!("{:.1}", primary.y(tick) + 4.0)
                        text-anchor="end" font-size="11" fill="#666"
                    >
                        {label}
                    </text>
                </g>
            }
            .into_any(),
        );
        if let Some(sec) = secondary {
            let sec_tick = sec.min + (sec.max - sec.min) * i as f64 / 4.0;
            marks.push(
                view! {
                    <text
                        x="672" y=format!("{:.1}", primary.y(tick) + 4.0)
                        text-anchor="start" font-size="11" fill="#666"
                    >
                        {compact(sec_tick)}
                    </text>
                }
                .into_any(),
            );
        }
    }

    // Bars, grouped inside each month slot
    let mut bar_position = 0usize;
    for (series_index, series) in chart.series.iter().enumerate() {
        if series.kind != SeriesKind::Bar {
            continue;
        }
        let scale = scale_for(series);
        let y_zero = scale.y(0.0);
        let color = series_color(series_index);
        for (j, point) in series.points.iter().enumerate() {
            let Some(v) = point else { continue };
            let y_v = scale.y(*v);
            let (top, height) = if *v >= 0.0 {
                (y_v, y_zero - y_v)
            } else {
                (y_zero, y_v - y_zero)
            };
            let x = PLOT_LEFT
                + j as f64 * slot
                + (slot - group_w) / 2.0
                + bar_position as f64 * bar_w;
            marks.push(
                view! {
                    <rect
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", top)
                        width=format!("{:.1}", bar_w.max(1.0) - 1.0)
                        height=format!("{:.1}", height)
                        fill=color
                        rx="2"
                    />
                }
                .into_any(),
            );
            if let Some(Some(text)) = series.annotations.get(j) {
                let ty = if *v >= 0.0 { top - 6.0 } else { top + height + 14.0 };
                marks.push(
                    view! {
                        <text
                            x=format!("{:.1}", x + bar_w / 2.0)
                            y=format!("{:.1}", ty)
                            text-anchor="middle" font-size="11" fill="#444"
                        >
                            {text.clone()}
                        </text>
                    }
                    .into_any(),
                );
            }
        }
        bar_position += 1;
    }

    // Lines and scatter markers
    for (series_index, series) in chart.series.iter().enumerate() {
        if series.kind == SeriesKind::Bar {
            continue;
        }
        let scale = scale_for(series);
        let color = series_color(series_index);
        let dash = if series.dashed { "6 4" } else { "none" };
        for run in present_runs(&series.points) {
            if series.kind == SeriesKind::Line && run.len() >= 2 {
                let path: String = run
                    .iter()
                    .map(|(i, v)| {
                        format!("{:.1},{:.1}", slot_center(*i, n), scale.y(*v))
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                marks.push(
                    view! {
                        <polyline
                            points=path
                            fill="none"
                            stroke=color
                            stroke-width="2.5"
                            stroke-dasharray=dash
                        />
                    }
                    .into_any(),
                );
            }
            for (i, v) in &run {
                let cx = format!("{:.1}", slot_center(*i, n));
                let cy = format!("{:.1}", scale.y(*v));
                marks.push(
                    view! {
                        <circle cx=cx.clone() cy=cy.clone() r="3.5" fill=color />
                    }
                    .into_any(),
                );
                if let Some(Some(text)) = series.annotations.get(*i) {
                    marks.push(
                        view! {
                            <text
                                x=cx
                                y=format!("{:.1}", scale.y(*v) - 8.0)
                                text-anchor="middle" font-size="11" fill="#444"
                            >
                                {text.clone()}
                            </text>
                        }
                        .into_any(),
                    );
                }
            }
        }
    }

    // Month labels under each slot
    for (j, label) in chart.x_labels.iter().enumerate() {
        marks.push(
            view! {
                <text
                    x=format!("{:.1}", slot_center(j, n))
                    y="340"
                    text-anchor="middle" font-size="11" fill="#444"
                >
                    {label.clone()}
                </text>
            }
            .into_any(),
        );
    }

    // Rotated axis captions
    let mid_y = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
    marks.push(
        view! {
            <text
                transform="rotate(-90)"
                x=format!("{:.1}", -mid_y)
                y="14"
                text-anchor="middle" font-size="12" fill="#333"
            >
                {chart.y_axis_title.clone()}
            </text>
        }
        .into_any(),
    );
    if let Some(title) = &chart.secondary_axis_title {
        marks.push(
            view! {
                <text
                    transform="rotate(90)"
                    x=format!("{:.1}", mid_y)
                    y=format!("{:.1}", -(VIEW_W - 14.0))
                    text-anchor="middle" font-size="12" fill="#333"
                >
                    {title.clone()}
                </text>
            }
            .into_any(),
        );
    }

    let legend: Vec<AnyView> = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = series_color(i);
            view! {
                <span class="chart__legend-item">
                    <span
                        class="chart__legend-swatch"
                        style=format!("background-color: {}", color)
                    ></span>
                    {s.label.clone()}
                </span>
            }
            .into_any()
        })
        .collect();

    view! {
        <div class="chart">
            <h3 class="chart__title">{chart.title.clone()}</h3>
            <svg viewBox="0 0 720 360" class="chart__canvas" role="img">
                {marks}
            </svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<Option<f64>>) -> ChartSeries {
        ChartSeries::new("s", "S", SeriesKind::Bar, points)
    }

    #[test]
    fn test_scale_includes_zero_baseline() {
        let s = series(vec![Some(10.0), Some(20.0)]);
        let scale = ValueScale::covering(&[&s]);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 20.0);
    }

    #[test]
    fn test_scale_spans_negatives() {
        let s = series(vec![Some(-5.0), Some(10.0)]);
        let scale = ValueScale::covering(&[&s]);
        assert_eq!(scale.min, -5.0);
        assert_eq!(scale.max, 10.0);
    }

    #[test]
    fn test_degenerate_scale_gets_nonzero_span() {
        let s = series(vec![None, None]);
        let scale = ValueScale::covering(&[&s]);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 1.0);
    }

    #[test]
    fn test_y_maps_domain_onto_plot() {
        let scale = ValueScale { min: 0.0, max: 100.0 };
        assert_eq!(scale.y(0.0), 324.0);
        assert_eq!(scale.y(100.0), 24.0);
        assert_eq!(scale.y(50.0), 174.0);
    }

    #[test]
    fn test_ticks_cover_domain() {
        let scale = ValueScale { min: 0.0, max: 20.0 };
        assert_eq!(scale.ticks(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_runs_break_at_missing_points() {
        let runs = present_runs(&[Some(1.0), None, Some(2.0), Some(3.0)]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0, 1.0)]);
        assert_eq!(runs[1], vec![(2, 2.0), (3, 3.0)]);
    }

    #[test]
    fn test_all_missing_yields_no_runs() {
        assert!(present_runs(&[None, None]).is_empty());
    }
}
