use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chart series contract
// ---------------------------------------------------------------------------
//
// The backend computes these; the frontend only renders them. A `None` point
// means "no value for this month" and must be omitted from the chart, never
// plotted as zero.

/// How one series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Bar,
    Line,
    Scatter,
}

/// One named y-series over the chart's shared x-labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    /// Legend label.
    pub label: String,
    pub kind: SeriesKind,
    /// Draw on the secondary (right) value axis.
    #[serde(default)]
    pub secondary_axis: bool,
    /// Dashed stroke (lines only).
    #[serde(default)]
    pub dashed: bool,
    /// One entry per x-label; `None` entries are skipped by the renderer.
    pub points: Vec<Option<f64>>,
    /// Per-point annotations shown next to the mark (e.g. "+12.3%" on a
    /// grouped bar). Empty when the series carries no annotations.
    #[serde(default)]
    pub annotations: Vec<Option<String>>,
}

impl ChartSeries {
    pub fn new(id: &str, label: &str, kind: SeriesKind, points: Vec<Option<f64>>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            secondary_axis: false,
            dashed: false,
            points,
            annotations: Vec::new(),
        }
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Option<String>>) -> Self {
        self.annotations = annotations;
        self
    }
}

/// A complete chart payload: shared x-labels plus the series drawn over them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Axis captions. `secondary_axis_title` is `None` when no series uses
    /// the secondary axis.
    pub y_axis_title: String,
    #[serde(default)]
    pub secondary_axis_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_points_serialize_as_null() {
        let series = ChartSeries::new(
            "sales",
            "Sales",
            SeriesKind::Bar,
            vec![None, Some(110.0), Some(99.0)],
        );
        let json = serde_json::to_value(&series).unwrap();
        assert!(json["points"][0].is_null());
        assert_eq!(json["points"][1], 110.0);
    }

    #[test]
    fn test_builder_flags() {
        let series = ChartSeries::new("trend", "Sales trend", SeriesKind::Line, vec![Some(1.0)])
            .on_secondary_axis()
            .with_dash();
        assert!(series.secondary_axis);
        assert!(series.dashed);
        assert!(series.annotations.is_empty());
    }
}
