use serde::{Deserialize, Serialize};

/// Response for the category bubble chart dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySalesResponse {
    /// Month labels addressable by 1-based month index.
    pub month_labels: Vec<String>,
    pub categories: Vec<CategoryBubbleSeries>,
}

/// One category as plotted on the bubble chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBubbleSeries {
    pub name: String,
    pub points: Vec<BubblePoint>,
}

/// One bubble. The renderer derives the bubble radius from `sales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubblePoint {
    /// 1-based month index on the x axis.
    pub month_index: u32,
    /// Label resolved from the dataset's month axis, falling back to the
    /// index when the axis is shorter.
    pub month_label: String,
    pub sales: f64,
}
