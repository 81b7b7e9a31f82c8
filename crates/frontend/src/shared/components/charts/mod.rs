pub mod bubble_chart;
pub mod combo_chart;

/// Categorical palette applied to series by position.
pub const PALETTE: [&str; 5] = ["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f"];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
