pub mod d100_pnl_overview;
pub mod d101_category_sales;
pub mod d102_year_comparison;

pub use d100_pnl_overview::ui::PnlOverviewDashboard;
pub use d101_category_sales::ui::CategorySalesDashboard;
pub use d102_year_comparison::ui::YearComparisonDashboard;
