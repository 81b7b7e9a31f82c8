pub mod d100_pnl_overview;
pub mod d101_category_sales;
pub mod d102_year_comparison;
