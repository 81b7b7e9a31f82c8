pub mod a001_monthly_record;
pub mod a002_category_series;
pub mod a003_year_comparison;
