pub mod dashboard;

pub use dashboard::YearComparisonDashboard;
