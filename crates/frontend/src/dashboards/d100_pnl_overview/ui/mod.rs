pub mod dashboard;

pub use dashboard::PnlOverviewDashboard;
