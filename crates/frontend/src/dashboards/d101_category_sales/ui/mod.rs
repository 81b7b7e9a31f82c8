pub mod dashboard;

pub use dashboard::CategorySalesDashboard;
