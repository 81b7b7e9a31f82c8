pub mod aggregate;

pub use aggregate::{MonthlyMetrics, MonthlyRecord, MonthlyRow};
