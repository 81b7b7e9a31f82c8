pub mod aggregate;

pub use aggregate::{YearComparison, YearComparisonRow};
