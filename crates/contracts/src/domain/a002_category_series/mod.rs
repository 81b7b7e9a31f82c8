pub mod aggregate;

pub use aggregate::{CategoryPoint, CategorySeries};
