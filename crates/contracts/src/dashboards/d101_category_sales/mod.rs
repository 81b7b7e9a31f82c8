pub mod dto;

pub use dto::{BubblePoint, CategoryBubbleSeries, CategorySalesResponse};
