pub mod dto;

pub use dto::YearComparisonResponse;
