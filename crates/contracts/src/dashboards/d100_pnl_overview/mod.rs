pub mod dto;

pub use dto::PnlOverviewResponse;
