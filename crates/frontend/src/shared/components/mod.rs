pub mod charts;
pub mod kpi_strip;
pub mod number_format;
pub mod stat_card;
