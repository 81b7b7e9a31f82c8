use axum::Json;
use contracts::dashboards::d102_year_comparison::YearComparisonResponse;

use crate::dashboards::d102_year_comparison::service;
use crate::shared::data::get_dataset;

/// GET /api/d102/year_comparison
pub async fn get_year_comparison() -> Json<YearComparisonResponse> {
    let dataset = get_dataset();

    let response = service::build_year_comparison(&dataset.year_comparison);
    tracing::info!(
        "D102 Dashboard: returning {} comparison rows ({} vs {})",
        response.rows.len(),
        response.prior_year,
        response.current_year
    );
    Json(response)
}
