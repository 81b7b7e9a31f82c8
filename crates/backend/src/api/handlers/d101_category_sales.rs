use axum::Json;
use contracts::dashboards::d101_category_sales::CategorySalesResponse;

use crate::dashboards::d101_category_sales::service;
use crate::shared::data::get_dataset;

/// GET /api/d101/category_sales
pub async fn get_category_sales() -> Json<CategorySalesResponse> {
    let dataset = get_dataset();

    let response = service::build_category_sales(&dataset.categories);
    tracing::info!(
        "D101 Dashboard: returning {} categories over {} months",
        response.categories.len(),
        response.month_labels.len()
    );
    Json(response)
}
