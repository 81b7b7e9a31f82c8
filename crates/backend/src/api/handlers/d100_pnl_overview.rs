use axum::Json;
use contracts::dashboards::d100_pnl_overview::PnlOverviewResponse;

use crate::dashboards::d100_pnl_overview::service;
use crate::shared::config::get_config;
use crate::shared::data::get_dataset;

/// GET /api/d100/pnl_overview
pub async fn get_pnl_overview() -> Json<PnlOverviewResponse> {
    let dataset = get_dataset();
    let trend_fit = get_config().metrics.trend_fit;

    let response = service::build_overview(&dataset.pnl.records, trend_fit);
    tracing::info!(
        "D100 Dashboard: returning {} rows, {} KPIs, {} charts",
        response.rows.len(),
        response.kpis.len(),
        response.charts.len()
    );
    Json(response)
}
