use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_pnl_overview::PnlOverviewResponse;
use gloo_net::http::Request;

/// Fetch the computed P&L overview: monthly rows, KPI cards and charts
pub async fn get_pnl_overview() -> Result<PnlOverviewResponse, String> {
    let response = Request::get(&api_url("/api/d100/pnl_overview"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PnlOverviewResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
