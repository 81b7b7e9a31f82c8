use crate::shared::api_utils::api_url;
use contracts::dashboards::d102_year_comparison::YearComparisonResponse;
use gloo_net::http::Request;

/// Fetch the year-over-year comparison (full month vs month-to-date)
pub async fn get_year_comparison() -> Result<YearComparisonResponse, String> {
    let response = Request::get(&api_url("/api/d102/year_comparison"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: YearComparisonResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
