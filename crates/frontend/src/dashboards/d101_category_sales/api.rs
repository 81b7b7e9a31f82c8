use crate::shared::api_utils::api_url;
use contracts::dashboards::d101_category_sales::CategorySalesResponse;
use gloo_net::http::Request;

/// Fetch the per-category monthly sales for the bubble chart
pub async fn get_category_sales() -> Result<CategorySalesResponse, String> {
    let response = Request::get(&api_url("/api/d101/category_sales"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CategorySalesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
