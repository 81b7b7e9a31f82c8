use axum::Json;
use contracts::shared::indicators::IndicatorCatalogResponse;

use crate::shared::indicators::metadata;

/// GET /api/indicators/meta
///
/// Returns the static catalogue of KPI cards (labels, icons, formats).
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog())
}
