use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use petai_core::{Coordinate, NearbyPlace, PlaceDetail, SearchCategory};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NearbyParams {
    lat: Option<f64>,
    lng: Option<f64>,
    category: Option<String>,
    radius: Option<u32>,
}

/// Resolves the optional origin. Either coordinate missing means "no
/// location yet" and is not an error; present but out of range is.
fn origin_from_params(params: &NearbyParams) -> Result<Option<Coordinate>, String> {
    match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Coordinate::try_new(lat, lng)
            .map(Some)
            .map_err(|e| e.to_string()),
        _ => Ok(None),
    }
}

pub(super) async fn nearby(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<NearbyPlace>>>, ApiError> {
    let Query(params) = params.map_err(|e| {
        ApiError::new(req_id.0.clone(), "validation_error", e.body_text())
    })?;
    let origin = origin_from_params(&params)
        .map_err(|reason| ApiError::new(req_id.0.clone(), "validation_error", reason))?;
    if params.radius == Some(0) {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "radius must be greater than zero",
        ));
    }

    let category = params
        .category
        .as_deref()
        .unwrap_or(SearchCategory::All.key());
    let places = state.search.search(origin, category, params.radius).await;
    Ok(Json(ApiResponse::new(places, req_id.0)))
}

pub(super) async fn detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<PlaceDetail>>, ApiError> {
    match state.search.place_detail(&place_id).await {
        Some(detail) => Ok(Json(ApiResponse::new(detail, req_id.0))),
        None => Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("place {place_id} is unavailable"),
        )),
    }
}
