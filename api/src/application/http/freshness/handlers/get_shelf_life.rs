use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use freshguard_core::domain::freshness::{FreshnessService, shelf_life::ShelfLifeEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetShelfLifeResponse {
    pub data: Vec<ShelfLifeEntry>,
}

#[utoipa::path(
    get,
    path = "/shelf-life",
    tag = "freshness",
    summary = "Get shelf-life table",
    description = "Baseline shelf life in days for every category and storage method.",
    responses(
        (status = 200, body = GetShelfLifeResponse)
    ),
)]
pub async fn get_shelf_life(
    State(state): State<AppState>,
) -> Result<Response<GetShelfLifeResponse>, ApiError> {
    Ok(Response::OK(GetShelfLifeResponse {
        data: state.service.shelf_life_table(),
    }))
}
