use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use freshguard_core::domain::freshness::{FreshnessService, RiskBand};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRiskLevelsResponse {
    pub data: Vec<RiskBand>,
}

#[utoipa::path(
    get,
    path = "/risk-levels",
    tag = "freshness",
    summary = "Get risk levels",
    description = "Score bands for each risk level. Lower bounds are inclusive; only the last band includes its upper bound.",
    responses(
        (status = 200, body = GetRiskLevelsResponse)
    ),
)]
pub async fn get_risk_levels(
    State(state): State<AppState>,
) -> Result<Response<GetRiskLevelsResponse>, ApiError> {
    Ok(Response::OK(GetRiskLevelsResponse {
        data: state.service.risk_levels(),
    }))
}
