use crate::application::http::freshness::validators::PredictFreshnessValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use freshguard_core::domain::{
    food_item::entities::FoodItem,
    freshness::{FreshnessService, PredictionResult},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictFreshnessResponse {
    pub data: PredictionResult,
}

#[utoipa::path(
    post,
    path = "/predict",
    tag = "freshness",
    summary = "Predict freshness",
    description = "Scores the spoilage risk of a single food item and explains the result. When `now` is omitted the server clock is used.",
    responses(
        (status = 200, body = PredictFreshnessResponse),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    ),
    request_body = PredictFreshnessValidator
)]
pub async fn predict_freshness(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PredictFreshnessValidator>,
) -> Result<Response<PredictFreshnessResponse>, ApiError> {
    let item = FoodItem::from(payload.item);

    let prediction = match payload.now {
        Some(now) => state.service.predict_item_at(&item, now),
        None => state.service.predict_item(&item),
    };

    Ok(Response::OK(PredictFreshnessResponse { data: prediction }))
}
