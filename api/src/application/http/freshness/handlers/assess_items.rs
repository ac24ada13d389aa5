use crate::application::http::freshness::validators::AssessItemsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use freshguard_core::domain::{
    food_item::entities::FoodItem,
    freshness::{FreshnessService, ItemAssessment},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssessItemsResponse {
    pub data: Vec<ItemAssessment>,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/assessments",
    tag = "freshness",
    summary = "Assess items",
    description = "Predicts every active item in the batch and returns them ranked from highest to lowest risk. Consumed and discarded items are skipped.",
    responses(
        (status = 200, body = AssessItemsResponse),
        (status = 422, description = "Validation failed")
    ),
    request_body = AssessItemsValidator
)]
pub async fn assess_items(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AssessItemsValidator>,
) -> Result<Response<AssessItemsResponse>, ApiError> {
    let items: Vec<FoodItem> = payload.items.into_iter().map(FoodItem::from).collect();
    let assessments = state.service.assess_items(&items);

    Ok(Response::OK(AssessItemsResponse {
        count: assessments.len(),
        data: assessments,
    }))
}
