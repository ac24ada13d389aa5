use super::handlers::{
    assess_items::{__path_assess_items, assess_items},
    get_risk_levels::{__path_get_risk_levels, get_risk_levels},
    get_shelf_life::{__path_get_shelf_life, get_shelf_life},
    predict_freshness::{__path_predict_freshness, predict_freshness},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict_freshness, assess_items, get_shelf_life, get_risk_levels))]
pub struct FreshnessApiDoc;

pub fn freshness_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/freshness/predict", state.args.server.root_path),
            post(predict_freshness),
        )
        .route(
            &format!("{}/freshness/assessments", state.args.server.root_path),
            post(assess_items),
        )
        .route(
            &format!("{}/freshness/shelf-life", state.args.server.root_path),
            get(get_shelf_life),
        )
        .route(
            &format!("{}/freshness/risk-levels", state.args.server.root_path),
            get(get_risk_levels),
        )
}
