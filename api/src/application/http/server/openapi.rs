use crate::application::http::{freshness::router::FreshnessApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FreshGuard API"
    ),
    nest(
        (path = "/freshness", api = FreshnessApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
