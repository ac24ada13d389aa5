use crate::{
    domain::{
        common::{FreshguardConfig, entities::app_errors::CoreError, services::Service},
        freshness::services::FreshnessPredictor,
    },
    infrastructure::clock::SystemClock,
};

pub type FreshGuardService = Service<SystemClock>;

pub fn create_service(config: FreshguardConfig) -> Result<FreshGuardService, CoreError> {
    let predictor = FreshnessPredictor::new(config.predictor)?;

    tracing::info!(
        open_packaging_multiplier = predictor.config().open_packaging_multiplier,
        "freshness predictor configured"
    );

    Ok(Service::new(SystemClock, predictor))
}
