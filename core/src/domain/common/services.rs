use crate::domain::{common::ports::Clock, freshness::services::FreshnessPredictor};

#[derive(Clone)]
pub struct Service<C>
where
    C: Clock,
{
    pub(crate) clock: C,
    pub(crate) predictor: FreshnessPredictor,
}

impl<C> Service<C>
where
    C: Clock,
{
    pub fn new(clock: C, predictor: FreshnessPredictor) -> Self {
        Self { clock, predictor }
    }
}
