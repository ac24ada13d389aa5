use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    food_item::entities::FoodItem,
    freshness::{
        classifier::{RiskBand, RiskLevel},
        entities::{ItemAssessment, PredictionResult},
        explainer::Explainer,
        features::FeatureExtractor,
        ports::FreshnessService,
        scorer::RiskScorer,
        shelf_life::{ShelfLifeEntry, ShelfLifeTable},
        value_objects::PredictorConfig,
    },
};

static DEFAULT_PREDICTOR: LazyLock<FreshnessPredictor> =
    LazyLock::new(FreshnessPredictor::default);

/// Predict with the default model constants.
pub fn predict(item: &FoodItem, now: DateTime<Utc>) -> PredictionResult {
    DEFAULT_PREDICTOR.predict(item, now)
}

/// The prediction pipeline: extract signals, score, classify, explain.
#[derive(Debug, Clone, Default)]
pub struct FreshnessPredictor {
    config: PredictorConfig,
}

impl FreshnessPredictor {
    pub fn new(config: PredictorConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    #[instrument(skip_all, fields(item_id = %item.id, category = item.category.as_str()))]
    pub fn predict(&self, item: &FoodItem, now: DateTime<Utc>) -> PredictionResult {
        let signals = FeatureExtractor::new(&self.config).extract(item, now);
        let breakdown = RiskScorer::new(&self.config.weights).score(&signals);
        let risk_level = RiskLevel::from_score(breakdown.score);
        let explained = Explainer::explain(&signals, &breakdown, risk_level);

        tracing::debug!(
            risk_score = breakdown.score,
            risk_level = risk_level.as_str(),
            "freshness predicted"
        );

        PredictionResult {
            risk_score: breakdown.score,
            risk_level,
            recommendation: explained.recommendation,
            explanation: explained.explanation,
            feature_importance: explained.feature_importance,
            adjustments: signals.adjustments,
        }
    }
}

impl<C> FreshnessService for Service<C>
where
    C: Clock,
{
    fn predict_item(&self, item: &FoodItem) -> PredictionResult {
        self.predictor.predict(item, self.clock.now())
    }

    fn predict_item_at(&self, item: &FoodItem, now: DateTime<Utc>) -> PredictionResult {
        self.predictor.predict(item, now)
    }

    #[instrument(skip_all, fields(items = items.len()))]
    fn assess_items(&self, items: &[FoodItem]) -> Vec<ItemAssessment> {
        let now = self.clock.now();

        let mut assessments: Vec<ItemAssessment> = items
            .iter()
            .filter(|item| item.is_active())
            .map(|item| ItemAssessment {
                item_id: item.id,
                name: item.name.clone(),
                prediction: self.predictor.predict(item, now),
            })
            .collect();

        assessments.sort_by(|a, b| {
            b.prediction
                .risk_score
                .total_cmp(&a.prediction.risk_score)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::info!(
            assessed = assessments.len(),
            skipped = items.len() - assessments.len(),
            "items assessed"
        );

        assessments
    }

    fn shelf_life_table(&self) -> Vec<ShelfLifeEntry> {
        ShelfLifeTable::entries()
    }

    fn risk_levels(&self) -> Vec<RiskBand> {
        RiskLevel::bands()
    }
}
