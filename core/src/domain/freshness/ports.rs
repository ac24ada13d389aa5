use chrono::{DateTime, Utc};

use crate::domain::{
    food_item::entities::FoodItem,
    freshness::{
        classifier::RiskBand,
        entities::{ItemAssessment, PredictionResult},
        shelf_life::ShelfLifeEntry,
    },
};

/// Service trait for freshness predictions
pub trait FreshnessService: Send + Sync {
    /// Predict the spoilage risk of an item as of the service clock
    fn predict_item(&self, item: &FoodItem) -> PredictionResult;

    /// Predict the spoilage risk of an item as of `now`
    fn predict_item_at(&self, item: &FoodItem, now: DateTime<Utc>) -> PredictionResult;

    /// Predict every active item, riskiest first
    fn assess_items(&self, items: &[FoodItem]) -> Vec<ItemAssessment>;

    fn shelf_life_table(&self) -> Vec<ShelfLifeEntry>;

    fn risk_levels(&self) -> Vec<RiskBand>;
}
