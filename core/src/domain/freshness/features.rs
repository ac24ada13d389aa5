use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    food_item::entities::{FoodItem, PackagingType},
    freshness::{
        entities::InputAdjustment, shelf_life::ShelfLifeTable, value_objects::PredictorConfig,
    },
};

/// Normalized signals derived once per prediction and shared by the scorer
/// and the explainer. 1.0 means "at the edge of expected shelf life".
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSignals {
    /// Whole days since purchase over the baseline. Stays 0 on the purchase
    /// day, so same-day risk for sub-day baselines (seafood or meat at room
    /// temperature) comes from `exposure_penalty`.
    pub age_ratio: f64,
    /// Signed: positive when warmer than the ideal band, negative when colder.
    pub temperature_deviation: f64,
    pub exposure_penalty: f64,
    pub humidity_factor: f64,
    pub packaging_factor: f64,
    pub days_since_purchase: i64,
    pub baseline_days: f64,
    /// Recorded temperature minus the storage ideal, in degrees Celsius.
    pub temperature_offset: f64,
    pub adjustments: Vec<InputAdjustment>,
}

pub struct FeatureExtractor<'a> {
    config: &'a PredictorConfig,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(config: &'a PredictorConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, item: &FoodItem, now: DateTime<Utc>) -> RiskSignals {
        let mut adjustments = Vec::new();

        let days_since_purchase = days_since_purchase(item.purchase_date, now);
        let days_since_purchase = if days_since_purchase < 0 {
            adjustments.push(InputAdjustment::FuturePurchaseDate);
            0
        } else {
            days_since_purchase
        };
        let baseline_days = ShelfLifeTable::lookup(item.category, item.storage_location);
        let age_ratio = days_since_purchase as f64 / baseline_days;

        let ideal = self.config.temperature.ideal_for(item.storage_location);
        let (temperature_offset, temperature_deviation) = if item.temperature.is_nan() {
            adjustments.push(InputAdjustment::MissingTemperature);
            (0.0, 0.0)
        } else {
            let offset = item.temperature - ideal;
            (offset, self.temperature_deviation(offset))
        };

        let exposure_hours = if item.exposure_time.is_nan() {
            adjustments.push(InputAdjustment::MissingExposure);
            0.0
        } else if item.exposure_time < 0.0 {
            adjustments.push(InputAdjustment::NegativeExposureClamped);
            0.0
        } else {
            item.exposure_time
        };
        let exposure_penalty =
            exposure_hours / self.config.exposure_tolerance_hours.get(item.category);

        let humidity = if item.humidity.is_nan() {
            adjustments.push(InputAdjustment::MissingHumidity);
            None
        } else {
            let clamped = item.humidity.clamp(0.0, 100.0);
            if clamped != item.humidity {
                adjustments.push(InputAdjustment::HumidityClamped);
            }
            Some(clamped)
        };
        let humidity_factor = humidity
            .map(|h| self.humidity_factor(item, h))
            .unwrap_or(0.0);

        let packaging_factor = match item.packaging {
            PackagingType::Open => self.config.open_packaging_multiplier,
            PackagingType::Sealed => 1.0,
        };

        if !adjustments.is_empty() {
            tracing::warn!(
                item_id = %item.id,
                ?adjustments,
                "out-of-range input corrected before scoring"
            );
        }

        RiskSignals {
            age_ratio,
            temperature_deviation,
            exposure_penalty,
            humidity_factor,
            packaging_factor,
            days_since_purchase,
            baseline_days,
            temperature_offset,
            adjustments,
        }
    }

    fn temperature_deviation(&self, offset: f64) -> f64 {
        let model = &self.config.temperature;
        let excess = offset.abs() - model.tolerance;
        if excess <= 0.0 {
            return 0.0;
        }

        let magnitude = excess / model.degrees_per_step * model.signal_per_step;
        if offset > 0.0 {
            magnitude
        } else {
            -magnitude.min(model.max_cold_credit)
        }
    }

    fn humidity_factor(&self, item: &FoodItem, humidity: f64) -> f64 {
        let model = &self.config.humidity;
        let tolerance = model.tolerance.get(item.category);
        let excess = (humidity - tolerance).max(0.0) / (100.0 - tolerance);

        excess * model.sensitivity_for(item.storage_location)
    }
}

/// Whole calendar days between the purchase date and the UTC date of `now`.
/// Negative when the purchase date lies in the future.
pub fn days_since_purchase(purchase_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - purchase_date).num_days()
}
