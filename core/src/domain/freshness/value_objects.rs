use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_item::entities::{FoodCategory, StorageLocation},
};

/// Tunable constants of the freshness model.
///
/// Every field has a default, so a partial JSON document only overrides the
/// values it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PredictorConfig {
    pub weights: ScoringWeights,
    pub temperature: TemperatureModel,
    pub humidity: HumidityModel,
    /// Hours outside storage after which the exposure signal reaches 1.0.
    pub exposure_tolerance_hours: CategoryTolerances,
    /// Multiplier applied to age and exposure when packaging is open.
    pub open_packaging_multiplier: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            temperature: TemperatureModel::default(),
            humidity: HumidityModel::default(),
            exposure_tolerance_hours: CategoryTolerances {
                dairy: 2.0,
                meat: 1.5,
                seafood: 1.0,
                vegetable: 6.0,
                fruit: 8.0,
                cooked: 2.0,
                bakery: 12.0,
                fast_food: 2.0,
                sandwich: 2.0,
                other: 4.0,
            },
            open_packaging_multiplier: 1.25,
        }
    }
}

impl PredictorConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.weights.validate()?;
        self.temperature.validate()?;
        self.humidity.validate()?;

        if FoodCategory::ALL
            .iter()
            .any(|c| !is_positive(self.exposure_tolerance_hours.get(*c)))
        {
            return Err(CoreError::InvalidConfiguration(
                "exposure tolerances must be positive".to_string(),
            ));
        }

        if !(self.open_packaging_multiplier.is_finite() && self.open_packaging_multiplier >= 1.0) {
            return Err(CoreError::InvalidConfiguration(
                "open_packaging_multiplier must be >= 1.0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: PredictorConfig = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ScoringWeights {
    pub age: f64,
    pub temperature: f64,
    pub exposure: f64,
    pub humidity: f64,
    /// Unallocated share; packaging acts multiplicatively on age and exposure.
    pub residual: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 0.40,
            temperature: 0.25,
            exposure: 0.20,
            humidity: 0.10,
            residual: 0.05,
        }
    }
}

impl ScoringWeights {
    fn validate(&self) -> Result<(), CoreError> {
        let all = [
            self.age,
            self.temperature,
            self.exposure,
            self.humidity,
            self.residual,
        ];

        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(CoreError::InvalidConfiguration(
                "weights must be finite and non-negative".to_string(),
            ));
        }

        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(CoreError::InvalidConfiguration(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TemperatureModel {
    pub refrigerated_ideal: f64,
    pub frozen_ideal: f64,
    pub room_temperature_ideal: f64,
    /// Half-width of the band around the ideal that contributes nothing.
    pub tolerance: f64,
    /// Every `degrees_per_step` beyond the band adds `signal_per_step`.
    pub degrees_per_step: f64,
    pub signal_per_step: f64,
    /// Cap on the negative signal for storage colder than the band.
    pub max_cold_credit: f64,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self {
            refrigerated_ideal: 4.0,
            frozen_ideal: -18.0,
            room_temperature_ideal: 20.0,
            tolerance: 2.0,
            degrees_per_step: 5.0,
            signal_per_step: 0.2,
            max_cold_credit: 0.2,
        }
    }
}

impl TemperatureModel {
    pub fn ideal_for(&self, storage: StorageLocation) -> f64 {
        match storage {
            StorageLocation::Refrigerated => self.refrigerated_ideal,
            StorageLocation::Frozen => self.frozen_ideal,
            StorageLocation::RoomTemperature => self.room_temperature_ideal,
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        let ideals = [
            self.refrigerated_ideal,
            self.frozen_ideal,
            self.room_temperature_ideal,
        ];
        if ideals.iter().any(|t| !t.is_finite()) {
            return Err(CoreError::InvalidConfiguration(
                "temperature ideals must be finite".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(CoreError::InvalidConfiguration(
                "temperature tolerance must be >= 0".to_string(),
            ));
        }
        if !is_positive(self.degrees_per_step) || !is_positive(self.signal_per_step) {
            return Err(CoreError::InvalidConfiguration(
                "temperature step and signal must be positive".to_string(),
            ));
        }
        if !(self.max_cold_credit.is_finite() && self.max_cold_credit >= 0.0) {
            return Err(CoreError::InvalidConfiguration(
                "max_cold_credit must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HumidityModel {
    /// Humidity percentage above which the signal starts to grow.
    pub tolerance: CategoryTolerances,
    pub refrigerated_sensitivity: f64,
    pub frozen_sensitivity: f64,
    pub room_temperature_sensitivity: f64,
}

impl Default for HumidityModel {
    fn default() -> Self {
        Self {
            tolerance: CategoryTolerances {
                dairy: 70.0,
                meat: 70.0,
                seafood: 75.0,
                vegetable: 60.0,
                fruit: 60.0,
                cooked: 65.0,
                bakery: 50.0,
                fast_food: 60.0,
                sandwich: 55.0,
                other: 65.0,
            },
            refrigerated_sensitivity: 0.5,
            frozen_sensitivity: 0.05,
            room_temperature_sensitivity: 1.0,
        }
    }
}

impl HumidityModel {
    pub fn sensitivity_for(&self, storage: StorageLocation) -> f64 {
        match storage {
            StorageLocation::Refrigerated => self.refrigerated_sensitivity,
            StorageLocation::Frozen => self.frozen_sensitivity,
            StorageLocation::RoomTemperature => self.room_temperature_sensitivity,
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        let out_of_range = FoodCategory::ALL.iter().any(|c| {
            let tolerance = self.tolerance.get(*c);
            !(tolerance.is_finite() && (0.0..100.0).contains(&tolerance))
        });
        if out_of_range {
            return Err(CoreError::InvalidConfiguration(
                "humidity tolerances must be within [0, 100)".to_string(),
            ));
        }

        let sensitivities = [
            self.refrigerated_sensitivity,
            self.frozen_sensitivity,
            self.room_temperature_sensitivity,
        ];
        if sensitivities.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(CoreError::InvalidConfiguration(
                "humidity sensitivities must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// One number per food category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTolerances {
    pub dairy: f64,
    pub meat: f64,
    pub seafood: f64,
    pub vegetable: f64,
    pub fruit: f64,
    pub cooked: f64,
    pub bakery: f64,
    pub fast_food: f64,
    pub sandwich: f64,
    pub other: f64,
}

impl CategoryTolerances {
    pub fn get(&self, category: FoodCategory) -> f64 {
        match category {
            FoodCategory::Dairy => self.dairy,
            FoodCategory::Meat => self.meat,
            FoodCategory::Seafood => self.seafood,
            FoodCategory::Vegetable => self.vegetable,
            FoodCategory::Fruit => self.fruit,
            FoodCategory::Cooked => self.cooked,
            FoodCategory::Bakery => self.bakery,
            FoodCategory::FastFood => self.fast_food,
            FoodCategory::Sandwich => self.sandwich,
            FoodCategory::Other => self.other,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PredictorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = PredictorConfig::default();
        config.weights.age = 0.9;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = PredictorConfig::from_json(
            r#"{ "open_packaging_multiplier": 1.5, "temperature": { "tolerance": 3.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.open_packaging_multiplier, 1.5);
        assert_eq!(config.temperature.tolerance, 3.0);
        assert_eq!(config.temperature.refrigerated_ideal, 4.0);
        assert_eq!(config.weights, ScoringWeights::default());
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let result = PredictorConfig::from_json(r#"{ "open_packaging_multiplier": 0.5 }"#);
        assert!(result.is_err());

        let result = PredictorConfig::from_json("not json");
        assert!(matches!(result, Err(CoreError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_ideal_temperature_per_storage() {
        let model = TemperatureModel::default();
        assert_eq!(model.ideal_for(StorageLocation::Refrigerated), 4.0);
        assert_eq!(model.ideal_for(StorageLocation::Frozen), -18.0);
        assert_eq!(model.ideal_for(StorageLocation::RoomTemperature), 20.0);
    }
}
