use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::freshness::classifier::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub risk_score: f64, // 0 to 1
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub explanation: String,
    pub feature_importance: Vec<FeatureImportance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<InputAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureImportance {
    pub feature: RiskFeature,
    pub impact: f64, // -1 to 1 (negative reduces risk, positive increases)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskFeature {
    AgeRatio,
    TemperatureDeviation,
    ExposurePenalty,
    HumidityFactor,
    PackagingFactor,
}

/// A correction applied to out-of-range input before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputAdjustment {
    FuturePurchaseDate,
    HumidityClamped,
    NegativeExposureClamped,
    MissingTemperature,
    MissingHumidity,
    MissingExposure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemAssessment {
    pub item_id: Uuid,
    pub name: String,
    pub prediction: PredictionResult,
}
