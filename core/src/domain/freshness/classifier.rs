use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Likely Spoiled")]
    Spoiled,
}

/// Lower bounds (inclusive) of each level. Used for classification and for
/// any colour-coding done by callers.
const RISK_THRESHOLDS: [(f64, RiskLevel); 4] = [
    (0.0, RiskLevel::Fresh),
    (0.25, RiskLevel::Moderate),
    (0.55, RiskLevel::High),
    (0.80, RiskLevel::Spoiled),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Fresh => "Fresh",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Spoiled => "Likely Spoiled",
        }
    }

    /// Scores below zero (or NaN) classify as `Fresh`.
    pub fn from_score(score: f64) -> Self {
        RISK_THRESHOLDS
            .iter()
            .rev()
            .find(|(lower, _)| score >= *lower)
            .map(|(_, level)| *level)
            .unwrap_or(RiskLevel::Fresh)
    }

    pub fn bands() -> Vec<RiskBand> {
        RISK_THRESHOLDS
            .iter()
            .enumerate()
            .map(|(index, (lower, level))| {
                let upper = RISK_THRESHOLDS
                    .get(index + 1)
                    .map(|(next, _)| *next)
                    .unwrap_or(1.0);
                RiskBand {
                    level: *level,
                    lower: *lower,
                    upper,
                    upper_inclusive: index + 1 == RISK_THRESHOLDS.len(),
                }
            })
            .collect()
    }
}
