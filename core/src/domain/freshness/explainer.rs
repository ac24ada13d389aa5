use crate::domain::freshness::{
    classifier::RiskLevel,
    entities::{FeatureImportance, RiskFeature},
    features::RiskSignals,
    scorer::ScoreBreakdown,
};

const TIE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub feature_importance: Vec<FeatureImportance>,
    pub recommendation: String,
    pub explanation: String,
}

pub struct Explainer;

impl Explainer {
    pub fn explain(
        signals: &RiskSignals,
        breakdown: &ScoreBreakdown,
        level: RiskLevel,
    ) -> Explanation {
        let feature_importance = rank_contributions(breakdown);
        let dominant = dominant_feature(&feature_importance);

        Explanation {
            recommendation: recommendation(level, dominant).to_string(),
            explanation: explanation(level, dominant, signals),
            feature_importance,
        }
    }
}

/// Contributions ordered by descending absolute impact. The sort is stable,
/// so equal impacts keep the fixed feature order.
pub fn rank_contributions(breakdown: &ScoreBreakdown) -> Vec<FeatureImportance> {
    let mut ranked: Vec<FeatureImportance> = breakdown
        .contributions
        .iter()
        .map(|c| FeatureImportance {
            feature: c.feature,
            impact: c.value.clamp(-1.0, 1.0),
        })
        .collect();

    ranked.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    ranked
}

/// The single highest-impact feature, or `None` when nothing contributes or
/// the top two are tied.
pub fn dominant_feature(ranked: &[FeatureImportance]) -> Option<RiskFeature> {
    let first = ranked.first()?;
    if first.impact.abs() <= TIE_EPSILON {
        return None;
    }

    match ranked.get(1) {
        Some(second) if (first.impact.abs() - second.impact.abs()).abs() <= TIE_EPSILON => None,
        _ => Some(first.feature),
    }
}

fn recommendation(level: RiskLevel, dominant: Option<RiskFeature>) -> &'static str {
    use RiskFeature::*;
    use RiskLevel::*;

    match (level, dominant) {
        (Fresh, Some(AgeRatio)) => "Still well within its expected shelf life; keep storing as is.",
        (Fresh, Some(TemperatureDeviation)) => {
            "Safe for now; keep the storage temperature steady near the ideal."
        }
        (Fresh, Some(ExposurePenalty)) => {
            "Safe for now; limit further time outside storage."
        }
        (Fresh, Some(HumidityFactor)) => "Safe for now; store somewhere drier if possible.",
        (Fresh, Some(PackagingFactor)) => "Safe for now; reseal the packaging to keep it fresh.",
        (Fresh, None) => "Safe to store; keep current storage conditions.",

        (Moderate, Some(AgeRatio)) => "Plan to consume within the next day or two.",
        (Moderate, Some(TemperatureDeviation)) => {
            "Adjust the storage temperature and consume soon."
        }
        (Moderate, Some(ExposurePenalty)) => {
            "Return it to proper storage right away and consume soon."
        }
        (Moderate, Some(HumidityFactor)) => {
            "Move to a drier spot and check for moisture or mould before eating."
        }
        (Moderate, Some(PackagingFactor)) => {
            "Seal or wrap it airtight and consume soon."
        }
        (Moderate, None) => "Consume soon and check its condition before eating.",

        (High, Some(AgeRatio)) => {
            "At or past its expected shelf life; inspect carefully and consume today or discard."
        }
        (High, Some(TemperatureDeviation)) => {
            "Storage temperature is unsafe; inspect carefully and consume today or discard."
        }
        (High, Some(ExposurePenalty)) => {
            "Exposure time exceeds safe limits for this category; consume or discard soon."
        }
        (High, Some(HumidityFactor)) => {
            "High humidity has likely affected it; inspect for spoilage before eating."
        }
        (High, Some(PackagingFactor)) => {
            "Open packaging has sped up spoilage; inspect carefully before eating."
        }
        (High, None) => "Inspect carefully; consume today or discard.",

        (Spoiled, Some(ExposurePenalty)) => {
            "Exposure time exceeds safe limits for this category; discard it."
        }
        (Spoiled, Some(TemperatureDeviation)) => {
            "Kept too warm for too long; discard it."
        }
        (Spoiled, Some(AgeRatio)) => "Past its expected shelf life; discard it.",
        (Spoiled, Some(HumidityFactor)) => {
            "Damp storage has likely caused mould or spoilage; discard it."
        }
        (Spoiled, Some(PackagingFactor)) => {
            "Left unsealed for too long; discard it."
        }
        (Spoiled, None) => "Likely spoiled; discard it rather than risk eating it.",
    }
}

fn explanation(level: RiskLevel, dominant: Option<RiskFeature>, signals: &RiskSignals) -> String {
    let Some(feature) = dominant else {
        return match level {
            RiskLevel::Fresh => {
                "Storage conditions are within expected limits for this category.".to_string()
            }
            _ => "Several factors contribute about equally to the current risk level.".to_string(),
        };
    };

    match feature {
        RiskFeature::AgeRatio => format!(
            "Purchased {} ago, {}% of the expected {}-day shelf life for this storage method.",
            plural_days(signals.days_since_purchase),
            percent(signals.age_ratio),
            format_days(signals.baseline_days)
        ),
        RiskFeature::TemperatureDeviation if signals.temperature_deviation < 0.0 => format!(
            "Stored {:.1} °C colder than ideal, which slows spoilage.",
            signals.temperature_offset.abs()
        ),
        RiskFeature::TemperatureDeviation => format!(
            "Stored {:.1} °C warmer than ideal for this storage method.",
            signals.temperature_offset
        ),
        RiskFeature::ExposurePenalty if signals.exposure_penalty >= 1.0 => {
            "Time spent outside storage exceeds the safe limit for this category.".to_string()
        }
        RiskFeature::ExposurePenalty => format!(
            "Time spent outside storage is {}% of the safe limit for this category.",
            percent(signals.exposure_penalty)
        ),
        RiskFeature::HumidityFactor => {
            "Humidity is above what this category tolerates and accelerates spoilage.".to_string()
        }
        RiskFeature::PackagingFactor => {
            "Open packaging speeds up ageing and exposure damage.".to_string()
        }
    }
}

fn percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.0}")
    } else {
        format!("{days:.1}")
    }
}
