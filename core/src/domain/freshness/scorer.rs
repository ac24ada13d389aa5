use crate::domain::freshness::{
    entities::RiskFeature, features::RiskSignals, value_objects::ScoringWeights,
};

/// Signed share of the weighted sum attributable to one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub feature: RiskFeature,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub weighted_sum: f64,
    pub contributions: [Contribution; 5],
}

pub struct RiskScorer<'a> {
    weights: &'a ScoringWeights,
}

impl<'a> RiskScorer<'a> {
    pub fn new(weights: &'a ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weighted sum of the signals, saturated to [0, 1].
    ///
    /// Packaging scales age and exposure; its contribution is the extra risk
    /// that scaling adds, so the contributions always sum to the weighted sum.
    pub fn score(&self, signals: &RiskSignals) -> ScoreBreakdown {
        let age = self.weights.age * signals.age_ratio;
        let exposure = self.weights.exposure * signals.exposure_penalty;
        let temperature = self.weights.temperature * signals.temperature_deviation;
        let humidity = self.weights.humidity * signals.humidity_factor;
        let packaging = if signals.packaging_factor > 1.0 {
            (signals.packaging_factor - 1.0) * (age + exposure)
        } else {
            0.0
        };

        let contributions = [
            Contribution {
                feature: RiskFeature::AgeRatio,
                value: age,
            },
            Contribution {
                feature: RiskFeature::TemperatureDeviation,
                value: temperature,
            },
            Contribution {
                feature: RiskFeature::ExposurePenalty,
                value: exposure,
            },
            Contribution {
                feature: RiskFeature::HumidityFactor,
                value: humidity,
            },
            Contribution {
                feature: RiskFeature::PackagingFactor,
                value: packaging,
            },
        ];

        let weighted_sum: f64 = contributions.iter().map(|c| c.value).sum();
        let score = weighted_sum.clamp(0.0, 1.0);

        ScoreBreakdown {
            score,
            weighted_sum,
            contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> RiskSignals {
        RiskSignals {
            age_ratio: 0.5,
            temperature_deviation: 0.0,
            exposure_penalty: 0.0,
            humidity_factor: 0.0,
            packaging_factor: 1.0,
            days_since_purchase: 1,
            baseline_days: 2.0,
            temperature_offset: 0.0,
            adjustments: Vec::new(),
        }
    }

    #[test]
    fn test_weighted_sum_of_signals() {
        let weights = ScoringWeights::default();
        let scorer = RiskScorer::new(&weights);
        let mut input = signals();
        input.temperature_deviation = 0.4;
        input.exposure_penalty = 0.5;
        input.humidity_factor = 1.0;

        let breakdown = scorer.score(&input);

        // 0.4 * 0.5 + 0.25 * 0.4 + 0.2 * 0.5 + 0.1 * 1.0
        assert!((breakdown.score - 0.5).abs() < 1e-12);
        assert_eq!(breakdown.contributions[4].value, 0.0);
    }

    #[test]
    fn test_open_packaging_scales_age_and_exposure() {
        let weights = ScoringWeights::default();
        let scorer = RiskScorer::new(&weights);
        let mut input = signals();
        input.exposure_penalty = 1.0;
        input.packaging_factor = 1.25;

        let breakdown = scorer.score(&input);

        // (0.2 + 0.2) * 1.25
        assert!((breakdown.score - 0.5).abs() < 1e-12);
        assert!((breakdown.contributions[4].value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_score_saturates_for_extreme_inputs() {
        let weights = ScoringWeights::default();
        let scorer = RiskScorer::new(&weights);
        let mut input = signals();
        input.exposure_penalty = 500.0;
        input.packaging_factor = 1.25;

        let breakdown = scorer.score(&input);
        assert_eq!(breakdown.score, 1.0);
        assert!(breakdown.weighted_sum > 1.0);
    }

    #[test]
    fn test_cold_credit_never_drives_score_below_zero() {
        let weights = ScoringWeights::default();
        let scorer = RiskScorer::new(&weights);
        let mut input = signals();
        input.age_ratio = 0.0;
        input.temperature_deviation = -0.2;

        let breakdown = scorer.score(&input);
        assert_eq!(breakdown.score, 0.0);
        assert!(breakdown.weighted_sum < 0.0);
    }

    #[test]
    fn test_contributions_sum_to_weighted_sum() {
        let weights = ScoringWeights::default();
        let scorer = RiskScorer::new(&weights);
        let mut input = signals();
        input.temperature_deviation = 0.3;
        input.exposure_penalty = 0.7;
        input.humidity_factor = 0.2;
        input.packaging_factor = 1.25;

        let breakdown = scorer.score(&input);
        let sum: f64 = breakdown.contributions.iter().map(|c| c.value).sum();
        assert!((sum - breakdown.weighted_sum).abs() < 1e-12);
    }
}
