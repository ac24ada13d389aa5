//! Property tests for the freshness predictor: boundedness, monotonicity,
//! classification consistency and idempotence over arbitrary items.

use chrono::{DateTime, Duration, TimeZone, Utc};
use freshguard_core::domain::{
    food_item::entities::{
        FoodCategory, FoodItem, FoodItemConfig, PackagingType, StorageLocation,
    },
    freshness::{RiskLevel, predict},
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn arb_category() -> impl Strategy<Value = FoodCategory> {
    proptest::sample::select(FoodCategory::ALL.to_vec())
}

fn arb_storage() -> impl Strategy<Value = StorageLocation> {
    prop_oneof![
        Just(StorageLocation::Refrigerated),
        Just(StorageLocation::Frozen),
        Just(StorageLocation::RoomTemperature),
    ]
}

fn arb_packaging() -> impl Strategy<Value = PackagingType> {
    prop_oneof![Just(PackagingType::Open), Just(PackagingType::Sealed)]
}

prop_compose! {
    fn arb_item()(
        category in arb_category(),
        storage in arb_storage(),
        packaging in arb_packaging(),
        days_ago in -30i64..=2000,
        temperature in -60.0f64..=80.0,
        humidity in -50.0f64..=250.0,
        exposure in -10.0f64..=1000.0,
    ) -> FoodItem {
        FoodItem::new(FoodItemConfig {
            name: "item".to_string(),
            category,
            purchase_date: now().date_naive() - Duration::days(days_ago),
            storage_location: storage,
            temperature,
            packaging,
            humidity,
            exposure_time: exposure,
            notes: None,
        })
    }
}

proptest! {
    #[test]
    fn risk_score_is_bounded(item in arb_item()) {
        let result = predict(&item, now());
        prop_assert!((0.0..=1.0).contains(&result.risk_score));
        for entry in &result.feature_importance {
            prop_assert!((-1.0..=1.0).contains(&entry.impact));
        }
    }

    #[test]
    fn risk_score_never_decreases_with_age(item in arb_item(), extra_days in 0i64..=365) {
        let mut older = item.clone();
        older.purchase_date = item.purchase_date - Duration::days(extra_days);

        let younger_score = predict(&item, now()).risk_score;
        let older_score = predict(&older, now()).risk_score;
        prop_assert!(older_score >= younger_score);
    }

    #[test]
    fn risk_score_never_decreases_with_exposure(item in arb_item(), extra_hours in 0.0f64..=200.0) {
        let mut exposed = item.clone();
        exposed.exposure_time = item.exposure_time.max(0.0) + extra_hours;

        let base_score = predict(&item, now()).risk_score;
        let exposed_score = predict(&exposed, now()).risk_score;
        prop_assert!(exposed_score >= base_score);
    }

    #[test]
    fn risk_level_matches_threshold_table(item in arb_item()) {
        let result = predict(&item, now());
        prop_assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));

        let band = RiskLevel::bands()
            .into_iter()
            .find(|b| b.level == result.risk_level)
            .unwrap();
        prop_assert!(result.risk_score >= band.lower);
        prop_assert!(result.risk_score < band.upper || band.upper_inclusive);
    }

    #[test]
    fn feature_importance_is_sorted_by_absolute_impact(item in arb_item()) {
        let result = predict(&item, now());
        prop_assert_eq!(result.feature_importance.len(), 5);
        for pair in result.feature_importance.windows(2) {
            prop_assert!(pair[0].impact.abs() >= pair[1].impact.abs());
        }
    }

    #[test]
    fn prediction_is_idempotent(item in arb_item()) {
        prop_assert_eq!(predict(&item, now()), predict(&item, now()));
    }
}

proptest! {
    /// Below saturation the impacts add up to the score itself.
    #[test]
    fn impacts_sum_to_unsaturated_score(
        category in arb_category(),
        storage in arb_storage(),
        packaging in arb_packaging(),
        days_ago in 0i64..=3,
        exposure in 0.0f64..=0.5,
    ) {
        let item = FoodItem::new(FoodItemConfig {
            name: "item".to_string(),
            category,
            purchase_date: now().date_naive() - Duration::days(days_ago),
            storage_location: storage,
            temperature: match storage {
                StorageLocation::Refrigerated => 8.0,
                StorageLocation::Frozen => -14.0,
                StorageLocation::RoomTemperature => 25.0,
            },
            packaging,
            humidity: 80.0,
            exposure_time: exposure,
            notes: None,
        });

        let result = predict(&item, now());
        let sum: f64 = result.feature_importance.iter().map(|f| f.impact).sum();
        prop_assume!(sum > 0.0 && sum < 1.0);
        prop_assume!(result.feature_importance.iter().all(|f| f.impact.abs() < 1.0));
        prop_assert!((sum - result.risk_score).abs() < 1e-9);
    }
}
