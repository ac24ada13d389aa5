use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_item::entities::{FoodCategory, StorageLocation};

/// Expected shelf life in days under ideal conditions for each storage mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShelfLifeProfile {
    pub refrigerated: f64,
    pub frozen: f64,
    pub room_temperature: f64,
}

impl ShelfLifeProfile {
    const fn new(refrigerated: f64, frozen: f64, room_temperature: f64) -> Self {
        Self {
            refrigerated,
            frozen,
            room_temperature,
        }
    }

    pub fn days_for(&self, storage: StorageLocation) -> f64 {
        match storage {
            StorageLocation::Refrigerated => self.refrigerated,
            StorageLocation::Frozen => self.frozen,
            StorageLocation::RoomTemperature => self.room_temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShelfLifeEntry {
    pub category: FoodCategory,
    pub profile: ShelfLifeProfile,
}

/// Read-only reference table keyed by food category.
pub struct ShelfLifeTable;

impl ShelfLifeTable {
    pub fn profile(category: FoodCategory) -> ShelfLifeProfile {
        match category {
            FoodCategory::Dairy => ShelfLifeProfile::new(7.0, 30.0, 0.5),
            FoodCategory::Meat => ShelfLifeProfile::new(3.0, 365.0, 0.1),
            FoodCategory::Seafood => ShelfLifeProfile::new(2.0, 90.0, 0.1),
            FoodCategory::Vegetable => ShelfLifeProfile::new(10.0, 180.0, 4.0),
            FoodCategory::Fruit => ShelfLifeProfile::new(14.0, 240.0, 7.0),
            FoodCategory::Cooked => ShelfLifeProfile::new(4.0, 60.0, 0.2),
            FoodCategory::Bakery => ShelfLifeProfile::new(5.0, 90.0, 3.0),
            FoodCategory::FastFood => ShelfLifeProfile::new(3.0, 30.0, 0.5),
            FoodCategory::Sandwich => ShelfLifeProfile::new(2.0, 14.0, 0.2),
            FoodCategory::Other => ShelfLifeProfile::new(10.0, 180.0, 5.0),
        }
    }

    pub fn lookup(category: FoodCategory, storage: StorageLocation) -> f64 {
        Self::profile(category).days_for(storage)
    }

    pub fn entries() -> Vec<ShelfLifeEntry> {
        FoodCategory::ALL
            .iter()
            .map(|category| ShelfLifeEntry {
                category: *category,
                profile: Self::profile(*category),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_baseline_is_positive() {
        for category in FoodCategory::ALL {
            let profile = ShelfLifeTable::profile(category);
            assert!(profile.refrigerated > 0.0);
            assert!(profile.frozen > 0.0);
            assert!(profile.room_temperature > 0.0);
        }
    }

    #[test]
    fn test_freezing_outlasts_refrigeration_outlasts_room() {
        for category in FoodCategory::ALL {
            let profile = ShelfLifeTable::profile(category);
            assert!(profile.frozen > profile.refrigerated);
            assert!(profile.refrigerated >= profile.room_temperature);
        }
    }

    #[test]
    fn test_lookup_matches_profile() {
        assert_eq!(
            ShelfLifeTable::lookup(FoodCategory::Bakery, StorageLocation::RoomTemperature),
            3.0
        );
        assert_eq!(
            ShelfLifeTable::lookup(FoodCategory::Dairy, StorageLocation::Refrigerated),
            7.0
        );
        assert_eq!(
            ShelfLifeTable::lookup(FoodCategory::Seafood, StorageLocation::RoomTemperature),
            0.1
        );
    }

    #[test]
    fn test_entries_cover_all_categories() {
        let entries = ShelfLifeTable::entries();
        assert_eq!(entries.len(), FoodCategory::ALL.len());
        assert_eq!(entries[0].category, FoodCategory::Dairy);
    }
}
