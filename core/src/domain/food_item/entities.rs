use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub purchase_date: NaiveDate,
    pub storage_location: StorageLocation,
    pub temperature: f64, // Celsius
    pub packaging: PackagingType,
    pub humidity: f64,      // Percentage
    pub exposure_time: f64, // Hours outside storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<FoodReview>,
    #[serde(default)]
    pub is_health_focus: bool,
}

#[derive(Debug, Clone)]
pub struct FoodItemConfig {
    pub name: String,
    pub category: FoodCategory,
    pub purchase_date: NaiveDate,
    pub storage_location: StorageLocation,
    pub temperature: f64,
    pub packaging: PackagingType,
    pub humidity: f64,
    pub exposure_time: f64,
    pub notes: Option<String>,
}

impl FoodItem {
    pub fn new(config: FoodItemConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: config.name,
            category: config.category,
            purchase_date: config.purchase_date,
            storage_location: config.storage_location,
            temperature: config.temperature,
            packaging: config.packaging,
            humidity: config.humidity,
            exposure_time: config.exposure_time,
            notes: config.notes,
            status: ItemStatus::Active,
            image: None,
            review: None,
            is_health_focus: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum FoodCategory {
    #[serde(rename = "Dairy")]
    Dairy,
    #[serde(rename = "Meat & Poultry")]
    Meat,
    #[serde(rename = "Seafood")]
    Seafood,
    #[serde(rename = "Vegetables")]
    Vegetable,
    #[serde(rename = "Fruits")]
    Fruit,
    #[serde(rename = "Cooked Meals")]
    Cooked,
    #[serde(rename = "Bakery")]
    Bakery,
    #[serde(rename = "Fast Food")]
    FastFood,
    #[serde(rename = "Sandwiches")]
    Sandwich,
    #[serde(rename = "Other")]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::Dairy,
        FoodCategory::Meat,
        FoodCategory::Seafood,
        FoodCategory::Vegetable,
        FoodCategory::Fruit,
        FoodCategory::Cooked,
        FoodCategory::Bakery,
        FoodCategory::FastFood,
        FoodCategory::Sandwich,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Meat => "Meat & Poultry",
            FoodCategory::Seafood => "Seafood",
            FoodCategory::Vegetable => "Vegetables",
            FoodCategory::Fruit => "Fruits",
            FoodCategory::Cooked => "Cooked Meals",
            FoodCategory::Bakery => "Bakery",
            FoodCategory::FastFood => "Fast Food",
            FoodCategory::Sandwich => "Sandwiches",
            FoodCategory::Other => "Other",
        }
    }
}

/// Unrecognized labels fall back to `Other`.
impl From<&str> for FoodCategory {
    fn from(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "dairy" => FoodCategory::Dairy,
            "meat & poultry" | "meat" | "poultry" => FoodCategory::Meat,
            "seafood" | "fish" => FoodCategory::Seafood,
            "vegetables" | "vegetable" => FoodCategory::Vegetable,
            "fruits" | "fruit" => FoodCategory::Fruit,
            "cooked meals" | "cooked meal" | "cooked" => FoodCategory::Cooked,
            "bakery" => FoodCategory::Bakery,
            "fast food" | "fast_food" => FoodCategory::FastFood,
            "sandwiches" | "sandwich" => FoodCategory::Sandwich,
            "other" => FoodCategory::Other,
            unknown => {
                tracing::warn!(label = %unknown, "unknown food category, using Other");
                FoodCategory::Other
            }
        }
    }
}

impl<'de> Deserialize<'de> for FoodCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(FoodCategory::from(label.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum StorageLocation {
    #[serde(rename = "Fridge")]
    Refrigerated,
    #[serde(rename = "Freezer")]
    Frozen,
    #[serde(rename = "Room Temperature")]
    RoomTemperature,
}

impl StorageLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageLocation::Refrigerated => "Fridge",
            StorageLocation::Frozen => "Freezer",
            StorageLocation::RoomTemperature => "Room Temperature",
        }
    }
}

/// Unrecognized labels fall back to room temperature, the shortest shelf-life mode.
impl From<&str> for StorageLocation {
    fn from(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "fridge" | "refrigerated" | "refrigerator" => StorageLocation::Refrigerated,
            "freezer" | "frozen" => StorageLocation::Frozen,
            "room temperature" | "room_temperature" | "room" => StorageLocation::RoomTemperature,
            unknown => {
                tracing::warn!(label = %unknown, "unknown storage location, using room temperature");
                StorageLocation::RoomTemperature
            }
        }
    }
}

impl<'de> Deserialize<'de> for StorageLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(StorageLocation::from(label.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum PackagingType {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "Sealed / Vacuum Packed")]
    Sealed,
}

impl PackagingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::Open => "Open",
            PackagingType::Sealed => "Sealed / Vacuum Packed",
        }
    }
}

/// Unrecognized labels fall back to `Open`.
impl From<&str> for PackagingType {
    fn from(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "open" | "opened" => PackagingType::Open,
            "sealed / vacuum packed" | "sealed" | "vacuum packed" | "vacuum_packed" => {
                PackagingType::Sealed
            }
            unknown => {
                tracing::warn!(label = %unknown, "unknown packaging type, using Open");
                PackagingType::Open
            }
        }
    }
}

impl<'de> Deserialize<'de> for PackagingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(PackagingType::from(label.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Consumed,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodReview {
    pub rating: u8, // 1-5
    pub comment: String,
    pub actual_freshness: ActualFreshness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActualFreshness {
    AsPredicted,
    Better,
    Worse,
}

fn normalize_label(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_from() {
        for category in FoodCategory::ALL {
            assert_eq!(FoodCategory::from(category.as_str()), category);
        }
    }

    #[test]
    fn test_unknown_enum_labels_use_conservative_defaults() {
        assert_eq!(FoodCategory::from("Insects"), FoodCategory::Other);
        assert_eq!(StorageLocation::from("Pantry"), StorageLocation::RoomTemperature);
        assert_eq!(PackagingType::from("Foil"), PackagingType::Open);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(FoodCategory::from("  SEAFOOD "), FoodCategory::Seafood);
        assert_eq!(StorageLocation::from("freezer"), StorageLocation::Frozen);
        assert_eq!(PackagingType::from("vacuum packed"), PackagingType::Sealed);
    }

    #[test]
    fn test_deserialize_item_with_display_labels() {
        let json = r#"{
            "id": "0191e0a0-0000-7000-8000-000000000000",
            "name": "Salmon fillet",
            "category": "Seafood",
            "purchase_date": "2024-05-01",
            "storage_location": "Fridge",
            "temperature": 4.0,
            "packaging": "Sealed / Vacuum Packed",
            "humidity": 60.0,
            "exposure_time": 0.5
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, FoodCategory::Seafood);
        assert_eq!(item.storage_location, StorageLocation::Refrigerated);
        assert_eq!(item.packaging, PackagingType::Sealed);
        assert_eq!(item.status, ItemStatus::Active);
        assert!(item.review.is_none());
        assert!(!item.is_health_focus);
    }

    #[test]
    fn test_deserialize_unknown_category_does_not_fail() {
        let json = r#"{
            "id": "0191e0a0-0000-7000-8000-000000000000",
            "name": "Mystery jar",
            "category": "Condiments",
            "purchase_date": "2024-05-01",
            "storage_location": "Cellar",
            "temperature": 12.0,
            "packaging": "Jar",
            "humidity": 40.0,
            "exposure_time": 0.0,
            "status": "consumed"
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, FoodCategory::Other);
        assert_eq!(item.storage_location, StorageLocation::RoomTemperature);
        assert_eq!(item.packaging, PackagingType::Open);
        assert!(!item.is_active());
    }

    #[test]
    fn test_serialize_uses_display_labels() {
        let value = serde_json::to_value(FoodCategory::Meat).unwrap();
        assert_eq!(value, serde_json::json!("Meat & Poultry"));
        let value = serde_json::to_value(StorageLocation::RoomTemperature).unwrap();
        assert_eq!(value, serde_json::json!("Room Temperature"));
    }
}
