use chrono::{DateTime, NaiveDate, Utc};
use freshguard_core::domain::food_item::{
    entities::{FoodCategory, FoodItem, FoodReview, ItemStatus, PackagingType, StorageLocation},
    value_objects::FoodItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A food item as posted by a client. Numeric readings may be omitted, in
/// which case the engine treats them as absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FoodItemPayload {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 200, message = "name must be 1 to 200 characters"))]
    pub name: String,

    pub category: FoodCategory,

    pub purchase_date: NaiveDate,

    pub storage_location: StorageLocation,

    /// Celsius
    #[serde(default)]
    pub temperature: Option<f64>,

    pub packaging: PackagingType,

    /// Relative humidity, percent
    #[serde(default)]
    pub humidity: Option<f64>,

    /// Hours spent outside storage
    #[serde(default)]
    pub exposure_time: Option<f64>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    #[serde(default)]
    pub status: Option<ItemStatus>,

    #[serde(default)]
    #[validate(custom(function = "validate_review"))]
    pub review: Option<FoodReview>,
}

fn validate_review(review: &FoodReview) -> Result<(), validator::ValidationError> {
    if (1..=5).contains(&review.rating) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("rating");
        error.message = Some("review rating must be between 1 and 5".into());
        Err(error)
    }
}

impl From<FoodItemPayload> for FoodItemInput {
    fn from(payload: FoodItemPayload) -> Self {
        FoodItemInput {
            id: payload.id,
            name: payload.name,
            category: payload.category,
            purchase_date: payload.purchase_date,
            storage_location: payload.storage_location,
            temperature: payload.temperature.unwrap_or(f64::NAN),
            packaging: payload.packaging,
            humidity: payload.humidity.unwrap_or(f64::NAN),
            exposure_time: payload.exposure_time.unwrap_or(f64::NAN),
            notes: payload.notes,
            status: payload.status,
            review: payload.review,
        }
    }
}

impl From<FoodItemPayload> for FoodItem {
    fn from(payload: FoodItemPayload) -> Self {
        FoodItemInput::from(payload).into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PredictFreshnessValidator {
    #[validate(nested)]
    pub item: FoodItemPayload,

    /// Evaluate as of this instant instead of the server clock
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssessItemsValidator {
    #[validate(
        length(min = 1, max = 500, message = "between 1 and 500 items are required"),
        nested
    )]
    pub items: Vec<FoodItemPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Milk",
            "category": "Dairy",
            "purchase_date": "2024-06-13",
            "storage_location": "Fridge",
            "temperature": 4.0,
            "packaging": "Sealed / Vacuum Packed",
            "humidity": 50.0,
            "exposure_time": 0.0
        })
    }

    #[test]
    fn test_valid_payload() {
        let item: FoodItemPayload = serde_json::from_value(payload()).unwrap();
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut value = payload();
        value["name"] = json!("");
        let item: FoodItemPayload = serde_json::from_value(value).unwrap();

        assert!(item.validate().is_err());
    }

    #[test]
    fn test_review_rating_out_of_range_is_rejected() {
        let mut value = payload();
        value["review"] = json!({
            "rating": 9,
            "comment": "great",
            "actual_freshness": "as_predicted"
        });
        let item: FoodItemPayload = serde_json::from_value(value).unwrap();

        assert!(item.validate().is_err());
    }

    #[test]
    fn test_omitted_readings_become_absent() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("humidity");
        let item: FoodItemPayload = serde_json::from_value(value).unwrap();
        let item = FoodItem::from(item);

        assert!(item.humidity.is_nan());
        assert_eq!(item.temperature, 4.0);
    }

    #[test]
    fn test_empty_assessment_is_rejected() {
        let request = AssessItemsValidator { items: Vec::new() };
        assert!(request.validate().is_err());
    }
}
