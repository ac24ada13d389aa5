use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::food_item::entities::{
    FoodCategory, FoodItem, FoodItemConfig, FoodReview, ItemStatus, PackagingType,
    StorageLocation,
};

/// Item fields as supplied by a caller that may not have persisted the item yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodItemInput {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: FoodCategory,
    pub purchase_date: NaiveDate,
    pub storage_location: StorageLocation,
    pub temperature: f64,
    pub packaging: PackagingType,
    pub humidity: f64,
    pub exposure_time: f64,
    pub notes: Option<String>,
    pub status: Option<ItemStatus>,
    pub review: Option<FoodReview>,
}

impl From<FoodItemInput> for FoodItem {
    fn from(input: FoodItemInput) -> Self {
        let mut item = FoodItem::new(FoodItemConfig {
            name: input.name,
            category: input.category,
            purchase_date: input.purchase_date,
            storage_location: input.storage_location,
            temperature: input.temperature,
            packaging: input.packaging,
            humidity: input.humidity,
            exposure_time: input.exposure_time,
            notes: input.notes,
        });

        if let Some(id) = input.id {
            item.id = id;
        }
        if let Some(status) = input.status {
            item.status = status;
        }
        item.review = input.review;

        item
    }
}
