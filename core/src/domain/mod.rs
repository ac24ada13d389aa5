pub mod common;
pub mod food_item;
pub mod freshness;
