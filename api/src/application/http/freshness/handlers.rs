pub mod assess_items;
pub mod get_risk_levels;
pub mod get_shelf_life;
pub mod predict_freshness;
