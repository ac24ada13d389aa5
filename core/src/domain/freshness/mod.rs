pub mod classifier;
pub mod entities;
pub mod explainer;
pub mod features;
pub mod ports;
pub mod scorer;
pub mod services;
pub mod shelf_life;
pub mod value_objects;

pub use classifier::{RiskBand, RiskLevel};
pub use entities::*;
pub use ports::*;
pub use services::{FreshnessPredictor, predict};
pub use value_objects::PredictorConfig;
