use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid predictor configuration: {0}")]
    InvalidConfiguration(String),
}
