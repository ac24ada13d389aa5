use chrono::{DateTime, Utc};

/// Source of "now" for callers that do not supply their own timestamp.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
