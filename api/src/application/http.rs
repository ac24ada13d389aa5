pub mod freshness;
pub mod health;
pub mod server;
