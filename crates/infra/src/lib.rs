//! Infrastructure layer: configuration and persistence for companies and the
//! gambling diary.

pub mod config;
pub mod store;

pub use config::{ConfigError, DbConfig, ServerConfig};
pub use store::{
    CompanyStore, GamblingLogStore, InMemoryStore, PgStore, StoreError, StoreResult,
};
