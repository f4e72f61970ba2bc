//! Persistence for companies and gambling diary entries.
//!
//! Stores are async traits so the HTTP and CLI front ends can run against
//! Postgres in production and [`InMemoryStore`] in tests or without a database.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use pentaledger_companies::{Company, NewCompany};
use pentaledger_core::{CompanyId, DomainError, GamblingLogId};
use pentaledger_gambling::{GamblingLog, NewGamblingLog};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("cannot decode row: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Insert a company. A `parent_id` that names no company is `NotFound`.
    async fn create_company(&self, new: NewCompany) -> StoreResult<Company>;

    /// All companies ordered by name.
    async fn list_companies(&self) -> StoreResult<Vec<Company>>;

    async fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>>;
}

#[async_trait]
pub trait GamblingLogStore: Send + Sync {
    async fn create_gambling_log(&self, new: NewGamblingLog) -> StoreResult<GamblingLog>;

    /// All diary entries, newest first (date then time of day).
    async fn list_gambling_logs(&self) -> StoreResult<Vec<GamblingLog>>;

    async fn get_gambling_log(&self, id: GamblingLogId) -> StoreResult<Option<GamblingLog>>;
}

#[async_trait]
impl<S> CompanyStore for Arc<S>
where
    S: CompanyStore + ?Sized,
{
    async fn create_company(&self, new: NewCompany) -> StoreResult<Company> {
        (**self).create_company(new).await
    }

    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        (**self).list_companies().await
    }

    async fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        (**self).get_company(id).await
    }
}

#[async_trait]
impl<S> GamblingLogStore for Arc<S>
where
    S: GamblingLogStore + ?Sized,
{
    async fn create_gambling_log(&self, new: NewGamblingLog) -> StoreResult<GamblingLog> {
        (**self).create_gambling_log(new).await
    }

    async fn list_gambling_logs(&self) -> StoreResult<Vec<GamblingLog>> {
        (**self).list_gambling_logs().await
    }

    async fn get_gambling_log(&self, id: GamblingLogId) -> StoreResult<Option<GamblingLog>> {
        (**self).get_gambling_log(id).await
    }
}

/// Ordering used by every [`GamblingLogStore::list_gambling_logs`] impl.
pub(crate) fn newest_first(a: &GamblingLog, b: &GamblingLog) -> std::cmp::Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.time_of_day.cmp(&a.time_of_day))
}
