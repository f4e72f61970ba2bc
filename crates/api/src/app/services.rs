use std::sync::Arc;

use anyhow::Context;

use pentaledger_infra::{CompanyStore, DbConfig, GamblingLogStore, InMemoryStore, PgStore};

/// Stores shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub companies: Arc<dyn CompanyStore>,
    pub gambling: Arc<dyn GamblingLogStore>,
}

impl AppServices {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            companies: store.clone(),
            gambling: store,
        }
    }

    pub fn postgres(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            companies: store.clone(),
            gambling: store,
        }
    }

    /// Postgres when `DATABASE_URL` is set (schema ensured), in-memory otherwise.
    pub async fn from_env() -> anyhow::Result<Self> {
        let Some(config) = DbConfig::from_env_optional() else {
            tracing::warn!("DATABASE_URL not set; using in-memory stores");
            return Ok(Self::in_memory());
        };

        let store = PgStore::connect(&config)
            .await
            .context("connecting to postgres")?;
        store.ensure_schema().await.context("creating schema")?;
        Ok(Self::postgres(store))
    }
}
