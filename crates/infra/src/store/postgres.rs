//! Postgres-backed stores.
//!
//! Amounts are stored as BIGINT cents. Inserts use `RETURNING` so the values
//! handed back are exactly what Postgres persisted (timestamps included).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::instrument;
use uuid::Uuid;

use pentaledger_companies::{Company, NewCompany};
use pentaledger_core::{CompanyId, DomainError, GamblingLogId, Money};
use pentaledger_gambling::{GamblingLog, NewGamblingLog};

use super::{CompanyStore, GamblingLogStore, StoreError, StoreResult};
use crate::config::DbConfig;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        tax_id VARCHAR(50) NOT NULL,
        parent_id UUID REFERENCES companies(id),
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gambling_log (
        id UUID PRIMARY KEY,
        date DATE NOT NULL,
        establishment_name VARCHAR(255) NOT NULL,
        establishment_address VARCHAR(255) NOT NULL,
        time_of_day TIME NOT NULL,
        wagering_type VARCHAR(50) NOT NULL,
        location_id VARCHAR(50) NOT NULL,
        w2_winnings_cents BIGINT NOT NULL CHECK (w2_winnings_cents >= 0),
        winnings_cents BIGINT NOT NULL CHECK (winnings_cents >= 0),
        losses_cents BIGINT NOT NULL CHECK (losses_cents >= 0),
        notes TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_gambling_log_date ON gambling_log (date DESC, time_of_day DESC)",
];

const COMPANY_COLUMNS: &str = "id, name, tax_id, parent_id, created_at, updated_at";
const GAMBLING_LOG_COLUMNS: &str = "id, date, establishment_name, establishment_address, \
     time_of_day, wagering_type, location_id, w2_winnings_cents, winnings_cents, \
     losses_cents, notes, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Arc::new(pool) }
    }

    pub async fn connect(config: &DbConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        tracing::info!(max_connections = config.max_connections, "connected to postgres");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `companies` and `gambling_log` tables if they are missing.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&*self.pool)
                .await
                .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for PgStore {
    #[instrument(skip(self, new), fields(name = %new.name()), err)]
    async fn create_company(&self, new: NewCompany) -> StoreResult<Company> {
        let company = new.into_company(CompanyId::new(), Utc::now());

        let row: CompanyRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO companies ({COMPANY_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(Uuid::from(company.id))
        .bind(&company.name)
        .bind(&company.tax_id)
        .bind(company.parent_id.map(Uuid::from))
        .bind(company.created_at)
        .bind(company.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_company", e))?;

        Ok(row.into())
    }

    #[instrument(skip(self), err)]
    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        let rows: Vec<CompanyRow> = sqlx::query_as(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY name, id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_companies", e))?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    #[instrument(skip(self), fields(company_id = %id), err)]
    async fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        let row: Option<CompanyRow> = sqlx::query_as(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_company", e))?;

        Ok(row.map(Company::from))
    }
}

#[async_trait]
impl GamblingLogStore for PgStore {
    #[instrument(skip(self, new), err)]
    async fn create_gambling_log(&self, new: NewGamblingLog) -> StoreResult<GamblingLog> {
        let log = new.validate()?.into_log(GamblingLogId::new(), Utc::now());

        let row: GamblingLogRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO gambling_log ({GAMBLING_LOG_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {GAMBLING_LOG_COLUMNS}
            "#
        ))
        .bind(Uuid::from(log.id))
        .bind(log.date)
        .bind(&log.establishment_name)
        .bind(&log.establishment_address)
        .bind(log.time_of_day)
        .bind(&log.wagering_type)
        .bind(&log.location_id)
        .bind(log.w2_winnings.cents())
        .bind(log.winnings.cents())
        .bind(log.losses.cents())
        .bind(&log.notes)
        .bind(log.created_at)
        .bind(log.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_gambling_log", e))?;

        Ok(row.into())
    }

    #[instrument(skip(self), err)]
    async fn list_gambling_logs(&self) -> StoreResult<Vec<GamblingLog>> {
        let rows: Vec<GamblingLogRow> = sqlx::query_as(&format!(
            "SELECT {GAMBLING_LOG_COLUMNS} FROM gambling_log ORDER BY date DESC, time_of_day DESC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_gambling_logs", e))?;

        Ok(rows.into_iter().map(GamblingLog::from).collect())
    }

    #[instrument(skip(self), fields(gambling_log_id = %id), err)]
    async fn get_gambling_log(&self, id: GamblingLogId) -> StoreResult<Option<GamblingLog>> {
        let row: Option<GamblingLogRow> = sqlx::query_as(&format!(
            "SELECT {GAMBLING_LOG_COLUMNS} FROM gambling_log WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_gambling_log", e))?;

        Ok(row.map(GamblingLog::from))
    }
}

struct CompanyRow {
    id: Uuid,
    name: String,
    tax_id: String,
    parent_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, PgRow> for CompanyRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            tax_id: row.try_get("tax_id")?,
            parent_id: row.try_get("parent_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: CompanyId::from_uuid(row.id),
            name: row.name,
            tax_id: row.tax_id,
            parent_id: row.parent_id.map(CompanyId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

struct GamblingLogRow {
    id: Uuid,
    date: NaiveDate,
    establishment_name: String,
    establishment_address: String,
    time_of_day: NaiveTime,
    wagering_type: String,
    location_id: String,
    w2_winnings_cents: i64,
    winnings_cents: i64,
    losses_cents: i64,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, PgRow> for GamblingLogRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            establishment_name: row.try_get("establishment_name")?,
            establishment_address: row.try_get("establishment_address")?,
            time_of_day: row.try_get("time_of_day")?,
            wagering_type: row.try_get("wagering_type")?,
            location_id: row.try_get("location_id")?,
            w2_winnings_cents: row.try_get("w2_winnings_cents")?,
            winnings_cents: row.try_get("winnings_cents")?,
            losses_cents: row.try_get("losses_cents")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl From<GamblingLogRow> for GamblingLog {
    fn from(row: GamblingLogRow) -> Self {
        GamblingLog {
            id: GamblingLogId::from_uuid(row.id),
            date: row.date,
            establishment_name: row.establishment_name,
            establishment_address: row.establishment_address,
            time_of_day: row.time_of_day,
            wagering_type: row.wagering_type,
            location_id: row.location_id,
            w2_winnings: Money::from_cents(row.w2_winnings_cents),
            winnings: Money::from_cents(row.winnings_cents),
            losses: Money::from_cents(row.losses_cents),
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("{operation}: {}", db_err.message());
            let code = db_err.code().map(|c| c.into_owned());
            match store_error_for_sqlstate(code.as_deref(), msg) {
                Some(mapped) => mapped,
                None => StoreError::Database {
                    operation,
                    source: sqlx::Error::Database(db_err),
                },
            }
        }
        sqlx::Error::RowNotFound => StoreError::NotFound(operation.to_string()),
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::Decode(format!("{operation}: column {index}: {source}"))
        }
        other => StoreError::Database {
            operation,
            source: other,
        },
    }
}

/// SQLSTATE codes caused by the data being written rather than by the
/// database itself. `None` leaves the error as `StoreError::Database`.
fn store_error_for_sqlstate(code: Option<&str>, msg: String) -> Option<StoreError> {
    match code? {
        // unique violation
        "23505" => Some(StoreError::Conflict(msg)),
        // foreign key violation: unknown parent company
        "23503" => Some(StoreError::NotFound(msg)),
        // value too long for a VARCHAR column, or a CHECK constraint
        "22001" | "23514" => Some(StoreError::Domain(DomainError::validation(msg))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(code: &str) -> Option<StoreError> {
        store_error_for_sqlstate(Some(code), format!("insert: {code}"))
    }

    #[test]
    fn constraint_violations_map_to_store_errors() {
        assert!(matches!(mapped("23505"), Some(StoreError::Conflict(m)) if m == "insert: 23505"));
        assert!(matches!(mapped("23503"), Some(StoreError::NotFound(_))));
        assert!(matches!(
            mapped("22001"),
            Some(StoreError::Domain(DomainError::Validation(_)))
        ));
        assert!(matches!(
            mapped("23514"),
            Some(StoreError::Domain(DomainError::Validation(_)))
        ));
    }

    #[test]
    fn other_codes_stay_database_errors() {
        assert!(mapped("08006").is_none());
        assert!(mapped("40001").is_none());
        assert!(store_error_for_sqlstate(None, "insert".into()).is_none());
    }

    #[test]
    fn row_not_found_and_pool_errors() {
        assert!(matches!(
            map_sqlx_error("get_company", sqlx::Error::RowNotFound),
            StoreError::NotFound(op) if op == "get_company"
        ));
        assert!(matches!(
            map_sqlx_error("list_companies", sqlx::Error::PoolTimedOut),
            StoreError::Database { operation: "list_companies", .. }
        ));
    }
}
