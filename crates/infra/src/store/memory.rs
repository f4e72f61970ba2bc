use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use pentaledger_companies::{Company, NewCompany};
use pentaledger_core::{CompanyId, GamblingLogId};
use pentaledger_gambling::{GamblingLog, NewGamblingLog};

use super::{newest_first, CompanyStore, GamblingLogStore, StoreError, StoreResult};

/// In-memory store for tests/dev, and for running without `DATABASE_URL`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    companies: RwLock<HashMap<CompanyId, Company>>,
    gambling_logs: RwLock<HashMap<GamblingLogId, GamblingLog>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for InMemoryStore {
    async fn create_company(&self, new: NewCompany) -> StoreResult<Company> {
        let mut companies = self.companies.write().await;
        if let Some(parent) = new.parent_id() {
            if !companies.contains_key(&parent) {
                return Err(StoreError::NotFound(format!("parent company {parent}")));
            }
        }
        let company = new.into_company(CompanyId::new(), Utc::now());
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        let mut out: Vec<Company> = self.companies.read().await.values().cloned().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        Ok(self.companies.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl GamblingLogStore for InMemoryStore {
    async fn create_gambling_log(&self, new: NewGamblingLog) -> StoreResult<GamblingLog> {
        let log = new.validate()?.into_log(GamblingLogId::new(), Utc::now());
        self.gambling_logs.write().await.insert(log.id, log.clone());
        Ok(log)
    }

    async fn list_gambling_logs(&self) -> StoreResult<Vec<GamblingLog>> {
        let mut out: Vec<GamblingLog> =
            self.gambling_logs.read().await.values().cloned().collect();
        out.sort_by(newest_first);
        Ok(out)
    }

    async fn get_gambling_log(&self, id: GamblingLogId) -> StoreResult<Option<GamblingLog>> {
        Ok(self.gambling_logs.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pentaledger_core::{DomainError, Money};
    use std::sync::Arc;

    fn entry(date: (i32, u32, u32), time: (u32, u32)) -> NewGamblingLog {
        NewGamblingLog {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            establishment_name: "Casino".into(),
            establishment_address: "1 Main St".into(),
            time_of_day: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            wagering_type: "Poker".into(),
            location_id: "T1".into(),
            w2_winnings: Money::ZERO,
            winnings: Money::from_cents(10_000),
            losses: Money::from_cents(2_500),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn companies_list_by_name_and_link_parents() {
        let store = InMemoryStore::new();
        let zeta = store
            .create_company(NewCompany::new("Zeta Holdings", "11-1111111", None).unwrap())
            .await
            .unwrap();
        let acme = store
            .create_company(NewCompany::new("Acme", "22-2222222", Some(zeta.id)).unwrap())
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_companies()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Acme", "Zeta Holdings"]);
        assert_eq!(store.get_company(acme.id).await.unwrap().unwrap().parent_id, Some(zeta.id));
        assert_eq!(acme.created_at, acme.updated_at);
    }

    #[tokio::test]
    async fn unknown_parent_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .create_company(NewCompany::new("Orphan", "1", Some(CompanyId::new())).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(store.list_companies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn gambling_logs_list_newest_first() {
        let store = Arc::new(InMemoryStore::new());
        store.create_gambling_log(entry((2024, 1, 5), (20, 0))).await.unwrap();
        store.create_gambling_log(entry((2024, 2, 1), (9, 0))).await.unwrap();
        let late = store.create_gambling_log(entry((2024, 2, 1), (22, 15))).await.unwrap();

        let logs = store.list_gambling_logs().await.unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].id, late.id);
        assert_eq!(logs[2].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(store.get_gambling_log(late.id).await.unwrap(), Some(late));
    }

    #[tokio::test]
    async fn invalid_gambling_log_is_rejected() {
        let store = InMemoryStore::new();
        let mut bad = entry((2024, 1, 1), (1, 0));
        bad.w2_winnings = Money::from_cents(50_000);
        let err = store.create_gambling_log(bad).await.unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
        assert!(store.get_gambling_log(GamblingLogId::new()).await.unwrap().is_none());
    }
}
