//! Application state behind the desktop commands.

use std::sync::Arc;

use serde::Serialize;

use pentaledger_companies::Company;
use pentaledger_core::DomainError;
use pentaledger_gambling::{GamblingLog, GamblingSummary, Outcome};
use pentaledger_infra::{CompanyStore, GamblingLogStore, InMemoryStore, PgStore, StoreError};

use crate::shell::{MainFrame, MenuAction, ShellEffect, UnknownMenuAction};

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    UnknownAction(#[from] UnknownMenuAction),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Diary totals together with the overall result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryOverview {
    pub summary: GamblingSummary,
    pub outcome: Outcome,
}

#[derive(Clone)]
pub struct AppState {
    frame: MainFrame,
    companies: Arc<dyn CompanyStore>,
    gambling: Arc<dyn GamblingLogStore>,
}

impl AppState {
    pub fn postgres(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            frame: MainFrame::new(),
            companies: store.clone(),
            gambling: store,
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            frame: MainFrame::new(),
            companies: store.clone(),
            gambling: store,
        }
    }

    pub fn frame(&self) -> &MainFrame {
        &self.frame
    }

    pub fn menu_action(&self, action: &str) -> Result<ShellEffect, DesktopError> {
        let action: MenuAction = action.parse()?;
        Ok(self.frame.handle(action))
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, DesktopError> {
        Ok(self.companies.list_companies().await?)
    }

    pub async fn list_gambling_logs(&self) -> Result<Vec<GamblingLog>, DesktopError> {
        Ok(self.gambling.list_gambling_logs().await?)
    }

    pub async fn gambling_summary(&self) -> Result<DiaryOverview, DesktopError> {
        let logs = self.gambling.list_gambling_logs().await?;
        let summary = GamblingSummary::from_logs(&logs)?;
        Ok(DiaryOverview {
            outcome: summary.outcome(),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pentaledger_companies::NewCompany;
    use pentaledger_core::Money;
    use pentaledger_gambling::NewGamblingLog;

    fn session(day: u32, winnings: i64, losses: i64) -> NewGamblingLog {
        NewGamblingLog {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            establishment_name: "Canterbury Park".into(),
            establishment_address: "1100 Canterbury Rd".into(),
            time_of_day: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            wagering_type: "Horse racing".into(),
            location_id: "CP".into(),
            w2_winnings: Money::ZERO,
            winnings: Money::from_cents(winnings),
            losses: Money::from_cents(losses),
            notes: String::new(),
        }
    }

    #[test]
    fn menu_actions_go_through_the_frame() {
        let state = AppState::in_memory();
        assert_eq!(state.menu_action("exit").unwrap(), ShellEffect::Close);
        assert!(matches!(
            state.menu_action("print"),
            Err(DesktopError::UnknownAction(_))
        ));
    }

    #[tokio::test]
    async fn lists_what_the_stores_hold() {
        let state = AppState::in_memory();
        assert!(state.list_companies().await.unwrap().is_empty());

        state
            .companies
            .create_company(NewCompany::new("Acme", "12-3456789", None).unwrap())
            .await
            .unwrap();
        let companies = state.list_companies().await.unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme");

        state.gambling.create_gambling_log(session(1, 0, 500)).await.unwrap();
        state.gambling.create_gambling_log(session(2, 2_000, 0)).await.unwrap();
        let logs = state.list_gambling_logs().await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].date.to_string(), "2024-05-02");
    }

    #[tokio::test]
    async fn summary_reports_outcome() {
        let state = AppState::in_memory();
        let empty = state.gambling_summary().await.unwrap();
        assert_eq!(empty.outcome, Outcome::BrokeEven);

        state.gambling.create_gambling_log(session(3, 1_000, 4_000)).await.unwrap();
        let overview = state.gambling_summary().await.unwrap();
        assert_eq!(overview.summary.sessions, 1);
        assert_eq!(overview.outcome, Outcome::Down(Money::from_cents(3_000)));
    }
}
