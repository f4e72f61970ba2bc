use serde::Serialize;

use pentaledger_core::{DomainError, DomainResult, Money};

use crate::log::GamblingLog;

/// Whether the diary as a whole is ahead or behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "amount", rename_all = "snake_case")]
pub enum Outcome {
    Up(Money),
    Down(Money),
    BrokeEven,
}

/// Totals across a set of diary entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GamblingSummary {
    pub total_w2_winnings: Money,
    pub total_winnings: Money,
    pub total_losses: Money,
    pub net: Money,
    pub sessions: usize,
    /// Losses are deductible only up to the amount of winnings.
    pub deductible_losses: Money,
}

impl GamblingSummary {
    /// Fails with `OutOfRange` when a total does not fit in [`Money`].
    pub fn from_logs(logs: &[GamblingLog]) -> DomainResult<Self> {
        let total_w2_winnings = Money::try_sum(logs.iter().map(|l| l.w2_winnings), "total w2 winnings")?;
        let total_winnings = Money::try_sum(logs.iter().map(|l| l.winnings), "total winnings")?;
        let total_losses = Money::try_sum(logs.iter().map(|l| l.losses), "total losses")?;
        let net = total_winnings
            .checked_sub(total_losses)
            .ok_or_else(|| DomainError::out_of_range("net result"))?;

        Ok(Self {
            total_w2_winnings,
            total_winnings,
            total_losses,
            net,
            sessions: logs.len(),
            deductible_losses: total_losses.min(total_winnings),
        })
    }

    pub fn outcome(&self) -> Outcome {
        if self.net.is_zero() {
            Outcome::BrokeEven
        } else if self.net.is_negative() {
            Outcome::Down(self.net.abs())
        } else {
            Outcome::Up(self.net)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{GamblingLogInput, NewGamblingLog};
    use chrono::{NaiveDate, NaiveTime, Utc};
    use pentaledger_core::GamblingLogId;
    use proptest::prelude::*;

    fn log(w2: i64, winnings: i64, losses: i64) -> GamblingLog {
        NewGamblingLog {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            establishment_name: "Casino".into(),
            establishment_address: "1 Main St".into(),
            time_of_day: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            wagering_type: "Slots".into(),
            location_id: "A".into(),
            w2_winnings: Money::from_cents(w2),
            winnings: Money::from_cents(winnings),
            losses: Money::from_cents(losses),
            notes: String::new(),
        }
        .into_log(GamblingLogId::new(), Utc::now())
    }

    #[test]
    fn empty_diary_breaks_even() {
        let s = GamblingSummary::from_logs(&[]).unwrap();
        assert_eq!(s.sessions, 0);
        assert_eq!(s.outcome(), Outcome::BrokeEven);
    }

    #[test]
    fn totals_and_outcome() {
        let s = GamblingSummary::from_logs(&[log(0, 10_000, 2_500), log(5_000, 5_000, 20_000)]).unwrap();
        assert_eq!(s.total_w2_winnings, Money::from_cents(5_000));
        assert_eq!(s.total_winnings, Money::from_cents(15_000));
        assert_eq!(s.total_losses, Money::from_cents(22_500));
        assert_eq!(s.net, Money::from_cents(-7_500));
        assert_eq!(s.sessions, 2);
        assert_eq!(s.deductible_losses, Money::from_cents(15_000));
        assert_eq!(s.outcome(), Outcome::Down(Money::from_cents(7_500)));
    }

    #[test]
    fn totals_too_large_for_money_are_an_error() {
        let entry = GamblingLogInput {
            date: "2024-02-01".into(),
            establishment: "Casino".into(),
            address: "1 Main St".into(),
            time: "20:00".into(),
            wagering_type: "Poker".into(),
            location: "T4".into(),
            w2: "0".into(),
            winnings: "50000000000000000".into(),
            losses: "0".into(),
            notes: None,
        };
        let a = NewGamblingLog::parse(&entry).unwrap().into_log(GamblingLogId::new(), Utc::now());
        let b = NewGamblingLog::parse(&entry).unwrap().into_log(GamblingLogId::new(), Utc::now());

        let one = GamblingSummary::from_logs(std::slice::from_ref(&a)).unwrap();
        assert_eq!(one.outcome(), Outcome::Up(a.winnings));

        let err = GamblingSummary::from_logs(&[a, b]).unwrap_err();
        assert_eq!(err, DomainError::OutOfRange("total winnings".into()));
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(Outcome::Up(Money::from_cents(150))).unwrap();
        assert_eq!(json, serde_json::json!({"result": "up", "amount": "1.50"}));
        let json = serde_json::to_value(Outcome::BrokeEven).unwrap();
        assert_eq!(json, serde_json::json!({"result": "broke_even"}));
    }

    proptest! {
        #[test]
        fn deductible_never_exceeds_winnings_or_losses(
            rows in prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 0..20)
        ) {
            let logs: Vec<GamblingLog> = rows.iter().map(|(w, l)| log(0, *w, *l)).collect();
            let s = GamblingSummary::from_logs(&logs).unwrap();
            prop_assert!(s.deductible_losses <= s.total_winnings);
            prop_assert!(s.deductible_losses <= s.total_losses);
            prop_assert_eq!(s.net, s.total_winnings - s.total_losses);
        }
    }
}
