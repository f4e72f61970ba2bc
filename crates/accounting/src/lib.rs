//! Accounting vocabulary: chart of accounts, entity types, tax and payroll
//! classifications.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod chart_of_accounts;
pub mod entity_types;
pub mod marketplace;
pub mod payroll;
pub mod tax;

pub use chart_of_accounts::{AccountKind, AccountUpdate, ChartAccount, ChartOfAccounts, NewChartAccount};
pub use entity_types::EntityType;
pub use marketplace::MarketplaceProvider;
pub use payroll::{FilingStatus, PayClassification};
pub use tax::{
    ContributionLimits, IncomeType, NiitParams, RetirementAccountType, calculate_niit,
    contribution_limits, has_published_limits,
};

/// Error returned when an enum is parsed from an unrecognized string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Normalize a user-typed enum label: lowercase, with `-`, `_` and spaces removed.
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
