use serde::{Deserialize, Serialize};

use pentaledger_core::ValueObject;

use crate::{ParseEnumError, normalize_label};

/// Broad federal income categories; each has its own tax treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// Wages, tips, commissions, self-employment and materially participating
    /// business income.
    Active,
    /// Rental income and businesses without material participation. Passive
    /// losses only offset passive income and carry forward.
    Passive,
    /// Interest, dividends, capital gains, royalties and annuities.
    Portfolio,
}

impl ValueObject for IncomeType {}

impl IncomeType {
    /// Social Security and Medicare apply to active income only.
    pub fn subject_to_payroll_tax(&self) -> bool {
        matches!(self, IncomeType::Active)
    }

    pub fn may_be_subject_to_niit(&self) -> bool {
        matches!(self, IncomeType::Passive | IncomeType::Portfolio)
    }
}

impl core::str::FromStr for IncomeType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "active" | "earned" => Ok(IncomeType::Active),
            "passive" => Ok(IncomeType::Passive),
            "portfolio" | "investment" => Ok(IncomeType::Portfolio),
            _ => Err(ParseEnumError::new("income type", s)),
        }
    }
}
