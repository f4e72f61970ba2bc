//! Payroll classifications.
//!
//! Only the vocabulary lives here; withholding is not computed.

use serde::{Deserialize, Serialize};

use pentaledger_core::ValueObject;

use crate::{ParseEnumError, normalize_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedFilingSeparately,
    MarriedFilingJointly,
    HeadOfHousehold,
}

impl ValueObject for FilingStatus {}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedFilingSeparately => "married_filing_separately",
            FilingStatus::MarriedFilingJointly => "married_filing_jointly",
            FilingStatus::HeadOfHousehold => "head_of_household",
        }
    }
}

impl core::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for FilingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "single" => Ok(FilingStatus::Single),
            "marriedfilingseparately" | "mfs" => Ok(FilingStatus::MarriedFilingSeparately),
            "marriedfilingjointly" | "mfj" => Ok(FilingStatus::MarriedFilingJointly),
            "headofhousehold" | "hoh" => Ok(FilingStatus::HeadOfHousehold),
            _ => Err(ParseEnumError::new("filing status", s)),
        }
    }
}

/// How an employee is paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayClassification {
    #[default]
    None,
    Hourly,
    Salary,
}

impl ValueObject for PayClassification {}

impl core::str::FromStr for PayClassification {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "none" | "" => Ok(PayClassification::None),
            "hourly" => Ok(PayClassification::Hourly),
            "salary" | "salaried" => Ok(PayClassification::Salary),
            _ => Err(ParseEnumError::new("pay classification", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filing_status_accepts_abbreviations_and_round_trips() {
        assert_eq!("MFJ".parse::<FilingStatus>().unwrap(), FilingStatus::MarriedFilingJointly);
        for status in [
            FilingStatus::Single,
            FilingStatus::MarriedFilingSeparately,
            FilingStatus::MarriedFilingJointly,
            FilingStatus::HeadOfHousehold,
        ] {
            assert_eq!(status.to_string().parse::<FilingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn pay_classification_defaults_to_none() {
        assert_eq!(PayClassification::default(), PayClassification::None);
        assert_eq!("Salaried".parse::<PayClassification>().unwrap(), PayClassification::Salary);
    }
}
