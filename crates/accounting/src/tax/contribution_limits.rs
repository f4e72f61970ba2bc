//! IRS retirement contribution limits by year.

use serde::{Deserialize, Serialize};

use crate::{ParseEnumError, normalize_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementAccountType {
    /// Elective deferrals aggregated across 401(k), 403(b), SIMPLE and SARSEP plans.
    OverallDeferral,
    Ira,
    RothIra,
    SimpleIra,
    SepIra,
    #[serde(rename = "401k")]
    K401,
    Other,
}

impl RetirementAccountType {
    pub const ALL: [RetirementAccountType; 7] = [
        RetirementAccountType::OverallDeferral,
        RetirementAccountType::Ira,
        RetirementAccountType::RothIra,
        RetirementAccountType::SimpleIra,
        RetirementAccountType::SepIra,
        RetirementAccountType::K401,
        RetirementAccountType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RetirementAccountType::OverallDeferral => "overall_deferral",
            RetirementAccountType::Ira => "ira",
            RetirementAccountType::RothIra => "roth_ira",
            RetirementAccountType::SimpleIra => "simple_ira",
            RetirementAccountType::SepIra => "sep_ira",
            RetirementAccountType::K401 => "401k",
            RetirementAccountType::Other => "other",
        }
    }
}

impl core::fmt::Display for RetirementAccountType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for RetirementAccountType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "overalldeferral" | "overall" => Ok(RetirementAccountType::OverallDeferral),
            "ira" => Ok(RetirementAccountType::Ira),
            "rothira" | "roth" => Ok(RetirementAccountType::RothIra),
            "simpleira" | "simple" => Ok(RetirementAccountType::SimpleIra),
            "sepira" | "sep" => Ok(RetirementAccountType::SepIra),
            "401k" | "k401" => Ok(RetirementAccountType::K401),
            "other" => Ok(RetirementAccountType::Other),
            _ => Err(ParseEnumError::new("retirement account type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionLimits {
    pub year: i32,
    pub account_type: RetirementAccountType,
    pub limit: f64,
    /// Limit for individuals aged 50 or older.
    pub catch_up_limit: f64,
}

// (year, [limit, catch-up] in RetirementAccountType::ALL order)
const TABLE: &[(i32, [(f64, f64); 7])] = &[
    (
        2025,
        [
            (23_500.0, 31_000.0),
            (7_000.0, 8_000.0),
            (7_000.0, 8_000.0),
            (16_500.0, 19_500.0),
            (70_000.0, 70_000.0),
            (23_500.0, 31_000.0),
            (0.0, 0.0),
        ],
    ),
    (
        2024,
        [
            (23_000.0, 30_500.0),
            (7_000.0, 8_000.0),
            (7_000.0, 8_000.0),
            (16_500.0, 19_500.0),
            (69_000.0, 69_000.0),
            (23_000.0, 30_500.0),
            (0.0, 0.0),
        ],
    ),
    (
        2023,
        [
            (22_500.0, 30_000.0),
            (6_500.0, 7_500.0),
            (6_500.0, 7_500.0),
            (15_500.0, 19_000.0),
            (66_000.0, 66_000.0),
            (22_500.0, 30_000.0),
            (0.0, 0.0),
        ],
    ),
];

pub fn has_published_limits(year: i32) -> bool {
    TABLE.iter().any(|(y, _)| *y == year)
}

/// Limits for `account_type` in `year`; years without published limits yield zeros.
pub fn contribution_limits(year: i32, account_type: RetirementAccountType) -> ContributionLimits {
    let idx = RetirementAccountType::ALL
        .iter()
        .position(|a| *a == account_type)
        .unwrap_or(RetirementAccountType::ALL.len() - 1);

    let (limit, catch_up_limit) = TABLE
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, row)| row[idx])
        .unwrap_or((0.0, 0.0));

    ContributionLimits {
        year,
        account_type,
        limit,
        catch_up_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_published_years() {
        let l = contribution_limits(2024, RetirementAccountType::K401);
        assert_eq!((l.limit, l.catch_up_limit), (23_000.0, 30_500.0));

        let l = contribution_limits(2025, RetirementAccountType::SepIra);
        assert_eq!(l.limit, 70_000.0);

        let l = contribution_limits(2023, RetirementAccountType::RothIra);
        assert_eq!((l.limit, l.catch_up_limit), (6_500.0, 7_500.0));
    }

    #[test]
    fn catch_up_never_below_base_limit() {
        for (year, _) in TABLE {
            for account in RetirementAccountType::ALL {
                let l = contribution_limits(*year, account);
                assert!(l.catch_up_limit >= l.limit, "{year} {account}");
            }
        }
    }

    #[test]
    fn unknown_year_is_zeroed() {
        assert!(!has_published_limits(1999));
        let l = contribution_limits(1999, RetirementAccountType::Ira);
        assert_eq!(l.year, 1999);
        assert_eq!(l.account_type, RetirementAccountType::Ira);
        assert_eq!((l.limit, l.catch_up_limit), (0.0, 0.0));
    }

    #[test]
    fn account_type_parses_and_serializes() {
        assert_eq!("401k".parse::<RetirementAccountType>().unwrap(), RetirementAccountType::K401);
        assert_eq!("Roth IRA".parse::<RetirementAccountType>().unwrap(), RetirementAccountType::RothIra);
        assert_eq!(serde_json::to_string(&RetirementAccountType::K401).unwrap(), "\"401k\"");
    }
}
