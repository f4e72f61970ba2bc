//! IRS standard mileage rates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pentaledger_core::ValueObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MileageCategory {
    Business,
    Medical,
    Personal,
}

impl ValueObject for MileageCategory {}

impl MileageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MileageCategory::Business => "business",
            MileageCategory::Medical => "medical",
            MileageCategory::Personal => "personal",
        }
    }
}

impl core::fmt::Display for MileageCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MileageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(MileageCategory::Business),
            "medical" => Ok(MileageCategory::Medical),
            "personal" | "charity" | "charitable" => Ok(MileageCategory::Personal),
            other => Err(format!("unknown mileage category: {other:?}")),
        }
    }
}

/// A rate that takes effect on `start` and holds until superseded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MileageRate {
    pub start: NaiveDate,
    pub category: MileageCategory,
    pub rate_per_mile: f64,
}

// (year, month, day) the rate takes effect, newest first.
const RATES: &[((i32, u32, u32), MileageCategory, f64)] = &[
    ((2024, 1, 1), MileageCategory::Business, 0.655),
    ((2024, 1, 1), MileageCategory::Medical, 0.655),
    ((2024, 1, 1), MileageCategory::Personal, 0.655),
    ((2023, 1, 1), MileageCategory::Business, 0.585),
    ((2023, 1, 1), MileageCategory::Medical, 0.585),
    ((2023, 1, 1), MileageCategory::Personal, 0.585),
];

/// All known rates, newest first.
pub fn rates() -> Vec<MileageRate> {
    RATES
        .iter()
        .filter_map(|&((y, m, d), category, rate_per_mile)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|start| MileageRate {
                start,
                category,
                rate_per_mile,
            })
        })
        .collect()
}

/// Per-mile rate in effect on `date`, or `0.0` before the first published rate.
pub fn mileage_rate(date: NaiveDate, category: MileageCategory) -> f64 {
    rates()
        .into_iter()
        .find(|r| r.category == category && r.start <= date)
        .map(|r| r.rate_per_mile)
        .unwrap_or(0.0)
}

pub fn mileage_deduction(miles: f64, date: NaiveDate, category: MileageCategory) -> f64 {
    miles * mileage_rate(date, category)
}
