use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use pentaledger_core::{DomainError, DomainResult, Entity, GamblingLogId, Money};

use crate::wagering::WageringType;

pub const MAX_ESTABLISHMENT_LEN: usize = 255;
pub const MAX_WAGERING_TYPE_LEN: usize = 50;
pub const MAX_LOCATION_ID_LEN: usize = 50;

/// One session in the gambling diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamblingLog {
    pub id: GamblingLogId,
    pub date: NaiveDate,
    pub establishment_name: String,
    pub establishment_address: String,
    pub time_of_day: NaiveTime,
    pub wagering_type: String,
    pub location_id: String,
    /// Winnings reported on Form W-2G.
    pub w2_winnings: Money,
    pub winnings: Money,
    pub losses: Money,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GamblingLog {
    pub fn net(&self) -> Money {
        self.winnings - self.losses
    }

    pub fn wagering(&self) -> WageringType {
        WageringType::parse(&self.wagering_type)
    }
}

impl Entity for GamblingLog {
    type Id = GamblingLogId;

    fn id(&self) -> GamblingLogId {
        self.id
    }
}

/// Unparsed fields as typed on the command line or read from a CSV row.
///
/// Field names follow the long CLI flags; the record-style names are accepted
/// as aliases so either header style imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GamblingLogInput {
    pub date: String,
    #[serde(alias = "establishment_name")]
    pub establishment: String,
    #[serde(alias = "establishment_address")]
    pub address: String,
    #[serde(alias = "time_of_day")]
    pub time: String,
    #[serde(rename = "type", alias = "wagering_type")]
    pub wagering_type: String,
    #[serde(alias = "location_id")]
    pub location: String,
    #[serde(alias = "w2_winnings")]
    pub w2: String,
    pub winnings: String,
    pub losses: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Validated input for a new diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGamblingLog {
    pub date: NaiveDate,
    pub establishment_name: String,
    pub establishment_address: String,
    #[serde(deserialize_with = "deserialize_time")]
    pub time_of_day: NaiveTime,
    pub wagering_type: String,
    pub location_id: String,
    pub w2_winnings: Money,
    pub winnings: Money,
    pub losses: Money,
    #[serde(default)]
    pub notes: String,
}

impl NewGamblingLog {
    pub fn parse(input: &GamblingLogInput) -> DomainResult<Self> {
        let new = Self {
            date: parse_date(&input.date)?,
            establishment_name: input.establishment.clone(),
            establishment_address: input.address.clone(),
            time_of_day: parse_time(&input.time)?,
            wagering_type: input.wagering_type.clone(),
            location_id: input.location.clone(),
            w2_winnings: parse_amount("w2 winnings", &input.w2)?,
            winnings: parse_amount("winnings", &input.winnings)?,
            losses: parse_amount("losses", &input.losses)?,
            notes: input.notes.clone().unwrap_or_default(),
        };
        new.validate()
    }

    /// Trim text fields and check the diary invariants.
    pub fn validate(mut self) -> DomainResult<Self> {
        self.establishment_name =
            required("establishment name", &self.establishment_name, MAX_ESTABLISHMENT_LEN)?;
        self.establishment_address =
            required("establishment address", &self.establishment_address, MAX_ESTABLISHMENT_LEN)?;
        self.wagering_type = required("wagering type", &self.wagering_type, MAX_WAGERING_TYPE_LEN)?;
        self.location_id = required("location id", &self.location_id, MAX_LOCATION_ID_LEN)?;
        self.notes = self.notes.trim().to_string();

        for (field, amount) in [
            ("w2 winnings", self.w2_winnings),
            ("winnings", self.winnings),
            ("losses", self.losses),
        ] {
            if amount.is_negative() {
                return Err(DomainError::validation(format!("{field} must not be negative")));
            }
        }
        if self.w2_winnings > self.winnings {
            return Err(DomainError::validation("w2 winnings cannot exceed total winnings"));
        }
        Ok(self)
    }

    pub fn into_log(self, id: GamblingLogId, now: DateTime<Utc>) -> GamblingLog {
        GamblingLog {
            id,
            date: self.date,
            establishment_name: self.establishment_name,
            establishment_address: self.establishment_address,
            time_of_day: self.time_of_day,
            wagering_type: self.wagering_type,
            location_id: self.location_id,
            w2_winnings: self.w2_winnings,
            winnings: self.winnings,
            losses: self.losses,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}

/// `HH:MM:SS` or `HH:MM`.
pub fn parse_time(raw: &str) -> DomainResult<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| DomainError::validation(format!("invalid time {raw:?}, expected HH:MM[:SS]")))
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(serde::de::Error::custom)
}

fn parse_amount(field: &str, raw: &str) -> DomainResult<Money> {
    Money::parse(raw).map_err(|e| match e {
        DomainError::Validation(msg) => DomainError::validation(format!("{field}: {msg}")),
        other => other,
    })
}

fn required(field: &str, value: &str, max_len: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}
