use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pentaledger_core::{DomainError, DomainResult, ValueObject};

/// Where a bin sits in a warehouse.
///
/// Area is a letter `A`..=`Z`. Row (aisle), bay, level (1 is the floor) and
/// position are numbered from 1 to 255. The text form is
/// `AREA-ROW-BAY-LEVEL-POS`, e.g. `C-12-4-1-3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BinLocation {
    area: char,
    row: u8,
    bay: u8,
    level: u8,
    pos: u8,
}

impl ValueObject for BinLocation {}

impl BinLocation {
    pub fn new(area: char, row: u8, bay: u8, level: u8, pos: u8) -> DomainResult<Self> {
        let area = area.to_ascii_uppercase();
        if !area.is_ascii_uppercase() {
            return Err(DomainError::validation(format!("bin area must be A-Z, got {area:?}")));
        }
        for (field, value) in [("row", row), ("bay", bay), ("level", level), ("position", pos)] {
            if value == 0 {
                return Err(DomainError::validation(format!("bin {field} starts at 1")));
            }
        }
        Ok(Self { area, row, bay, level, pos })
    }

    pub fn area(&self) -> char {
        self.area
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn bay(&self) -> u8 {
        self.bay
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn pos(&self) -> u8 {
        self.pos
    }

    pub fn is_floor_level(&self) -> bool {
        self.level == 1
    }
}

impl fmt::Display for BinLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}-{}", self.area, self.row, self.bay, self.level, self.pos)
    }
}

impl FromStr for BinLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DomainError::validation(format!(
                "invalid bin location {s:?}, expected AREA-ROW-BAY-LEVEL-POS"
            ))
        };

        let parts: Vec<&str> = s.trim().split('-').collect();
        let [area, row, bay, level, pos] = parts.as_slice() else {
            return Err(invalid());
        };
        let mut area_chars = area.chars();
        let (Some(area), None) = (area_chars.next(), area_chars.next()) else {
            return Err(invalid());
        };
        let number = |p: &str| p.parse::<u8>().map_err(|_| invalid());

        Self::new(area, number(*row)?, number(*bay)?, number(*level)?, number(*pos)?)
    }
}

impl TryFrom<String> for BinLocation {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BinLocation> for String {
    fn from(value: BinLocation) -> Self {
        value.to_string()
    }
}
