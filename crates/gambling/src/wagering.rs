use serde::{Deserialize, Serialize};

/// Kind of wagering activity.
///
/// Stored as free text; known spellings normalize to a variant and anything
/// else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WageringType {
    Lottery,
    Slots,
    Poker,
    Blackjack,
    Sports,
    Other(String),
}

impl WageringType {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "lottery" | "lotto" | "scratch" | "scratch-off" => WageringType::Lottery,
            "slots" | "slot" | "slot machine" | "slot machines" => WageringType::Slots,
            "poker" => WageringType::Poker,
            "blackjack" | "21" => WageringType::Blackjack,
            "sports" | "sports betting" | "sportsbook" => WageringType::Sports,
            _ => WageringType::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WageringType::Lottery => "Lottery",
            WageringType::Slots => "Slots",
            WageringType::Poker => "Poker",
            WageringType::Blackjack => "Blackjack",
            WageringType::Sports => "Sports",
            WageringType::Other(s) => s,
        }
    }
}

impl core::fmt::Display for WageringType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for WageringType {
    fn from(value: String) -> Self {
        WageringType::parse(&value)
    }
}

impl From<WageringType> for String {
    fn from(value: WageringType) -> Self {
        value.as_str().to_string()
    }
}
