use serde::{Deserialize, Serialize};

use pentaledger_core::ValueObject;

use crate::{ParseEnumError, normalize_label};

/// Legal form of the entity whose books are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Files a 1040 and/or state individual returns.
    Individual,
    /// A DBA or single-member LLC with disregarded tax status.
    SoleProprietor,
    /// Governed by a board of governors; ownership is membership interest.
    Llc,
    /// Governed by a board of directors; ownership is shares.
    Corporation,
}

impl ValueObject for EntityType {}

impl core::str::FromStr for EntityType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "individual" => Ok(EntityType::Individual),
            "soleproprietor" | "soleprop" => Ok(EntityType::SoleProprietor),
            "llc" => Ok(EntityType::Llc),
            "corporation" | "corp" => Ok(EntityType::Corporation),
            _ => Err(ParseEnumError::new("entity type", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("sole-prop".parse::<EntityType>().unwrap(), EntityType::SoleProprietor);
        assert_eq!("LLC".parse::<EntityType>().unwrap(), EntityType::Llc);
        assert!("partnership".parse::<EntityType>().is_err());
    }
}
