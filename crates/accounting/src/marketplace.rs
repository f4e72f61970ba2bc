use serde::{Deserialize, Serialize};

use crate::{ParseEnumError, normalize_label};

/// A marketplace that facilitates sales for sellers and takes a commission.
///
/// Whether the marketplace collects and remits sales tax varies by provider
/// and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplaceProvider {
    AmazonSeller,
    /// Collects and remits sales tax for sellers; offers a sales API.
    Ebay,
    /// Collects sales tax in a limited number of states. No API.
    Poshmark,
}

impl MarketplaceProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            MarketplaceProvider::AmazonSeller => "Amazon Seller",
            MarketplaceProvider::Ebay => "eBay",
            MarketplaceProvider::Poshmark => "Poshmark",
        }
    }
}

impl core::str::FromStr for MarketplaceProvider {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "amazon" | "amazonseller" => Ok(MarketplaceProvider::AmazonSeller),
            "ebay" => Ok(MarketplaceProvider::Ebay),
            "poshmark" => Ok(MarketplaceProvider::Poshmark),
            _ => Err(ParseEnumError::new("marketplace provider", s)),
        }
    }
}
