//! Company records.
//!
//! A company may name a parent company, which lets holding structures be
//! modelled. Persistence lives in `pentaledger-infra`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pentaledger_core::{CompanyId, DomainError, DomainResult, Entity};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_TAX_ID_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub tax_id: String,
    pub parent_id: Option<CompanyId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> CompanyId {
        self.id
    }
}

/// Validated input for creating a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCompany {
    name: String,
    tax_id: String,
    parent_id: Option<CompanyId>,
}

impl NewCompany {
    pub fn new(name: &str, tax_id: &str, parent_id: Option<CompanyId>) -> DomainResult<Self> {
        let name = name.trim();
        let tax_id = tax_id.trim();

        if name.is_empty() {
            return Err(DomainError::validation("company name must not be empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "company name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if tax_id.is_empty() {
            return Err(DomainError::validation("tax id must not be empty"));
        }
        if tax_id.chars().count() > MAX_TAX_ID_LEN {
            return Err(DomainError::validation(format!(
                "tax id must be at most {MAX_TAX_ID_LEN} characters"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            parent_id,
        })
    }

    /// Parse the optional parent id as typed by a user; blank means none.
    pub fn parse_parent(raw: Option<&str>) -> DomainResult<Option<CompanyId>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn parent_id(&self) -> Option<CompanyId> {
        self.parent_id
    }

    /// Materialize the record with a fresh id and identical timestamps.
    pub fn into_company(self, id: CompanyId, now: DateTime<Utc>) -> Company {
        Company {
            id,
            name: self.name,
            tax_id: self.tax_id,
            parent_id: self.parent_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_input() {
        let c = NewCompany::new("  Acme LLC ", " 12-3456789 ", None).unwrap();
        assert_eq!(c.name(), "Acme LLC");
        assert_eq!(c.tax_id(), "12-3456789");
        assert_eq!(c.parent_id(), None);
    }

    #[test]
    fn rejects_blank_or_oversized_fields() {
        assert!(matches!(NewCompany::new("  ", "1", None), Err(DomainError::Validation(_))));
        assert!(matches!(NewCompany::new("Acme", "", None), Err(DomainError::Validation(_))));
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(NewCompany::new(&long, "1", None).is_err());
        assert!(NewCompany::new(&"x".repeat(MAX_NAME_LEN), "1", None).is_ok());
    }

    #[test]
    fn parent_parsing_treats_blank_as_none() {
        assert_eq!(NewCompany::parse_parent(None).unwrap(), None);
        assert_eq!(NewCompany::parse_parent(Some("  ")).unwrap(), None);
        let id = CompanyId::new();
        assert_eq!(NewCompany::parse_parent(Some(&id.to_string())).unwrap(), Some(id));
        assert!(matches!(NewCompany::parse_parent(Some("nope")), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn into_company_stamps_both_timestamps() {
        let now = Utc::now();
        let id = CompanyId::new();
        let company = NewCompany::new("Acme", "1", None).unwrap().into_company(id, now);
        assert_eq!(company.id(), id);
        assert_eq!(company.created_at, company.updated_at);
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["parent_id"], serde_json::Value::Null);
    }
}
