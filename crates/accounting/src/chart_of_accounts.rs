//! Chart of accounts: the list of accounts transactions are posted to.
//!
//! Accounts form a forest. A sub-account names its parent, shares the
//! parent's [`AccountKind`], and may nest at most [`MAX_DEPTH`] levels deep.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use pentaledger_core::{AccountId, DomainError, DomainResult, Entity, ValueObject};

use crate::{ParseEnumError, normalize_label};

/// Deepest allowed nesting, counting the top-level account as level 1.
pub const MAX_DEPTH: usize = 5;

/// High-level account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
}

impl ValueObject for AccountKind {}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Asset => "asset",
            AccountKind::Liability => "liability",
            AccountKind::Equity => "equity",
            AccountKind::Income => "income",
            AccountKind::Expense => "expense",
        }
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AccountKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "asset" => Ok(AccountKind::Asset),
            "liability" => Ok(AccountKind::Liability),
            "equity" => Ok(AccountKind::Equity),
            "income" | "revenue" => Ok(AccountKind::Income),
            "expense" => Ok(AccountKind::Expense),
            _ => Err(ParseEnumError::new("account kind", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAccount {
    pub id: AccountId,
    /// User-defined number such as `10000`, `1.233.23` or `1-20-3232`.
    pub account_number: String,
    pub name: String,
    pub parent_id: Option<AccountId>,
    pub description: String,
    /// Inactive accounts are hidden from most listings and cannot be posted to.
    pub active: bool,
    pub kind: AccountKind,
}

impl ChartAccount {
    pub fn is_sub_account(&self) -> bool {
        self.parent_id.is_some()
    }
}

impl Entity for ChartAccount {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Input for [`ChartOfAccounts::create_account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChartAccount {
    pub account_number: String,
    pub name: String,
    pub kind: AccountKind,
    #[serde(default)]
    pub parent_id: Option<AccountId>,
    #[serde(default)]
    pub description: String,
}

impl NewChartAccount {
    pub fn new(account_number: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            account_number: account_number.into(),
            name: name.into(),
            kind,
            parent_id: None,
            description: String::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: AccountId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub account_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// In-memory chart of accounts.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: HashMap<AccountId, ChartAccount>,
    by_number: BTreeMap<String, AccountId>,
}

impl ChartOfAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn create_account(&mut self, new: NewChartAccount) -> DomainResult<AccountId> {
        self.create_account_with_id(AccountId::new(), new)
    }

    /// Like [`create_account`](Self::create_account) with a caller-chosen id.
    pub fn create_account_with_id(&mut self, id: AccountId, new: NewChartAccount) -> DomainResult<AccountId> {
        let number = required("account number", &new.account_number)?;
        let name = required("account name", &new.name)?;

        if self.accounts.contains_key(&id) {
            return Err(DomainError::conflict(format!("account id {id} already exists")));
        }
        if self.by_number.contains_key(&number) {
            return Err(DomainError::conflict(format!("account number {number} already exists")));
        }

        if let Some(parent_id) = new.parent_id {
            let parent = self.accounts.get(&parent_id).ok_or(DomainError::not_found("parent account"))?;
            if parent.kind != new.kind {
                return Err(DomainError::invariant(format!(
                    "sub-account kind {} does not match parent kind {}",
                    new.kind, parent.kind
                )));
            }
            if self.depth(parent_id) + 1 > MAX_DEPTH {
                return Err(DomainError::invariant(format!(
                    "accounts may nest at most {MAX_DEPTH} levels"
                )));
            }
        }

        let account = ChartAccount {
            id,
            account_number: number.clone(),
            name,
            parent_id: new.parent_id,
            description: new.description.trim().to_string(),
            active: true,
            kind: new.kind,
        };
        self.by_number.insert(number, id);
        self.accounts.insert(id, account);
        Ok(id)
    }

    pub fn update_account(&mut self, id: AccountId, update: AccountUpdate) -> DomainResult<&ChartAccount> {
        if !self.accounts.contains_key(&id) {
            return Err(DomainError::not_found("account"));
        }

        let new_number = match update.account_number {
            Some(n) => Some(required("account number", &n)?),
            None => None,
        };
        let new_name = match update.name {
            Some(n) => Some(required("account name", &n)?),
            None => None,
        };

        if let Some(number) = &new_number {
            if let Some(owner) = self.by_number.get(number) {
                if *owner != id {
                    return Err(DomainError::conflict(format!("account number {number} already exists")));
                }
            }
        }

        let account = self.accounts.get_mut(&id).ok_or(DomainError::not_found("account"))?;
        if let Some(number) = new_number {
            self.by_number.remove(&account.account_number);
            self.by_number.insert(number.clone(), id);
            account.account_number = number;
        }
        if let Some(name) = new_name {
            account.name = name;
        }
        if let Some(description) = update.description {
            account.description = description.trim().to_string();
        }
        if let Some(active) = update.active {
            account.active = active;
        }
        Ok(account)
    }

    pub fn delete_account(&mut self, id: AccountId) -> DomainResult<ChartAccount> {
        if !self.accounts.contains_key(&id) {
            return Err(DomainError::not_found("account"));
        }
        if self.accounts.values().any(|a| a.parent_id == Some(id)) {
            return Err(DomainError::conflict("account has sub-accounts"));
        }
        let account = self.accounts.remove(&id).ok_or(DomainError::not_found("account"))?;
        self.by_number.remove(&account.account_number);
        Ok(account)
    }

    pub fn get(&self, id: AccountId) -> Option<&ChartAccount> {
        self.accounts.get(&id)
    }

    pub fn find_by_number(&self, number: &str) -> Option<&ChartAccount> {
        self.by_number
            .get(number.trim())
            .and_then(|id| self.accounts.get(id))
    }

    /// Direct sub-accounts of `id`, ordered by account number.
    pub fn children(&self, id: AccountId) -> Vec<&ChartAccount> {
        self.list()
            .into_iter()
            .filter(|a| a.parent_id == Some(id))
            .collect()
    }

    /// All accounts ordered by account number.
    pub fn list(&self) -> Vec<&ChartAccount> {
        self.by_number
            .values()
            .filter_map(|id| self.accounts.get(id))
            .collect()
    }

    /// `Parent:Account:SubAccount` style name, topmost parent first.
    pub fn fully_qualified_name(&self, id: AccountId) -> DomainResult<String> {
        let names: Vec<&str> = self
            .lineage(id)?
            .into_iter()
            .rev()
            .map(|a| a.name.as_str())
            .collect();
        Ok(names.join(":"))
    }

    /// Whether transactions may be posted: the account and all its ancestors are active.
    pub fn can_post(&self, id: AccountId) -> DomainResult<bool> {
        Ok(self.lineage(id)?.iter().all(|a| a.active))
    }

    /// The account followed by its ancestors, nearest first.
    fn lineage(&self, id: AccountId) -> DomainResult<Vec<&ChartAccount>> {
        let mut out = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let account = self.accounts.get(&cur).ok_or(DomainError::not_found("account"))?;
            out.push(account);
            current = account.parent_id;
        }
        Ok(out)
    }

    fn depth(&self, id: AccountId) -> usize {
        self.lineage(id).map(|l| l.len()).unwrap_or(0)
    }
}

fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
