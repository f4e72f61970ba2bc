//! Resource/action permission table.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Role;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Dashboard,
    Profile,
    Companies,
    Governance,
    Customers,
    Invoices,
    Quotes,
    Vehicles,
    ChartOfAccounts,
    Expenses,
    Vendors,
    Payroll,
    Taxes,
    Reports,
    Settings,
    UserManagement,
}

impl Resource {
    pub const ALL: [Resource; 16] = [
        Resource::Dashboard,
        Resource::Profile,
        Resource::Companies,
        Resource::Governance,
        Resource::Customers,
        Resource::Invoices,
        Resource::Quotes,
        Resource::Vehicles,
        Resource::ChartOfAccounts,
        Resource::Expenses,
        Resource::Vendors,
        Resource::Payroll,
        Resource::Taxes,
        Resource::Reports,
        Resource::Settings,
        Resource::UserManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Dashboard => "dashboard",
            Resource::Profile => "profile",
            Resource::Companies => "companies",
            Resource::Governance => "governance",
            Resource::Customers => "customers",
            Resource::Invoices => "invoices",
            Resource::Quotes => "quotes",
            Resource::Vehicles => "vehicles",
            Resource::ChartOfAccounts => "chart-of-accounts",
            Resource::Expenses => "expenses",
            Resource::Vendors => "vendors",
            Resource::Payroll => "payroll",
            Resource::Taxes => "taxes",
            Resource::Reports => "reports",
            Resource::Settings => "settings",
            Resource::UserManagement => "user-management",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const R: &[Action] = &[Action::Read];
const RW: &[Action] = &[Action::Read, Action::Write];
const RWD: &[Action] = &[Action::Read, Action::Write, Action::Delete];
const NONE: &[Action] = &[];

/// Actions `role` may perform on `resource`.
pub fn allowed_actions(role: Role, resource: Resource) -> &'static [Action] {
    use Resource::*;

    match (role, resource) {
        (_, Dashboard) => R,
        (_, Profile) => RW,

        (Role::Admin, _) => RWD,

        (Role::Manager, Settings) => R,
        (Role::Manager, UserManagement) => NONE,
        (Role::Manager, _) => RW,

        (Role::Accountant, Invoices | ChartOfAccounts | Expenses | Taxes) => RW,
        (Role::Accountant, UserManagement) => NONE,
        (Role::Accountant, _) => R,

        (Role::User, UserManagement) => NONE,
        (Role::User, _) => R,
    }
}

pub fn has_permission(role: Role, resource: Resource, action: Action) -> bool {
    allowed_actions(role, resource).contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_do_everything_but_delete_dashboard_or_profile() {
        for resource in Resource::ALL {
            assert!(has_permission(Role::Admin, resource, Action::Read));
        }
        assert!(has_permission(Role::Admin, Resource::UserManagement, Action::Delete));
        assert!(!has_permission(Role::Admin, Resource::Dashboard, Action::Write));
        assert!(!has_permission(Role::Admin, Resource::Profile, Action::Delete));
    }

    #[test]
    fn manager_writes_but_never_deletes() {
        assert!(has_permission(Role::Manager, Resource::Companies, Action::Write));
        assert!(!has_permission(Role::Manager, Resource::Companies, Action::Delete));
        assert!(!has_permission(Role::Manager, Resource::Settings, Action::Write));
        assert!(!has_permission(Role::Manager, Resource::UserManagement, Action::Read));
    }

    #[test]
    fn accountant_writes_only_bookkeeping_resources() {
        for resource in [
            Resource::Invoices,
            Resource::ChartOfAccounts,
            Resource::Expenses,
            Resource::Taxes,
            Resource::Profile,
        ] {
            assert!(has_permission(Role::Accountant, resource, Action::Write), "{resource}");
        }
        assert!(!has_permission(Role::Accountant, Resource::Companies, Action::Write));
        assert!(has_permission(Role::Accountant, Resource::Companies, Action::Read));
    }

    #[test]
    fn user_is_read_only_outside_profile() {
        for resource in Resource::ALL {
            let expect_write = resource == Resource::Profile;
            assert_eq!(has_permission(Role::User, resource, Action::Write), expect_write);
            assert!(!has_permission(Role::User, resource, Action::Delete));
        }
        assert!(!has_permission(Role::User, Resource::UserManagement, Action::Read));
    }

    #[test]
    fn resource_names_are_kebab_case() {
        assert_eq!(Resource::ChartOfAccounts.as_str(), "chart-of-accounts");
        assert_eq!(
            serde_json::to_string(&Resource::UserManagement).unwrap(),
            "\"user-management\""
        );
    }
}
