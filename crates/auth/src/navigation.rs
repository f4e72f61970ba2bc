use serde::Serialize;

use crate::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: &'static [Role],
}

const EVERYONE: &[Role] = &Role::ALL;
const ADMINS: &[Role] = &[Role::Admin, Role::Manager];

const fn item(path: &'static str, label: &'static str, roles: &'static [Role]) -> NavItem {
    NavItem { path, label, roles }
}

/// Pages of the web front end and who may open them.
pub const NAVIGATION: &[NavItem] = &[
    item("/", "Home", EVERYONE),
    item("/companies", "Companies", EVERYONE),
    item("/governance", "Governance/Compliance", EVERYONE),
    item("/customers", "Customers", EVERYONE),
    item("/invoices", "Invoices", EVERYONE),
    item("/quotes", "Quotes", EVERYONE),
    item("/vehicles", "Vehicles & Mileage", EVERYONE),
    item("/chart-of-accounts", "Chart of Accounts", EVERYONE),
    item("/expenses", "Expenses & Purchasing", EVERYONE),
    item("/vendors", "Vendors and Suppliers", EVERYONE),
    item("/payroll", "Payroll", EVERYONE),
    item("/taxes", "Taxes", EVERYONE),
    item("/reports", "Reports", EVERYONE),
    item("/settings", "Settings", ADMINS),
];

/// Unknown paths are never accessible.
pub fn can_access_page(role: Role, path: &str) -> bool {
    NAVIGATION
        .iter()
        .find(|item| item.path == path)
        .is_some_and(|item| item.roles.contains(&role))
}

pub fn accessible_pages(role: Role) -> Vec<&'static NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}
