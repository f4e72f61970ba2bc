//! `pentaledger-auth`: roles, permissions and bearer tokens.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod navigation;
pub mod permissions;
pub mod roles;

pub use claims::{Claims, TokenError, TokenService};
pub use navigation::{accessible_pages, can_access_page, NavItem, NAVIGATION};
pub use permissions::{has_permission, Action, Resource};
pub use roles::{ParseRoleError, Role};
