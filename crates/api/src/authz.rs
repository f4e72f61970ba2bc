//! Route-level permission checks against the role table.

use axum::http::StatusCode;
use axum::response::Response;

use pentaledger_auth::{has_permission, Action, Resource};

use crate::app::errors::json_error;
use crate::context::PrincipalContext;

/// `Err` carries a ready 403 response.
pub fn require(
    principal: &PrincipalContext,
    resource: Resource,
    action: Action,
) -> Result<(), Response> {
    if has_permission(principal.role(), resource, action) {
        return Ok(());
    }
    tracing::info!(
        sub = principal.subject(),
        role = %principal.role(),
        %resource,
        %action,
        "permission denied"
    );
    Err(json_error(
        StatusCode::FORBIDDEN,
        "forbidden",
        format!("missing permission '{resource}:{action}'"),
    ))
}
