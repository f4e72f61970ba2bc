use axum::{extract::Extension, response::IntoResponse, Json};

use pentaledger_auth::accessible_pages;

use crate::context::PrincipalContext;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    let pages: Vec<&str> = accessible_pages(principal.role())
        .into_iter()
        .map(|item| item.path)
        .collect();

    Json(serde_json::json!({
        "sub": principal.subject(),
        "role": principal.role(),
        "pages": pages,
        "version": pentaledger_core::version(),
    }))
}
