use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use pentaledger_auth::{Action, Resource};
use pentaledger_gambling::{GamblingSummary, NewGamblingLog};

use crate::app::{dto, errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_gambling_log).get(list_gambling_logs))
        .route("/summary", get(gambling_summary))
}

pub async fn create_gambling_log(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    payload: Result<Json<NewGamblingLog>, JsonRejection>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Taxes, Action::Write) {
        return resp;
    }
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.gambling.create_gambling_log(body).await {
        Ok(log) => {
            tracing::info!(gambling_log_id = %log.id, "gambling log created");
            (StatusCode::CREATED, Json(log)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_gambling_logs(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Taxes, Action::Read) {
        return resp;
    }

    match services.gambling.list_gambling_logs().await {
        Ok(items) => (StatusCode::OK, Json(dto::Items::from(items))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn gambling_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Taxes, Action::Read) {
        return resp;
    }

    match services.gambling.list_gambling_logs().await {
        Ok(logs) => {
            let summary = match GamblingSummary::from_logs(&logs) {
                Ok(summary) => summary,
                Err(e) => return errors::domain_error_to_response(e),
            };
            (
                StatusCode::OK,
                Json(json!({
                    "summary": summary,
                    "outcome": summary.outcome(),
                })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
