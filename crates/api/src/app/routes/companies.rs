use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use pentaledger_auth::{Action, Resource};
use pentaledger_companies::NewCompany;
use pentaledger_core::CompanyId;

use crate::app::{dto, errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_company).get(list_companies))
        .route("/:id", get(get_company))
}

pub async fn create_company(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    payload: Result<Json<dto::CreateCompanyRequest>, JsonRejection>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Companies, Action::Write) {
        return resp;
    }
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let new = match NewCompany::parse_parent(body.parent_id.as_deref())
        .and_then(|parent| NewCompany::new(&body.name, &body.tax_id, parent))
    {
        Ok(new) => new,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.companies.create_company(new).await {
        Ok(company) => {
            tracing::info!(company_id = %company.id, "company created");
            (StatusCode::CREATED, Json(company)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_companies(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Companies, Action::Read) {
        return resp;
    }

    match services.companies.list_companies().await {
        Ok(items) => (StatusCode::OK, Json(dto::Items::from(items))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_company(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Companies, Action::Read) {
        return resp;
    }

    let id: CompanyId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.companies.get_company(id).await {
        Ok(Some(company)) => (StatusCode::OK, Json(company)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
