//! Stateless tax and mileage calculators.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use pentaledger_accounting::{FilingStatus, NiitParams};
use pentaledger_auth::{Action, Resource};
use pentaledger_gambling::parse_date;
use pentaledger_transportation::{MileageCategory, mileage_deduction, mileage_rate as rate_for};

use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub async fn niit(
    Extension(principal): Extension<PrincipalContext>,
    Query(q): Query<dto::NiitQuery>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Taxes, Action::Read) {
        return resp;
    }

    let params = match q.filing_status.as_deref().map(str::parse::<FilingStatus>) {
        None => NiitParams::default(),
        Some(Ok(status)) => NiitParams::for_filing_status(status),
        Some(Err(e)) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
        }
    };

    if !q.magi.is_finite() || !q.investment_income.is_finite() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "magi and investment_income must be finite numbers",
        );
    }

    let body = dto::NiitResponse {
        magi: q.magi,
        investment_income: q.investment_income,
        threshold: params.threshold,
        rate: params.rate,
        niit: params.compute(q.magi, q.investment_income),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn mileage_rate(
    Extension(principal): Extension<PrincipalContext>,
    Query(q): Query<dto::MileageQuery>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, Resource::Vehicles, Action::Read) {
        return resp;
    }

    let date = match parse_date(&q.date) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let category: MileageCategory = match q.category.parse() {
        Ok(c) => c,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    };

    let body = dto::MileageResponse {
        date,
        category,
        rate_per_mile: rate_for(date, category),
        deduction: q.miles.map(|miles| mileage_deduction(miles, date, category)),
    };
    (StatusCode::OK, Json(body)).into_response()
}
