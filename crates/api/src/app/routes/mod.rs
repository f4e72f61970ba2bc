use axum::{routing::get, Router};

pub mod calculators;
pub mod companies;
pub mod gambling;
pub mod system;

/// Router for all authenticated endpoints (mounted under `/v1`).
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/companies", companies::router())
        .nest("/gambling", gambling::router())
        .route("/tax/niit", get(calculators::niit))
        .route("/mileage/rate", get(calculators::mileage_rate))
}
