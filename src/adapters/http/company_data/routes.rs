//! Axum router configuration for company data endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_company_data, get_department_baselines, reset_company_data, upload_company_data,
    CompanyDataAppState,
};

/// Create the company data API router.
///
/// # Routes
///
/// - `POST /upload` - Upload a spreadsheet (multipart field `file`)
/// - `GET /company-data` - Baseline status and metrics
/// - `DELETE /company-data` - Reset to default baselines
/// - `GET /company-data/baselines` - Per-department figures
pub fn company_data_routes() -> Router<CompanyDataAppState> {
    Router::new()
        .route("/upload", post(upload_company_data))
        .route(
            "/company-data",
            get(get_company_data).delete(reset_company_data),
        )
        .route("/company-data/baselines", get(get_department_baselines))
}

/// Company data router with its state applied.
pub fn company_data_router(state: CompanyDataAppState) -> Router {
    company_data_routes().with_state(state)
}
