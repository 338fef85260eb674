//! HTTP handlers for company data endpoints.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::company_data::{
    GetCompanyDataHandler, GetDepartmentBaselinesHandler, ResetCompanyDataHandler,
    UploadCompanyDataCommand, UploadCompanyDataHandler,
};
use crate::ports::{BaselineStore, TableParser};

use super::dto::{
    CompanyDataResponse, DepartmentBaselinesResponse, UploadErrorResponse, UploadResponse,
    CLEARED_MESSAGE,
};

/// Multipart field carrying the spreadsheet.
const FILE_FIELD: &str = "file";

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CompanyDataAppState {
    pub table_parser: Arc<dyn TableParser>,
    pub baseline_store: Arc<dyn BaselineStore>,
}

impl CompanyDataAppState {
    pub fn upload_handler(&self) -> UploadCompanyDataHandler {
        UploadCompanyDataHandler::new(self.table_parser.clone(), self.baseline_store.clone())
    }

    pub fn get_handler(&self) -> GetCompanyDataHandler {
        GetCompanyDataHandler::new(self.baseline_store.clone())
    }

    pub fn reset_handler(&self) -> ResetCompanyDataHandler {
        ResetCompanyDataHandler::new(self.baseline_store.clone())
    }

    pub fn department_baselines_handler(&self) -> GetDepartmentBaselinesHandler {
        GetDepartmentBaselinesHandler::new(self.baseline_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/upload - Replace the company baseline from a spreadsheet
pub async fn upload_company_data(
    State(state): State<CompanyDataAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let cmd = match read_file_field(multipart).await {
        Ok(cmd) => cmd,
        Err(message) => return upload_error(message),
    };

    match state.upload_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(UploadResponse::from(result))).into_response(),
        Err(err) => upload_error(err.to_string()),
    }
}

/// DELETE /api/company-data - Drop the uploaded baseline
pub async fn reset_company_data(State(state): State<CompanyDataAppState>) -> Response {
    state.reset_handler().handle().await;
    (
        StatusCode::OK,
        Json(CompanyDataResponse::no_data(CLEARED_MESSAGE)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/company-data - Current baseline status and metrics
pub async fn get_company_data(State(state): State<CompanyDataAppState>) -> Response {
    let baseline = state.get_handler().handle().await;
    (StatusCode::OK, Json(CompanyDataResponse::from(baseline.as_ref()))).into_response()
}

/// GET /api/company-data/baselines - Per-department baseline figures
pub async fn get_department_baselines(State(state): State<CompanyDataAppState>) -> Response {
    let view = state.department_baselines_handler().handle().await;
    (StatusCode::OK, Json(DepartmentBaselinesResponse::from(view))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadCompanyDataCommand, String> {
    let mut multipart = multipart.map_err(|rejection| rejection.body_text())?;

    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| e.body_text())?;
        return Ok(UploadCompanyDataCommand {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(format!("Missing multipart field '{}'", FILE_FIELD))
}

fn upload_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(UploadErrorResponse::new(message)),
    )
        .into_response()
}
