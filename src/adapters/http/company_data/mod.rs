//! HTTP adapter for company data endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompanyDataResponse, DepartmentBaselinesResponse, UploadErrorResponse, UploadResponse,
};
pub use handlers::CompanyDataAppState;
pub use routes::{company_data_router, company_data_routes};
