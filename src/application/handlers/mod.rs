//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod company_data;
pub mod planning;

pub use company_data::{
    DepartmentBaselinesView, GetCompanyDataHandler, GetDepartmentBaselinesHandler,
    ResetCompanyDataHandler, ResetCompanyDataResult, UploadCompanyDataCommand,
    UploadCompanyDataHandler, UploadCompanyDataResult, UploadError,
};
pub use planning::{CalculatePlanCommand, CalculatePlanHandler, CalculatePlanResult, IntentSource};
