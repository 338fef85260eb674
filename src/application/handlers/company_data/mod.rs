//! Company data command and query handlers.

mod get_company_data;
mod get_department_baselines;
mod reset_company_data;
mod upload_company_data;

pub use get_company_data::GetCompanyDataHandler;
pub use get_department_baselines::{DepartmentBaselinesView, GetDepartmentBaselinesHandler};
pub use reset_company_data::{ResetCompanyDataHandler, ResetCompanyDataResult};
pub use upload_company_data::{
    UploadCompanyDataCommand, UploadCompanyDataHandler, UploadCompanyDataResult, UploadError,
};
