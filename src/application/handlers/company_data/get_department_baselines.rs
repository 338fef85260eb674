//! GetDepartmentBaselinesHandler - Query handler for per-department figures.

use std::sync::Arc;

use crate::domain::baseline::DepartmentBaseline;
use crate::domain::intent::Department;
use crate::ports::BaselineStore;

/// Figures for every department, in reporting order.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBaselinesView {
    pub loaded: bool,
    pub departments: Vec<DepartmentBaseline>,
}

pub struct GetDepartmentBaselinesHandler {
    baselines: Arc<dyn BaselineStore>,
}

impl GetDepartmentBaselinesHandler {
    pub fn new(baselines: Arc<dyn BaselineStore>) -> Self {
        Self { baselines }
    }

    pub async fn handle(&self) -> DepartmentBaselinesView {
        let baseline = self.baselines.current().await;
        DepartmentBaselinesView {
            loaded: baseline.is_loaded(),
            departments: Department::ALL
                .iter()
                .map(|department| baseline.department_baseline(*department))
                .collect(),
        }
    }
}
