//! The fixed set of departments the engine produces recommendations for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A department ("agent") that receives a recommendation.
///
/// Ordering of [`Department::ALL`] is the order decisions are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Marketing,
    Finance,
    Operations,
    Support,
    #[serde(rename = "HR")]
    Hr,
}

impl Department {
    /// Every department, in reporting order.
    pub const ALL: [Department; 6] = [
        Department::Sales,
        Department::Marketing,
        Department::Finance,
        Department::Operations,
        Department::Support,
        Department::Hr,
    ];

    /// Display name, also the wire identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Support => "Support",
            Department::Hr => "HR",
        }
    }

    /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_reporting_order() {
        let names: Vec<_> = Department::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["Sales", "Marketing", "Finance", "Operations", "Support", "HR"]
        );
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Department::from_name("hr"), Some(Department::Hr));
        assert_eq!(Department::from_name(" Marketing "), Some(Department::Marketing));
        assert_eq!(Department::from_name("Legal"), None);
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Department::Hr).unwrap();
        assert_eq!(json, "\"HR\"");
        let back: Department = serde_json::from_str("\"Operations\"").unwrap();
        assert_eq!(back, Department::Operations);
    }
}
