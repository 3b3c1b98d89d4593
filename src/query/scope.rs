//! Parent-record filters for the level, compensation and certificate lists.

use serde::Deserialize;

use super::filter::optional_id;

/// Restricts a list to records of one company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyScope {
    /// Company id.
    #[serde(default, deserialize_with = "optional_id")]
    pub company: Option<u64>,
}

impl CompanyScope {
    /// Whether a record owned by `company_id` is in scope.
    pub fn includes(&self, company_id: u64) -> bool {
        self.company.is_none_or(|id| id == company_id)
    }
}

/// Restricts the certificate list to one compensation band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CompensationScope {
    /// Compensation id.
    #[serde(default, deserialize_with = "optional_id")]
    pub compensation: Option<u64>,
}

impl CompensationScope {
    /// Whether a certificate of `compensation_id` is in scope.
    pub fn includes(&self, compensation_id: u64) -> bool {
        self.compensation.is_none_or(|id| id == compensation_id)
    }
}
