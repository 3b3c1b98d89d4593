//! Compensation bands and the certificates attached to them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;

use super::validation::{check_money, require_text};

/// A salary figure recorded for a company level.
///
/// Unlike a [`Contribution`](super::Contribution) this describes a band,
/// not one person's pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    /// Store-assigned identifier.
    pub id: u64,
    /// The recorded salary.
    pub salary: Decimal,
    /// Owning company.
    #[serde(rename = "company")]
    pub company_id: u64,
    /// Level of the band, belonging to the same company.
    #[serde(rename = "level")]
    pub level_id: u64,
}

/// The writable fields of a [`Compensation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompensation {
    /// The recorded salary.
    pub salary: Decimal,
    /// Owning company.
    #[serde(rename = "company")]
    pub company_id: u64,
    /// Level of the band.
    #[serde(rename = "level")]
    pub level_id: u64,
}

impl NewCompensation {
    /// Checks the salary amount.
    pub fn validate(&self) -> TrackerResult<()> {
        check_money("salary", self.salary)
    }

    pub(crate) fn into_record(self, id: u64) -> Compensation {
        Compensation {
            id,
            salary: self.salary,
            company_id: self.company_id,
            level_id: self.level_id,
        }
    }
}

impl From<&Compensation> for NewCompensation {
    fn from(compensation: &Compensation) -> Self {
        NewCompensation {
            salary: compensation.salary,
            company_id: compensation.company_id,
            level_id: compensation.level_id,
        }
    }
}

/// A certificate held by people in a compensation band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Store-assigned identifier.
    pub id: u64,
    /// Name of the certificate.
    pub certificate_name: String,
    /// Owning compensation band.
    #[serde(rename = "compensation")]
    pub compensation_id: u64,
}

/// The writable fields of a [`Certificate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCertificate {
    /// Name of the certificate.
    pub certificate_name: String,
    /// Owning compensation band.
    #[serde(rename = "compensation")]
    pub compensation_id: u64,
}

impl NewCertificate {
    /// Checks the certificate name.
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("certificate_name", &self.certificate_name)
    }

    pub(crate) fn into_record(self, id: u64) -> Certificate {
        Certificate {
            id,
            certificate_name: self.certificate_name,
            compensation_id: self.compensation_id,
        }
    }
}

impl From<&Certificate> for NewCertificate {
    fn from(certificate: &Certificate) -> Self {
        NewCertificate {
            certificate_name: certificate.certificate_name.clone(),
            compensation_id: certificate.compensation_id,
        }
    }
}
