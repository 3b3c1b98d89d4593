//! Request types for the salary tracker API.
//!
//! Create (`POST`) and full update (`PUT`) bodies are the record drafts from
//! [`crate::models`]. Partial updates (`PATCH`) use the patch types below:
//! every field is optional and only the fields present are applied on top of
//! the record's current values.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::models::{
    AcademicLevel, Gender, NewCertificate, NewCompany, NewCompensation, NewContribution, NewLevel,
};

/// Distinguishes an explicit `null` from a missing key.
///
/// Used with `#[serde(default)]`: a missing key stays `None`, `null` becomes
/// `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update of a company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyPatch {
    /// Full name.
    pub name: Option<String>,
    /// Short name.
    pub short_name: Option<String>,
    /// Location.
    pub location: Option<String>,
}

impl CompanyPatch {
    /// Applies the present fields to `draft`.
    pub fn apply_to(self, mut draft: NewCompany) -> NewCompany {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(short_name) = self.short_name {
            draft.short_name = short_name;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        draft
    }
}

/// Partial update of a level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelPatch {
    /// Display name.
    pub name: Option<String>,
    /// Sort position.
    pub order: Option<u32>,
    /// Owning company id.
    #[serde(rename = "company")]
    pub company_id: Option<u64>,
}

impl LevelPatch {
    /// Applies the present fields to `draft`.
    pub fn apply_to(self, mut draft: NewLevel) -> NewLevel {
        if let Some(name) = self.name {
            draft.name = name;
        }
        draft.order = self.order.unwrap_or(draft.order);
        draft.company_id = self.company_id.unwrap_or(draft.company_id);
        draft
    }
}

/// Partial update of a compensation band.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompensationPatch {
    /// Recorded salary.
    pub salary: Option<Decimal>,
    /// Company id.
    #[serde(rename = "company")]
    pub company_id: Option<u64>,
    /// Level id.
    #[serde(rename = "level")]
    pub level_id: Option<u64>,
}

impl CompensationPatch {
    /// Applies the present fields to `draft`.
    pub fn apply_to(self, mut draft: NewCompensation) -> NewCompensation {
        draft.salary = self.salary.unwrap_or(draft.salary);
        draft.company_id = self.company_id.unwrap_or(draft.company_id);
        draft.level_id = self.level_id.unwrap_or(draft.level_id);
        draft
    }
}

/// Partial update of a certificate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificatePatch {
    /// Certificate name.
    pub certificate_name: Option<String>,
    /// Compensation band id.
    #[serde(rename = "compensation")]
    pub compensation_id: Option<u64>,
}

impl CertificatePatch {
    /// Applies the present fields to `draft`.
    pub fn apply_to(self, mut draft: NewCertificate) -> NewCertificate {
        if let Some(certificate_name) = self.certificate_name {
            draft.certificate_name = certificate_name;
        }
        draft.compensation_id = self.compensation_id.unwrap_or(draft.compensation_id);
        draft
    }
}

/// Partial update of a contribution.
///
/// The optional record fields can be cleared with an explicit `null`. The
/// submission timestamp cannot be changed and is ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionPatch {
    /// Job title.
    pub job_title: Option<String>,
    /// Total years of professional experience.
    #[serde(default, deserialize_with = "present")]
    pub years_of_experience: Option<Option<u32>>,
    /// Years spent at the company.
    #[serde(default, deserialize_with = "present")]
    pub years_at_company: Option<Option<u32>>,
    /// Yearly base salary.
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<Decimal>>,
    /// Yearly bonus.
    #[serde(default, deserialize_with = "present")]
    pub bonus: Option<Option<Decimal>>,
    /// Self-reported gender.
    pub gender: Option<Gender>,
    /// Highest academic level attained.
    pub highest_academic_level_attained: Option<AcademicLevel>,
    /// Company id.
    #[serde(rename = "company")]
    pub company_id: Option<u64>,
    /// Level id.
    #[serde(rename = "level")]
    pub level_id: Option<u64>,
}

impl ContributionPatch {
    /// Applies the present fields to `draft`.
    pub fn apply_to(self, mut draft: NewContribution) -> NewContribution {
        if let Some(job_title) = self.job_title {
            draft.job_title = job_title;
        }
        if let Some(years) = self.years_of_experience {
            draft.years_of_experience = years;
        }
        if let Some(years) = self.years_at_company {
            draft.years_at_company = years;
        }
        if let Some(salary) = self.salary {
            draft.salary = salary;
        }
        if let Some(bonus) = self.bonus {
            draft.bonus = bonus;
        }
        draft.gender = self.gender.unwrap_or(draft.gender);
        draft.highest_academic_level_attained = self
            .highest_academic_level_attained
            .unwrap_or(draft.highest_academic_level_attained);
        draft.company_id = self.company_id.unwrap_or(draft.company_id);
        draft.level_id = self.level_id.unwrap_or(draft.level_id);
        draft
    }
}
