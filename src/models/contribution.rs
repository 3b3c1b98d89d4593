//! User-submitted salary contributions.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;

use super::choices::{AcademicLevel, Gender};
use super::validation::{check_optional_money, require_text};

/// A single salary data point submitted by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// Store-assigned identifier.
    pub id: u64,
    /// Job title as entered by the contributor.
    pub job_title: String,
    /// Total years of professional experience.
    pub years_of_experience: Option<u32>,
    /// Years spent at the company.
    pub years_at_company: Option<u32>,
    /// Yearly base salary.
    pub salary: Option<Decimal>,
    /// Yearly bonus.
    pub bonus: Option<Decimal>,
    /// Self-reported gender.
    pub gender: Gender,
    /// Highest academic level attained.
    pub highest_academic_level_attained: AcademicLevel,
    /// When the contribution was submitted. Written once at creation.
    pub datetime_of_contribution: NaiveDateTime,
    /// Company the salary was earned at.
    pub company_id: u64,
    /// Level held at that company.
    pub level_id: u64,
}

/// The writable fields of a [`Contribution`].
///
/// The submission timestamp is not part of the draft: the store assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContribution {
    /// Job title.
    pub job_title: String,
    /// Total years of professional experience.
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    /// Years spent at the company.
    #[serde(default)]
    pub years_at_company: Option<u32>,
    /// Yearly base salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Yearly bonus.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Self-reported gender.
    pub gender: Gender,
    /// Highest academic level attained.
    pub highest_academic_level_attained: AcademicLevel,
    /// Company id.
    #[serde(rename = "company")]
    pub company_id: u64,
    /// Level id.
    #[serde(rename = "level")]
    pub level_id: u64,
}

impl NewContribution {
    /// Checks the job title and money amounts.
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("job_title", &self.job_title)?;
        check_optional_money("salary", self.salary)?;
        check_optional_money("bonus", self.bonus)
    }

    pub(crate) fn into_record(self, id: u64, submitted_at: NaiveDateTime) -> Contribution {
        Contribution {
            id,
            job_title: self.job_title,
            years_of_experience: self.years_of_experience,
            years_at_company: self.years_at_company,
            salary: self.salary,
            bonus: self.bonus,
            gender: self.gender,
            highest_academic_level_attained: self.highest_academic_level_attained,
            datetime_of_contribution: submitted_at,
            company_id: self.company_id,
            level_id: self.level_id,
        }
    }
}

impl From<&Contribution> for NewContribution {
    fn from(contribution: &Contribution) -> Self {
        NewContribution {
            job_title: contribution.job_title.clone(),
            years_of_experience: contribution.years_of_experience,
            years_at_company: contribution.years_at_company,
            salary: contribution.salary,
            bonus: contribution.bonus,
            gender: contribution.gender,
            highest_academic_level_attained: contribution.highest_academic_level_attained,
            company_id: contribution.company_id,
            level_id: contribution.level_id,
        }
    }
}

/// A contribution joined with the company and level it references.
///
/// This is the shape the filters and statistics operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRow {
    /// The contribution itself.
    pub contribution: Contribution,
    /// Short name of the referenced company.
    pub company_short_name: String,
    /// Name of the referenced level.
    pub level_name: String,
    /// Sort position of the referenced level.
    pub level_order: u32,
}

impl ContributionRow {
    /// The contribution's salary, if recorded.
    pub fn salary(&self) -> Option<Decimal> {
        self.contribution.salary
    }

    /// The contribution's bonus, if recorded.
    pub fn bonus(&self) -> Option<Decimal> {
        self.contribution.bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_minimal_contribution() {
        let json = r#"{
            "job_title": "Software Engineer",
            "gender": "F",
            "highest_academic_level_attained": "B",
            "company": 1,
            "level": 2
        }"#;

        let draft: NewContribution = serde_json::from_str(json).unwrap();
        assert_eq!(draft.job_title, "Software Engineer");
        assert_eq!(draft.gender, Gender::Female);
        assert!(draft.salary.is_none());
        assert!(draft.years_of_experience.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_negative_years_rejected() {
        let json = r#"{
            "job_title": "Analyst",
            "years_of_experience": -2,
            "gender": "M",
            "highest_academic_level_attained": "N",
            "company": 1,
            "level": 1
        }"#;
        assert!(serde_json::from_str::<NewContribution>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let draft = NewContribution {
            job_title: "".to_string(),
            years_of_experience: None,
            years_at_company: None,
            salary: None,
            bonus: None,
            gender: Gender::Other,
            highest_academic_level_attained: AcademicLevel::Doctorate,
            company_id: 1,
            level_id: 1,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_from_record_keeps_fields() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let draft = NewContribution {
            job_title: "QA".to_string(),
            years_of_experience: Some(3),
            years_at_company: Some(1),
            salary: Some(Decimal::from(50_000)),
            bonus: None,
            gender: Gender::Male,
            highest_academic_level_attained: AcademicLevel::HighSchool,
            company_id: 7,
            level_id: 8,
        };
        let record = draft.clone().into_record(3, at);
        assert_eq!(record.datetime_of_contribution, at);
        assert_eq!(NewContribution::from(&record), draft);
    }
}
