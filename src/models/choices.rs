//! Fixed enumerations attached to contributions.
//!
//! Both enums travel as the single-letter codes stored by the reporting UI,
//! and additionally accept their human-readable labels on input.

use serde::{Deserialize, Serialize};

/// Self-reported gender of a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "M", alias = "Male")]
    Male,
    /// Female.
    #[serde(rename = "F", alias = "Female")]
    Female,
    /// Any other answer.
    #[serde(rename = "O", alias = "Other", alias = "Others")]
    Other,
}

impl Gender {
    /// The human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Others",
        }
    }
}

/// Highest academic level a contributor has attained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicLevel {
    /// No formal schooling.
    #[serde(rename = "N", alias = "None")]
    None,
    /// Grade school.
    #[serde(rename = "G", alias = "Grade School")]
    GradeSchool,
    /// High school.
    #[serde(rename = "H", alias = "High School")]
    HighSchool,
    /// Associate degree.
    #[serde(rename = "A", alias = "Associate", alias = "Associate Degree")]
    Associate,
    /// Bachelor's degree.
    #[serde(rename = "B", alias = "Bachelor's", alias = "Bachelor's Degree")]
    Bachelors,
    /// Master's degree.
    #[serde(rename = "M", alias = "Master's", alias = "Master's Degree")]
    Masters,
    /// Doctorate.
    #[serde(rename = "D", alias = "Doctorate")]
    Doctorate,
}

impl AcademicLevel {
    /// The human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            AcademicLevel::None => "None",
            AcademicLevel::GradeSchool => "Grade School",
            AcademicLevel::HighSchool => "High School",
            AcademicLevel::Associate => "Associate Degree",
            AcademicLevel::Bachelors => "Bachelor's Degree",
            AcademicLevel::Masters => "Master's Degree",
            AcademicLevel::Doctorate => "Doctorate",
        }
    }
}
