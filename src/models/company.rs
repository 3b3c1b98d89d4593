//! Company and job level records.

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;

use super::validation::require_text;

/// An employer that contributions and compensation bands are recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned identifier.
    pub id: u64,
    /// Full company name.
    pub name: String,
    /// Abbreviated identifier used for filtering and display.
    pub short_name: String,
    /// Where the company is based.
    pub location: String,
}

/// The writable fields of a [`Company`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    /// Full company name.
    pub name: String,
    /// Abbreviated identifier.
    pub short_name: String,
    /// Where the company is based.
    pub location: String,
}

impl NewCompany {
    /// Checks that every text field is present.
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("name", &self.name)?;
        require_text("short_name", &self.short_name)?;
        require_text("location", &self.location)
    }

    pub(crate) fn into_record(self, id: u64) -> Company {
        Company {
            id,
            name: self.name,
            short_name: self.short_name,
            location: self.location,
        }
    }
}

impl From<&Company> for NewCompany {
    fn from(company: &Company) -> Self {
        NewCompany {
            name: company.name.clone(),
            short_name: company.short_name.clone(),
            location: company.location.clone(),
        }
    }
}

/// A company-specific seniority tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display name, e.g. "L4" or "Senior".
    pub name: String,
    /// Position of the level when listing or aggregating, lowest first.
    pub order: u32,
    /// Owning company.
    #[serde(rename = "company")]
    pub company_id: u64,
}

/// The writable fields of a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLevel {
    /// Display name.
    pub name: String,
    /// Sort position.
    pub order: u32,
    /// Owning company.
    #[serde(rename = "company")]
    pub company_id: u64,
}

impl NewLevel {
    /// Checks the level name.
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("name", &self.name)
    }

    pub(crate) fn into_record(self, id: u64) -> Level {
        Level {
            id,
            name: self.name,
            order: self.order,
            company_id: self.company_id,
        }
    }
}

impl From<&Level> for NewLevel {
    fn from(level: &Level) -> Self {
        NewLevel {
            name: level.name.clone(),
            order: level.order,
            company_id: level.company_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_requires_short_name() {
        let company = NewCompany {
            name: "Acme Corporation".to_string(),
            short_name: "".to_string(),
            location: "Manila".to_string(),
        };
        let err = company.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid field 'short_name': must not be blank"
        );
    }

    #[test]
    fn test_level_serializes_company_as_id() {
        let level = Level {
            id: 2,
            name: "Senior".to_string(),
            order: 3,
            company_id: 9,
        };
        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(json["company"], 9);
        assert!(json.get("company_id").is_none());
    }

    #[test]
    fn test_new_level_reads_company_field() {
        let json = r#"{"name": "Junior", "order": 0, "company": 4}"#;
        let level: NewLevel = serde_json::from_str(json).unwrap();
        assert_eq!(level.company_id, 4);
        assert_eq!(level.into_record(11).id, 11);
    }

    #[test]
    fn test_level_order_must_be_non_negative() {
        let json = r#"{"name": "Junior", "order": -1, "company": 4}"#;
        assert!(serde_json::from_str::<NewLevel>(json).is_err());
    }
}
