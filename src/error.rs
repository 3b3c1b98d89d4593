//! Error types for the salary tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the record store, the statistics functions and the
//! configuration loader can report.

use thiserror::Error;

/// The main error type for the salary tracker.
///
/// # Example
///
/// ```
/// use salary_tracker::error::TrackerError;
///
/// let error = TrackerError::NotFound {
///     entity: "company",
///     id: 7,
/// };
/// assert_eq!(error.to_string(), "company 7 not found");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record with the given id does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of record that was requested.
        entity: &'static str,
        /// The requested id.
        id: u64,
    },

    /// A foreign key does not resolve to an existing record.
    #[error("Invalid reference '{field}': {entity} {id} does not exist")]
    InvalidReference {
        /// The field holding the reference.
        field: &'static str,
        /// The kind of record referenced.
        entity: &'static str,
        /// The referenced id.
        id: u64,
    },

    /// A field failed validation.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A query string parameter could not be interpreted.
    #[error("Invalid query parameter: {message}")]
    InvalidQuery {
        /// A description of the problem.
        message: String,
    },

    /// The requested page lies past the end of the collection.
    #[error("Invalid page {page}: only {pages} page(s) available")]
    InvalidPage {
        /// The requested page number.
        page: usize,
        /// The number of pages available.
        pages: usize,
    },

    /// A company-scoped view was requested over an empty collection.
    #[error("No contributions match the query, so no company can be inferred")]
    NoCompanyContext,

    /// A timestamp did not match the `MM/DD/YYYY HH:MM:SS` format.
    #[error("Invalid timestamp '{value}': expected MM/DD/YYYY HH:MM:SS")]
    InvalidTimestamp {
        /// The offending text.
        value: String,
    },

    /// A statistic could not be computed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl TrackerError {
    /// Shorthand for a [`TrackerError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_not_found_displays_entity_and_id() {
        let error = TrackerError::NotFound {
            entity: "level",
            id: 3,
        };
        assert_eq!(error.to_string(), "level 3 not found");
    }

    #[test]
    fn test_invalid_reference_displays_field() {
        let error = TrackerError::InvalidReference {
            field: "company",
            entity: "company",
            id: 42,
        };
        assert_eq!(
            error.to_string(),
            "Invalid reference 'company': company 42 does not exist"
        );
    }

    #[test]
    fn test_validation_helper() {
        let error = TrackerError::validation("name", "must not be blank");
        assert_eq!(error.to_string(), "Invalid field 'name': must not be blank");
    }

    #[test]
    fn test_invalid_timestamp_displays_value() {
        let error = TrackerError::InvalidTimestamp {
            value: "2024-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timestamp '2024-01-01': expected MM/DD/YYYY HH:MM:SS"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_context() -> TrackerResult<()> {
            Err(TrackerError::NoCompanyContext)
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_no_context()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(TrackerError::NoCompanyContext)
        ));
    }
}
