//! Response types for the salary tracker API.
//!
//! This module defines the error response structures, the mapping from
//! [`TrackerError`] to HTTP statuses, and the response shapes that differ
//! from the stored records.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{ContributionRow, format_timestamp};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid query error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }

    /// Creates a not found error response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let message = error.to_string();
        match error {
            TrackerError::ConfigNotFound { .. } | TrackerError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            TrackerError::NotFound { .. } => {
                ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found(message))
            }
            TrackerError::InvalidReference { field, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("'{field}' must refer to an existing record"),
                ),
            ),
            TrackerError::Validation { .. } | TrackerError::InvalidTimestamp { .. } => {
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            TrackerError::InvalidQuery { .. } => {
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::invalid_query(message))
            }
            TrackerError::InvalidPage { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("INVALID_PAGE", message),
            ),
            TrackerError::NoCompanyContext => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "NO_COMPANY_CONTEXT",
                    message,
                    "Narrow the query to at least one existing contribution",
                ),
            ),
            TrackerError::CalculationError { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            ),
        }
    }
}

/// A contribution as rendered by the API.
///
/// `company` is the company's short name. Bonus, gender and education are
/// accepted on input but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionResponse {
    /// Contribution id.
    pub id: u64,
    /// Short name of the company.
    pub company: String,
    /// Job title.
    pub job_title: String,
    /// Total years of professional experience.
    pub years_of_experience: Option<u32>,
    /// Submission time as `MM/DD/YYYY HH:MM:SS`.
    pub datetime_of_contribution: String,
    /// Yearly base salary.
    pub salary: Option<Decimal>,
}

impl From<&ContributionRow> for ContributionResponse {
    fn from(row: &ContributionRow) -> Self {
        let contribution = &row.contribution;
        Self {
            id: contribution.id,
            company: row.company_short_name.clone(),
            job_title: contribution.job_title.clone(),
            years_of_experience: contribution.years_of_experience,
            datetime_of_contribution: format_timestamp(&contribution.datetime_of_contribution),
            salary: contribution.salary,
        }
    }
}

/// Average pay for a filtered set of contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDetail {
    /// The `level` filter, echoed back.
    pub level: Option<String>,
    /// Short name of the company the query was about.
    pub company: Option<String>,
    /// Average salary.
    pub salary: Decimal,
    /// Average bonus.
    pub bonus: Decimal,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}
