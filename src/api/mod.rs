//! HTTP API module for the salary tracker.
//!
//! This module provides the REST endpoints for companies, levels,
//! compensation bands, contributions and certificates, plus the salary
//! statistics endpoints. Everything is mounted under `/api`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CertificatePatch, CompanyPatch, CompensationPatch, ContributionPatch, LevelPatch,
};
pub use response::{
    ApiError, ApiErrorResponse, ContributionDetail, ContributionResponse, HealthResponse,
};
pub use state::AppState;
