//! HTTP request handlers for the salary tracker API.
//!
//! Every handler tags its log lines with a fresh correlation id. Extractor
//! rejections are caught and mapped to the API error body instead of axum's
//! plain-text defaults.

mod certificates;
mod companies;
mod compensations;
mod contributions;
mod levels;
mod statistics;

use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::error::TrackerError;

use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// What every handler returns.
type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/companies", get(companies::list).post(companies::create))
        .route("/companies/popular", get(statistics::popular_companies))
        .route(
            "/companies/:id",
            get(companies::retrieve)
                .put(companies::update)
                .patch(companies::partial_update)
                .delete(companies::destroy),
        )
        .route("/levels", get(levels::list).post(levels::create))
        .route(
            "/levels/:id",
            get(levels::retrieve)
                .put(levels::update)
                .patch(levels::partial_update)
                .delete(levels::destroy),
        )
        .route(
            "/compensations",
            get(compensations::list).post(compensations::create),
        )
        .route(
            "/compensations/:id",
            get(compensations::retrieve)
                .put(compensations::update)
                .patch(compensations::partial_update)
                .delete(compensations::destroy),
        )
        .route(
            "/contributions",
            get(contributions::list).post(contributions::create),
        )
        .route("/contributions/salaryinfo", get(statistics::salary_info))
        .route(
            "/contributions/contributiondetail",
            get(statistics::contribution_detail),
        )
        .route("/contributions/company", get(statistics::company_breakdown))
        .route(
            "/contributions/:id",
            get(contributions::retrieve)
                .put(contributions::update)
                .patch(contributions::partial_update)
                .delete(contributions::destroy),
        )
        .route(
            "/certificates",
            get(certificates::list).post(certificates::create),
        )
        .route(
            "/certificates/:id",
            get(certificates::retrieve)
                .put(certificates::update)
                .patch(certificates::partial_update)
                .delete(certificates::destroy),
        )
        .route("/jobs", get(statistics::jobs))
        .route("/health", get(health));

    Router::new().nest("/api", api).with_state(state)
}

/// Handler for GET /api/health.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unwraps a JSON body or maps the rejection to an API error.
fn json_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Field-level serde failures are validation errors.
            if ["missing field", "invalid value", "unknown variant"]
                .iter()
                .any(|marker| body_text.contains(marker))
            {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}

/// Unwraps query parameters or maps the rejection to `INVALID_QUERY`.
fn query_params<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiErrorResponse> {
    query.map(|Query(params)| params).map_err(|rejection| {
        let message = rejection.body_text();
        rejected(correlation_id, TrackerError::InvalidQuery { message })
    })
}

/// Unwraps a numeric path id.
///
/// A non-numeric id cannot name a record, so it is reported as not found.
fn record_id(
    correlation_id: Uuid,
    path: Result<Path<u64>, PathRejection>,
) -> Result<u64, ApiErrorResponse> {
    path.map(|Path(id)| id).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Path id rejected"
        );
        ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::not_found("No record exists at this path"),
        )
    })
}

/// Logs a failed operation and converts the error.
fn rejected(correlation_id: Uuid, error: TrackerError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn created<T: Serialize>(body: T) -> Response {
    (StatusCode::CREATED, Json(body)).into_response()
}

fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
