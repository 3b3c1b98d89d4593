//! Compensation band endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
};
use tracing::info;
use uuid::Uuid;

use crate::api::request::CompensationPatch;
use crate::api::state::AppState;
use crate::models::NewCompensation;
use crate::query::CompanyScope;

use super::{
    HandlerResult, created, json_body, no_content, ok, query_params, record_id, rejected,
};

/// Handler for GET /api/compensations, optionally narrowed by `?company=`.
pub(super) async fn list(
    State(state): State<AppState>,
    query: Result<Query<CompanyScope>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let scope = query_params(correlation_id, query)?;
    Ok(ok(state.store().compensations(scope)))
}

/// Handler for POST /api/compensations.
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCompensation>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let draft = json_body(correlation_id, payload)?;
    let compensation = state
        .store()
        .create_compensation(draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        compensation_id = compensation.id,
        salary = %compensation.salary,
        "Compensation created"
    );
    Ok(created(compensation))
}

/// Handler for GET /api/compensations/:id.
pub(super) async fn retrieve(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let compensation = state
        .store()
        .compensation(id)
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(compensation))
}

/// Handler for PUT /api/compensations/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewCompensation>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let draft = json_body(correlation_id, payload)?;
    let compensation = state
        .store()
        .update_compensation(id, draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, compensation_id = id, "Compensation updated");
    Ok(ok(compensation))
}

/// Handler for PATCH /api/compensations/:id.
pub(super) async fn partial_update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<CompensationPatch>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let patch = json_body(correlation_id, payload)?;
    let compensation = state
        .store()
        .modify_compensation(id, |draft| patch.apply_to(draft))
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, compensation_id = id, "Compensation patched");
    Ok(ok(compensation))
}

/// Handler for DELETE /api/compensations/:id.
pub(super) async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let removed = state
        .store()
        .delete_compensation(id)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        compensation_id = id,
        certificates = removed.certificates,
        "Compensation deleted"
    );
    Ok(no_content())
}
