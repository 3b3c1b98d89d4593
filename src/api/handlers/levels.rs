//! Level endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
};
use tracing::info;
use uuid::Uuid;

use crate::api::request::LevelPatch;
use crate::api::state::AppState;
use crate::models::NewLevel;
use crate::query::CompanyScope;

use super::{
    HandlerResult, created, json_body, no_content, ok, query_params, record_id, rejected,
};

/// Handler for GET /api/levels, optionally narrowed by `?company=`.
pub(super) async fn list(
    State(state): State<AppState>,
    query: Result<Query<CompanyScope>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let scope = query_params(correlation_id, query)?;
    Ok(ok(state.store().levels(scope)))
}

/// Handler for POST /api/levels.
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewLevel>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let draft = json_body(correlation_id, payload)?;
    let level = state
        .store()
        .create_level(draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        level_id = level.id,
        company_id = level.company_id,
        "Level created"
    );
    Ok(created(level))
}

/// Handler for GET /api/levels/:id.
pub(super) async fn retrieve(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let level = state
        .store()
        .level(id)
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(level))
}

/// Handler for PUT /api/levels/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewLevel>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let draft = json_body(correlation_id, payload)?;
    let level = state
        .store()
        .update_level(id, draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, level_id = id, "Level updated");
    Ok(ok(level))
}

/// Handler for PATCH /api/levels/:id.
pub(super) async fn partial_update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LevelPatch>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let patch = json_body(correlation_id, payload)?;
    let level = state
        .store()
        .modify_level(id, |draft| patch.apply_to(draft))
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, level_id = id, "Level patched");
    Ok(ok(level))
}

/// Handler for DELETE /api/levels/:id.
pub(super) async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let removed = state
        .store()
        .delete_level(id)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        level_id = id,
        compensations = removed.compensations,
        contributions = removed.contributions,
        "Level deleted"
    );
    Ok(no_content())
}
