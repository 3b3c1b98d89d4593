//! Company endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

use crate::api::request::CompanyPatch;
use crate::api::state::AppState;
use crate::models::NewCompany;

use super::{HandlerResult, created, json_body, no_content, ok, record_id, rejected};

/// Handler for GET /api/companies.
pub(super) async fn list(State(state): State<AppState>) -> HandlerResult {
    Ok(ok(state.store().companies()))
}

/// Handler for POST /api/companies.
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let draft = json_body(correlation_id, payload)?;
    let company = state
        .store()
        .create_company(draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        company_id = company.id,
        short_name = %company.short_name,
        "Company created"
    );
    Ok(created(company))
}

/// Handler for GET /api/companies/:id.
pub(super) async fn retrieve(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let company = state
        .store()
        .company(id)
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(company))
}

/// Handler for PUT /api/companies/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let draft = json_body(correlation_id, payload)?;
    let company = state
        .store()
        .update_company(id, draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, company_id = id, "Company updated");
    Ok(ok(company))
}

/// Handler for PATCH /api/companies/:id.
pub(super) async fn partial_update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<CompanyPatch>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let patch = json_body(correlation_id, payload)?;
    let company = state
        .store()
        .modify_company(id, |draft| patch.apply_to(draft))
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, company_id = id, "Company patched");
    Ok(ok(company))
}

/// Handler for DELETE /api/companies/:id.
///
/// Removes the company's levels, compensation bands, contributions and
/// certificates with it.
pub(super) async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let removed = state
        .store()
        .delete_company(id)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        company_id = id,
        levels = removed.levels,
        compensations = removed.compensations,
        contributions = removed.contributions,
        certificates = removed.certificates,
        "Company deleted"
    );
    Ok(no_content())
}
