//! Certificate endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
};
use tracing::info;
use uuid::Uuid;

use crate::api::request::CertificatePatch;
use crate::api::state::AppState;
use crate::models::NewCertificate;
use crate::query::CompensationScope;

use super::{
    HandlerResult, created, json_body, no_content, ok, query_params, record_id, rejected,
};

/// Handler for GET /api/certificates, optionally narrowed by
/// `?compensation=`.
pub(super) async fn list(
    State(state): State<AppState>,
    query: Result<Query<CompensationScope>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let scope = query_params(correlation_id, query)?;
    Ok(ok(state.store().certificates(scope)))
}

/// Handler for POST /api/certificates.
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCertificate>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let draft = json_body(correlation_id, payload)?;
    let certificate = state
        .store()
        .create_certificate(draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        certificate_id = certificate.id,
        compensation_id = certificate.compensation_id,
        "Certificate created"
    );
    Ok(created(certificate))
}

/// Handler for GET /api/certificates/:id.
pub(super) async fn retrieve(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let certificate = state
        .store()
        .certificate(id)
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(certificate))
}

/// Handler for PUT /api/certificates/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewCertificate>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let draft = json_body(correlation_id, payload)?;
    let certificate = state
        .store()
        .update_certificate(id, draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, certificate_id = id, "Certificate updated");
    Ok(ok(certificate))
}

/// Handler for PATCH /api/certificates/:id.
pub(super) async fn partial_update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<CertificatePatch>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let patch = json_body(correlation_id, payload)?;
    let certificate = state
        .store()
        .modify_certificate(id, |draft| patch.apply_to(draft))
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, certificate_id = id, "Certificate patched");
    Ok(ok(certificate))
}

/// Handler for DELETE /api/certificates/:id.
pub(super) async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    state
        .store()
        .delete_certificate(id)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, certificate_id = id, "Certificate deleted");
    Ok(no_content())
}
