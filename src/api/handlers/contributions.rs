//! Contribution endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
};
use tracing::info;
use uuid::Uuid;

use crate::api::request::ContributionPatch;
use crate::api::response::ContributionResponse;
use crate::api::state::AppState;
use crate::models::NewContribution;
use crate::query::{ContributionFilter, PageRequest, paginate};

use super::{
    HandlerResult, created, json_body, no_content, ok, query_params, record_id, rejected,
};

/// Handler for GET /api/contributions.
///
/// Accepts the contribution filters plus `page` and `page_size`, and returns
/// one page of contributions, most recent first.
pub(super) async fn list(
    State(state): State<AppState>,
    filter: Result<Query<ContributionFilter>, QueryRejection>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let filter = query_params(correlation_id, filter)?;
    let page = query_params(correlation_id, page)?;

    let rows = state
        .store()
        .contributions(&filter)
        .map_err(|err| rejected(correlation_id, err))?;
    let responses: Vec<ContributionResponse> =
        rows.iter().map(ContributionResponse::from).collect();
    let page = paginate(responses, page, state.config().pagination())
        .map_err(|err| rejected(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        count = page.count,
        page = page.page,
        "Contributions listed"
    );
    Ok(ok(page))
}

/// Handler for POST /api/contributions.
///
/// The submission time is assigned here; a `datetime_of_contribution` in the
/// body is ignored.
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewContribution>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let draft = json_body(correlation_id, payload)?;
    let row = state
        .store()
        .create_contribution(draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        contribution_id = row.contribution.id,
        company = %row.company_short_name,
        level = %row.level_name,
        "Contribution created"
    );
    Ok(created(ContributionResponse::from(&row)))
}

/// Handler for GET /api/contributions/:id.
pub(super) async fn retrieve(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let row = state
        .store()
        .contribution(id)
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(ContributionResponse::from(&row)))
}

/// Handler for PUT /api/contributions/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewContribution>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let draft = json_body(correlation_id, payload)?;
    let row = state
        .store()
        .update_contribution(id, draft)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, contribution_id = id, "Contribution updated");
    Ok(ok(ContributionResponse::from(&row)))
}

/// Handler for PATCH /api/contributions/:id.
pub(super) async fn partial_update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ContributionPatch>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    let patch = json_body(correlation_id, payload)?;
    let row = state
        .store()
        .modify_contribution(id, |draft| patch.apply_to(draft))
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, contribution_id = id, "Contribution patched");
    Ok(ok(ContributionResponse::from(&row)))
}

/// Handler for DELETE /api/contributions/:id.
pub(super) async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    state
        .store()
        .delete_contribution(id)
        .map_err(|err| rejected(correlation_id, err))?;
    info!(correlation_id = %correlation_id, contribution_id = id, "Contribution deleted");
    Ok(no_content())
}
