//! Aggregate endpoints: salary info, averages, per-title salaries, job
//! titles and company popularity.

use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use tracing::info;
use uuid::Uuid;

use crate::api::response::ContributionDetail;
use crate::api::state::AppState;
use crate::query::ContributionFilter;
use crate::statistics::{
    average_pay, company_context, distinct_job_titles, rank_companies, salaries_by_job_title,
    salary_statistics, split_by_popularity,
};

use super::{HandlerResult, ok, query_params, rejected};

/// Handler for GET /api/contributions/salaryinfo.
///
/// Returns min, max and median salary plus the per-level breakdown of the
/// filtered contributions.
pub(super) async fn salary_info(
    State(state): State<AppState>,
    filter: Result<Query<ContributionFilter>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let filter = query_params(correlation_id, filter)?;

    let start_time = Instant::now();
    let rows = state
        .store()
        .contributions(&filter)
        .map_err(|err| rejected(correlation_id, err))?;
    let statistics = salary_statistics(&rows, state.config().median_policy())
        .map_err(|err| rejected(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        contributions = rows.len(),
        median = %statistics.median,
        duration_us = start_time.elapsed().as_micros(),
        "Salary info computed"
    );
    Ok(ok(statistics))
}

/// Handler for GET /api/contributions/contributiondetail.
///
/// `company` is the short name of the company given by the `company` id,
/// falling back to the `company_name` filter.
pub(super) async fn contribution_detail(
    State(state): State<AppState>,
    filter: Result<Query<ContributionFilter>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let filter = query_params(correlation_id, filter)?;

    let company = match filter.company {
        Some(id) => Some(
            state
                .store()
                .company(id)
                .map_err(|err| rejected(correlation_id, err))?
                .short_name,
        ),
        None => filter.company_name.clone(),
    };
    let rows = state
        .store()
        .contributions(&filter)
        .map_err(|err| rejected(correlation_id, err))?;
    let averages = average_pay(&rows);

    info!(
        correlation_id = %correlation_id,
        contributions = rows.len(),
        "Contribution detail computed"
    );
    Ok(ok(ContributionDetail {
        level: filter.level,
        company,
        salary: averages.salary,
        bonus: averages.bonus,
    }))
}

/// Handler for GET /api/contributions/company.
///
/// The company is the one of the first filtered contribution. Each job title
/// of the filtered set is listed with every salary recorded for it at that
/// company, whatever the other filters say.
pub(super) async fn company_breakdown(
    State(state): State<AppState>,
    filter: Result<Query<ContributionFilter>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let filter = query_params(correlation_id, filter)?;

    let filtered = state
        .store()
        .contributions(&filter)
        .map_err(|err| rejected(correlation_id, err))?;
    let company_id = company_context(&filtered).map_err(|err| rejected(correlation_id, err))?;
    let company_wide = state
        .store()
        .company_contributions(company_id)
        .map_err(|err| rejected(correlation_id, err))?;
    let breakdown = salaries_by_job_title(&filtered, &company_wide)
        .map_err(|err| rejected(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        company_id,
        job_titles = breakdown.len(),
        "Company breakdown computed"
    );
    Ok(ok(breakdown))
}

/// Handler for GET /api/jobs.
pub(super) async fn jobs(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let rows = state
        .store()
        .contributions(&ContributionFilter::default())
        .map_err(|err| rejected(correlation_id, err))?;
    Ok(ok(distinct_job_titles(&rows)))
}

/// Handler for GET /api/companies/popular.
pub(super) async fn popular_companies(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let popularity = state.config().popularity();
    let ranked = rank_companies(state.store().contribution_counts());
    let split = split_by_popularity(ranked, popularity.top, popularity.split);

    info!(
        correlation_id = %correlation_id,
        popular = split.popular.len(),
        unpopular = split.unpopular.len(),
        "Company popularity computed"
    );
    Ok(ok(split))
}
