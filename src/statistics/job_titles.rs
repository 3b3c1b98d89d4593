//! Job title listings.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::ContributionRow;

/// Salaries recorded for one job title at one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitleSalaries {
    /// The job title.
    pub job_title: String,
    /// Every salary recorded for the title at the company.
    pub salaries: Vec<Decimal>,
}

/// The company a filtered collection belongs to, taken from its first row.
pub fn company_context(filtered: &[ContributionRow]) -> TrackerResult<u64> {
    filtered
        .first()
        .map(|row| row.contribution.company_id)
        .ok_or(TrackerError::NoCompanyContext)
}

/// Lists the salaries of each job title present in `filtered`.
///
/// The company is the one of the first filtered row. Titles come from the
/// filtered rows in alphabetical order, while the salaries for each title
/// are gathered from `company_wide`, which should hold every contribution of
/// that company regardless of the filter. Missing salaries are skipped.
///
/// # Errors
///
/// Returns [`TrackerError::NoCompanyContext`] when `filtered` is empty.
pub fn salaries_by_job_title(
    filtered: &[ContributionRow],
    company_wide: &[ContributionRow],
) -> TrackerResult<Vec<JobTitleSalaries>> {
    let company_id = company_context(filtered)?;

    let titles: BTreeSet<&str> = filtered
        .iter()
        .map(|row| row.contribution.job_title.as_str())
        .collect();

    Ok(titles
        .into_iter()
        .map(|title| JobTitleSalaries {
            job_title: title.to_string(),
            salaries: company_wide
                .iter()
                .filter(|row| {
                    row.contribution.company_id == company_id
                        && row.contribution.job_title == title
                })
                .filter_map(ContributionRow::salary)
                .collect(),
        })
        .collect())
}

/// Distinct job titles across the given contributions, sorted.
pub fn distinct_job_titles(rows: &[ContributionRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.contribution.job_title.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
