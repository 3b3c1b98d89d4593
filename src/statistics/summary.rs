//! Salary statistics for a filtered contribution collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::ContributionRow;

use super::level_breakdown::{LevelSummary, by_level};
use super::median::{MedianPolicy, median_salary};
use super::salary_range::{max_salary, min_salary};

/// Range, median and per-level breakdown of a collection's salaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStatistics {
    /// Lowest salary.
    pub min: Decimal,
    /// Highest salary.
    pub max: Decimal,
    /// Median salary under the configured policy.
    pub median: Decimal,
    /// Per-level summaries ordered by level order.
    pub info: Vec<LevelSummary>,
}

/// Computes every salary statistic for the given contributions.
///
/// An empty collection yields zeroes and no levels.
pub fn salary_statistics(
    rows: &[ContributionRow],
    policy: MedianPolicy,
) -> TrackerResult<SalaryStatistics> {
    Ok(SalaryStatistics {
        min: min_salary(rows),
        max: max_salary(rows),
        median: median_salary(rows, policy)?,
        info: by_level(rows),
    })
}
