//! Aggregate statistics over contributions.
//!
//! This module contains the salary range, median, per-level breakdown,
//! per-job-title listing, average pay and company popularity computations.
//! Every function works on already-filtered [`ContributionRow`]s and skips
//! missing salaries and bonuses.
//!
//! [`ContributionRow`]: crate::models::ContributionRow

mod averages;
mod job_titles;
mod level_breakdown;
mod median;
mod popularity;
mod salary_range;
mod summary;

pub use averages::{AVERAGE_DECIMAL_PLACES, AveragePay, average, average_pay, zero_amount};
pub use job_titles::{
    JobTitleSalaries, company_context, distinct_job_titles, salaries_by_job_title,
};
pub use level_breakdown::{LevelSummary, by_level};
pub use median::{MedianPolicy, median, median_salary};
pub use popularity::{
    CompanyPopularity, PopularitySplit, SplitPolicy, rank_companies, split_by_popularity,
};
pub use salary_range::{max_salary, min_salary};
pub use summary::{SalaryStatistics, salary_statistics};
