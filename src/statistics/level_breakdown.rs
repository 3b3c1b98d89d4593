//! Per-level contribution summaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContributionRow;

use super::averages::average;

/// Aggregates for the contributions recorded at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    /// Level name.
    pub level: String,
    /// Average recorded salary, `None` if no salary is recorded.
    pub salary: Option<Decimal>,
    /// Average recorded bonus, `None` if no bonus is recorded.
    pub bonus: Option<Decimal>,
    /// Number of contributions at the level.
    pub contributions: usize,
}

/// Groups contributions by level and summarises each group.
///
/// Groups are ordered by the level's `order` field, then by name, never by
/// input position.
///
/// # Examples
///
/// ```
/// use salary_tracker::statistics::by_level;
///
/// assert!(by_level(&[]).is_empty());
/// ```
pub fn by_level(rows: &[ContributionRow]) -> Vec<LevelSummary> {
    let mut groups: BTreeMap<(u32, &str), Vec<&ContributionRow>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.level_order, row.level_name.as_str()))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .map(|((_, level), members)| LevelSummary {
            level: level.to_string(),
            salary: average(members.iter().map(|row| row.salary())),
            bonus: average(members.iter().map(|row| row.bonus())),
            contributions: members.len(),
        })
        .collect()
}
