//! Median salary.
//!
//! For an even number of salaries the reporting UI historically showed
//! `values[mid + 1] + values[mid - 1]`, a sum rather than a mean. The
//! [`MedianPolicy`] chooses between that and the statistical median.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ContributionRow;

use super::averages::zero_amount;

/// How the median of an even-sized collection is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianPolicy {
    /// Mean of the two middle values.
    #[default]
    Average,
    /// `values[mid + 1] + values[mid - 1]` with `mid = len / 2`.
    LegacySum,
}

/// Median of the recorded salaries, or `0.00` when none is recorded.
///
/// Missing salaries are excluded before sorting.
///
/// # Errors
///
/// Under [`MedianPolicy::LegacySum`] a collection of exactly two salaries has
/// no `values[mid + 1]`, which is reported as a `CalculationError`.
pub fn median_salary(rows: &[ContributionRow], policy: MedianPolicy) -> TrackerResult<Decimal> {
    let values: Vec<Decimal> = rows.iter().filter_map(ContributionRow::salary).collect();
    median(values, policy)
}

/// Median of arbitrary values under the given policy.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_tracker::statistics::{median, MedianPolicy};
///
/// let values: Vec<Decimal> = [10, 20, 30, 40].into_iter().map(Decimal::from).collect();
/// assert_eq!(median(values.clone(), MedianPolicy::Average).unwrap(), Decimal::from(25));
/// assert_eq!(median(values, MedianPolicy::LegacySum).unwrap(), Decimal::from(60));
/// ```
pub fn median(mut values: Vec<Decimal>, policy: MedianPolicy) -> TrackerResult<Decimal> {
    if values.is_empty() {
        return Ok(zero_amount());
    }

    values.sort();
    let count = values.len();
    let mid = count / 2;

    if count % 2 == 1 {
        return Ok(values[mid]);
    }

    match policy {
        MedianPolicy::Average => Ok((values[mid - 1] + values[mid]) / Decimal::TWO),
        MedianPolicy::LegacySum => {
            let upper = values
                .get(mid + 1)
                .ok_or_else(|| TrackerError::CalculationError {
                    message: format!(
                        "legacy median needs index {} but only {count} salaries are recorded",
                        mid + 1
                    ),
                })?;
            Ok(*upper + values[mid - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::test_support::row;
    use proptest::prelude::*;

    fn decimals(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    #[test]
    fn test_odd_count_takes_middle_element() {
        assert_eq!(
            median(decimals(&[30, 10, 20]), MedianPolicy::Average).unwrap(),
            Decimal::from(20)
        );
        assert_eq!(
            median(decimals(&[30, 10, 20]), MedianPolicy::LegacySum).unwrap(),
            Decimal::from(20)
        );
    }

    #[test]
    fn test_even_count_average_policy() {
        assert_eq!(
            median(decimals(&[40, 10, 30, 20]), MedianPolicy::Average).unwrap(),
            Decimal::from(25)
        );
    }

    #[test]
    fn test_even_count_legacy_sum_policy() {
        // values[3] + values[1] = 40 + 20
        assert_eq!(
            median(decimals(&[10, 20, 30, 40]), MedianPolicy::LegacySum).unwrap(),
            Decimal::from(60)
        );
    }

    #[test]
    fn test_legacy_sum_with_two_values_errors() {
        let result = median(decimals(&[10, 20]), MedianPolicy::LegacySum);
        assert!(matches!(result, Err(TrackerError::CalculationError { .. })));
    }

    #[test]
    fn test_two_values_average_policy() {
        assert_eq!(
            median(decimals(&[10, 20]), MedianPolicy::Average).unwrap(),
            Decimal::from(15)
        );
    }

    #[test]
    fn test_empty_defaults_to_zero() {
        let value = median(Vec::new(), MedianPolicy::LegacySum).unwrap();
        assert_eq!(value.to_string(), "0.00");
    }

    #[test]
    fn test_missing_salaries_excluded() {
        let rows = vec![
            row(1, "Engineer", "L1", 0, Some(10), None),
            row(2, "Engineer", "L1", 0, None, None),
            row(3, "Engineer", "L1", 0, Some(30), None),
            row(4, "Engineer", "L1", 0, Some(20), None),
        ];
        assert_eq!(
            median_salary(&rows, MedianPolicy::Average).unwrap(),
            Decimal::from(20)
        );
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: MedianPolicy = serde_yaml::from_str("legacy_sum").unwrap();
        assert_eq!(policy, MedianPolicy::LegacySum);
    }

    proptest! {
        #[test]
        fn prop_average_median_within_range(values in prop::collection::vec(0i64..10_000_000, 1..50)) {
            let decimals = decimals(&values);
            let min = decimals.iter().min().copied().unwrap();
            let max = decimals.iter().max().copied().unwrap();
            let median = median(decimals, MedianPolicy::Average).unwrap();
            prop_assert!(min <= median);
            prop_assert!(median <= max);
        }

        #[test]
        fn prop_median_ignores_input_order(mut values in prop::collection::vec(0i64..1_000_000, 1..30)) {
            let forward = median(decimals(&values), MedianPolicy::Average).unwrap();
            values.reverse();
            let backward = median(decimals(&values), MedianPolicy::Average).unwrap();
            prop_assert_eq!(forward, backward);
        }
    }
}
