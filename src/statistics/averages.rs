//! Null-skipping averages.
//!
//! Missing salaries and bonuses are excluded from every average, the same
//! way a SQL `AVG` ignores `NULL`s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContributionRow;

/// Decimal places kept in reported averages.
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// The value reported when there is nothing to aggregate: `0.00`.
pub fn zero_amount() -> Decimal {
    Decimal::new(0, 2)
}

/// Averages the present values, or `None` if there are none.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_tracker::statistics::average;
///
/// let values = [Some(Decimal::from(10)), None, Some(Decimal::from(20))];
/// assert_eq!(average(values), Some(Decimal::from(15)));
/// assert_eq!(average([None::<Decimal>]), None);
/// ```
pub fn average<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((Decimal::ZERO, 0_i64), |(sum, count), value| {
            (sum + value, count + 1)
        });

    if count == 0 {
        return None;
    }
    Some((sum / Decimal::from(count)).round_dp(AVERAGE_DECIMAL_PLACES))
}

/// Average salary and bonus over a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AveragePay {
    /// Average salary, `0.00` when no salary is recorded.
    pub salary: Decimal,
    /// Average bonus, `0.00` when no bonus is recorded.
    pub bonus: Decimal,
}

/// Computes the average salary and bonus of the given contributions.
pub fn average_pay(rows: &[ContributionRow]) -> AveragePay {
    AveragePay {
        salary: average(rows.iter().map(ContributionRow::salary)).unwrap_or_else(zero_amount),
        bonus: average(rows.iter().map(ContributionRow::bonus)).unwrap_or_else(zero_amount),
    }
}
