//! Minimum and maximum salary.

use rust_decimal::Decimal;

use crate::models::ContributionRow;

use super::averages::zero_amount;

/// Lowest recorded salary, or `0.00` when none is recorded.
pub fn min_salary(rows: &[ContributionRow]) -> Decimal {
    rows.iter()
        .filter_map(ContributionRow::salary)
        .min()
        .unwrap_or_else(zero_amount)
}

/// Highest recorded salary, or `0.00` when none is recorded.
pub fn max_salary(rows: &[ContributionRow]) -> Decimal {
    rows.iter()
        .filter_map(ContributionRow::salary)
        .max()
        .unwrap_or_else(zero_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::test_support::row;

    #[test]
    fn test_min_and_max() {
        let rows = vec![
            row(1, "Engineer", "L1", 0, Some(30), None),
            row(2, "Engineer", "L1", 0, Some(10), None),
            row(3, "Engineer", "L1", 0, Some(20), None),
        ];
        assert_eq!(min_salary(&rows), Decimal::from(10));
        assert_eq!(max_salary(&rows), Decimal::from(30));
    }

    #[test]
    fn test_missing_salaries_ignored() {
        let rows = vec![
            row(1, "Engineer", "L1", 0, None, Some(5)),
            row(2, "Engineer", "L1", 0, Some(40), None),
        ];
        assert_eq!(min_salary(&rows), Decimal::from(40));
        assert_eq!(max_salary(&rows), Decimal::from(40));
    }

    #[test]
    fn test_empty_defaults_to_zero() {
        assert_eq!(min_salary(&[]).to_string(), "0.00");
        assert_eq!(max_salary(&[]).to_string(), "0.00");
    }
}
