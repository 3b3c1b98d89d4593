//! Field checks shared by the record drafts.

use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};

/// Digits allowed after the decimal point in money fields.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Total significant digits allowed in money fields.
pub const MONEY_MAX_DIGITS: u32 = 9;

/// Rejects blank text.
pub fn require_text(field: &str, value: &str) -> TrackerResult<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::validation(field, "must not be blank"));
    }
    Ok(())
}

/// Rejects negative amounts and amounts that do not fit `9` digits with `2`
/// decimal places.
pub fn check_money(field: &str, value: Decimal) -> TrackerResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(TrackerError::validation(field, "must not be negative"));
    }

    let normalized = value.normalize();
    if normalized.scale() > MONEY_DECIMAL_PLACES {
        return Err(TrackerError::validation(
            field,
            format!("must have at most {MONEY_DECIMAL_PLACES} decimal places"),
        ));
    }

    let whole_digits_allowed = MONEY_MAX_DIGITS - MONEY_DECIMAL_PLACES;
    let limit = Decimal::from(10_i64.pow(whole_digits_allowed));
    if normalized >= limit {
        return Err(TrackerError::validation(
            field,
            format!("must have at most {MONEY_MAX_DIGITS} digits in total"),
        ));
    }

    Ok(())
}

/// Applies [`check_money`] when a value is present.
pub fn check_optional_money(field: &str, value: Option<Decimal>) -> TrackerResult<()> {
    value.map_or(Ok(()), |value| check_money(field, value))
}
