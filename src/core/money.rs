use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Decimal places carried by every euro amount returned to callers
pub const MONEY_SCALE: u32 = 2;

/// Decimal places carried by occupancy ratios
pub const RATIO_SCALE: u32 = 4;

/// Rounds a full-precision euro amount to cents, half away from zero.
///
/// Calculators call this only on the fields they return, never on
/// intermediate values. The result always carries exactly two decimal
/// places (`84` becomes `84.00`).
pub fn round_money(amount: Decimal) -> Decimal {
    round_to(amount, MONEY_SCALE)
}

/// Rounds a ratio to four decimal places, half away from zero.
pub fn round_ratio(ratio: Decimal) -> Decimal {
    round_to(ratio, RATIO_SCALE)
}

/// Turns the result of a `checked_*` operation into an amount, reporting
/// overflow as a validation error on `field`.
pub fn checked_amount(value: Option<Decimal>, field: &str) -> Result<Decimal> {
    value.ok_or_else(|| AppError::validation(format!("{} is out of range", field)))
}

fn round_to(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}
