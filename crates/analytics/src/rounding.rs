//! The single rounding rule used across the library.
//!
//! Values are rounded half away from zero on `Decimal`, so results do not depend on binary
//! floating-point representation or summation order.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every derived percentage.
pub const PERCENT_DP: u32 = 2;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole number, half away from zero, saturating at the `u32` range.
pub fn round_to_u32(value: Decimal) -> u32 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() {
        return 0;
    }
    rounded.to_u32().unwrap_or(u32::MAX)
}
