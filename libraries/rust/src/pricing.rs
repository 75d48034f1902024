use crate::errors::Result;
use crate::prelude::{Price, Rate};

const PERCENT: f64 = 100.0;
const CENTS: f64 = 100.0;

/// Round to the nearest hundredth, ties away from zero.
fn round_to_cents(value: f64) -> f64 {
    (value * CENTS).round() / CENTS
}

/// Base price plus tax and processing fee, rounded to cents.
///
/// Rates are percentages (`8.5` means 8.5%). Nothing is validated: negative
/// rates lower the total and non-finite inputs propagate into the result.
pub fn total_with_fees(
    base_price: f64,
    tax_rate_percent: Rate,
    processing_fee_percent: Rate,
) -> f64 {
    let tax = base_price * (tax_rate_percent / PERCENT);
    let fee = base_price * (processing_fee_percent / PERCENT);

    round_to_cents(base_price + tax + fee)
}

/// Price after a percentage discount.
///
/// A discount at or below zero returns `original_price` as-is, without
/// rounding. A discount of 100% or more returns exactly `0.0`. Anything in
/// between (including a `NaN` discount) is computed and rounded to cents.
pub fn discounted_price(original_price: f64, discount_percent: Rate) -> f64 {
    if discount_percent <= 0.0 {
        return original_price;
    }
    if discount_percent >= PERCENT {
        return 0.0;
    }

    let discount = original_price * (discount_percent / PERCENT);
    round_to_cents(original_price - discount)
}

pub fn checked_total_with_fees(
    base_price: f64,
    tax_rate_percent: Rate,
    processing_fee_percent: Rate,
) -> Result<Price> {
    Price::try_from(total_with_fees(
        base_price,
        tax_rate_percent,
        processing_fee_percent,
    ))
}

pub fn checked_discounted_price(original_price: f64, discount_percent: Rate) -> Result<Price> {
    Price::try_from(discounted_price(original_price, discount_percent))
}
