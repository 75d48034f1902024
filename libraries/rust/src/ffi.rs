//! Unmangled C entry points for hosts loading the cdylib or wasm module.

use crate::pricing;

#[no_mangle]
pub extern "C" fn calculate_total_with_fees(
    base_price: f64,
    tax_rate: f64,
    processing_fee: f64,
) -> f64 {
    pricing::total_with_fees(base_price, tax_rate, processing_fee)
}

#[no_mangle]
pub extern "C" fn calculate_discounted_price(original_price: f64, discount_percent: f64) -> f64 {
    pricing::discounted_price(original_price, discount_percent)
}
