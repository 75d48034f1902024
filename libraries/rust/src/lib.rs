//! Tax, fee and discount pricing for embedding hosts.
//!
//! The [`ffi`] module exports `calculate_total_with_fees` and
//! `calculate_discounted_price` with C linkage. Rust callers use [`pricing`]
//! directly, or the checked variants that return a decimal [`prelude::Price`].

/// Exported C ABI
pub mod ffi;

/// Fee schedule configuration
pub mod config;
pub mod errors;
pub mod logger;
pub mod prelude;
pub mod pricing;

pub use errors::{Error, Result};
pub use pricing::{discounted_price, total_with_fees};
