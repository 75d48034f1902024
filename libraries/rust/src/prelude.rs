use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Percentage rate, `10.0` meaning 10%.
pub type Rate = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        // every Decimal fits in an f64, losing precision at worst
        f64::try_from(self.0).unwrap_or(f64::NAN)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl TryFrom<f64> for Price {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            tracing::debug!(value, "price is not finite");
            return Err(Error::NonFinite(value));
        }

        Decimal::try_from(value).map(Self).map_err(|err| {
            tracing::debug!(value, %err, "price outside decimal range");
            Error::OutOfRange(value)
        })
    }
}
