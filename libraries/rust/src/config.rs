use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::pricing;
use crate::prelude::{Price, Rate};

/// Tax and processing fee rates applied on top of a base price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeSchedule {
    pub tax_rate_percent: Rate,
    pub processing_fee_percent: Rate,
}

impl FeeSchedule {
    pub fn new(tax_rate_percent: Rate, processing_fee_percent: Rate) -> Self {
        Self {
            tax_rate_percent,
            processing_fee_percent,
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let schedule: FeeSchedule = serde_json::from_str(input)?;

        tracing::debug!(
            tax_rate_percent = schedule.tax_rate_percent,
            processing_fee_percent = schedule.processing_fee_percent,
            "loaded fee schedule"
        );

        Ok(schedule)
    }

    pub fn total(&self, base_price: f64) -> f64 {
        pricing::total_with_fees(
            base_price,
            self.tax_rate_percent,
            self.processing_fee_percent,
        )
    }

    pub fn checked_total(&self, base_price: f64) -> Result<Price> {
        pricing::checked_total_with_fees(
            base_price,
            self.tax_rate_percent,
            self.processing_fee_percent,
        )
    }
}
