use serde::{Deserialize, Serialize};

use crate::utils::errors::{AtlasError, Result};

use super::enums::Frequency;

/// # InterestRate
/// An annual rate compounded at a fixed frequency. Periods are counted from 0,
/// so the cash flow of period 0 is not discounted.
///
/// ## Example
/// ```
/// use npvatlas::prelude::*;
/// let rate = InterestRate::new(0.08, Frequency::Monthly);
/// assert_eq!(rate.rate(), 0.08);
/// assert_eq!(rate.frequency(), Frequency::Monthly);
/// assert_eq!(rate.discount_factor(0), 1.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InterestRate {
    rate: f64,
    frequency: Frequency,
}

impl InterestRate {
    pub fn new(rate: f64, frequency: Frequency) -> InterestRate {
        InterestRate { rate, frequency }
    }

    /// Builds a rate and checks that its compound factor stays positive.
    pub fn try_new(rate: f64, frequency: Frequency) -> Result<InterestRate> {
        if !rate.is_finite() {
            return Err(AtlasError::InvalidValueErr(format!(
                "Rate must be finite, got {}",
                rate
            )));
        }
        let ir = InterestRate::new(rate, frequency);
        if 1.0 + ir.periodic_rate() <= 0.0 {
            return Err(AtlasError::InvalidValueErr(format!(
                "Rate {} gives a non-positive compound base",
                rate
            )));
        }
        Ok(ir)
    }

    pub fn rate(&self) -> f64 {
        return self.rate;
    }

    pub fn frequency(&self) -> Frequency {
        return self.frequency;
    }

    pub fn periodic_rate(&self) -> f64 {
        return self.rate / self.frequency.periods_per_year();
    }

    pub fn compound_factor(&self, periods: usize) -> f64 {
        return (1.0 + self.periodic_rate()).powf(periods as f64);
    }

    pub fn discount_factor(&self, periods: usize) -> f64 {
        return (1.0 + self.periodic_rate()).powf(-(periods as f64));
    }

    pub fn discount_factors(&self, periods: &[usize]) -> Vec<f64> {
        periods.iter().map(|p| self.discount_factor(*p)).collect()
    }
}
