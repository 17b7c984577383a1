use serde::{Deserialize, Serialize};

use crate::models::salaried::BONUS_YEARS;
use crate::rates::{enums::Frequency, interestrate::InterestRate};
use crate::utils::errors::{AtlasError, Result};

pub const N_SIMULATIONS: usize = 10_000;
pub const N_MONTHS: usize = 60;
pub const ANNUAL_DISCOUNT_RATE: f64 = 0.08;
pub const DEFAULT_SEED: u64 = 42;

/// # SimulationConfig
/// Run-level settings. Scenario parameters are fixed in the simulators.
///
/// ## Example
/// ```
/// use npvatlas::prelude::*;
/// let config = SimulationConfig::default().with_seed(7).with_simulations(100);
/// assert_eq!(config.seed(), 7);
/// assert_eq!(config.n_simulations(), 100);
/// assert_eq!(config.n_months(), 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    n_simulations: usize,
    n_months: usize,
    annual_discount_rate: f64,
    seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_simulations: N_SIMULATIONS,
            n_months: N_MONTHS,
            annual_discount_rate: ANNUAL_DISCOUNT_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        n_simulations: usize,
        n_months: usize,
        annual_discount_rate: f64,
        seed: u64,
    ) -> Self {
        SimulationConfig {
            n_simulations,
            n_months,
            annual_discount_rate,
            seed,
        }
    }

    pub fn with_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = n_simulations;
        self
    }

    pub fn with_months(mut self, n_months: usize) -> Self {
        self.n_months = n_months;
        self
    }

    pub fn with_discount_rate(mut self, annual_discount_rate: f64) -> Self {
        self.annual_discount_rate = annual_discount_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    pub fn n_months(&self) -> usize {
        self.n_months
    }

    pub fn annual_discount_rate(&self) -> f64 {
        self.annual_discount_rate
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Monthly-compounded discount rate built from the annual rate.
    pub fn discount_rate(&self) -> Result<InterestRate> {
        InterestRate::try_new(self.annual_discount_rate, Frequency::Monthly)
            .map_err(|e| AtlasError::InvalidConfigurationErr(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_simulations == 0 {
            return Err(AtlasError::InvalidConfigurationErr(
                "number of simulations must be positive".to_string(),
            ));
        }
        if self.n_months == 0 {
            return Err(AtlasError::InvalidConfigurationErr(
                "horizon must be at least one month".to_string(),
            ));
        }
        if self.n_months > BONUS_YEARS * 12 {
            return Err(AtlasError::InvalidConfigurationErr(format!(
                "horizon of {} months exceeds the {}-year bonus schedule",
                self.n_months, BONUS_YEARS
            )));
        }
        self.discount_rate()?;
        Ok(())
    }
}
