//! Revenue model of the independent business.
//!
//! A run goes through three regimes in order: a free ramp-up with no
//! revenue, a phase billed by the hour, and a retainer phase. The regime
//! lengths are drawn once per run and shared by every path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cashflows::cashflowmatrix::CashflowMatrix,
    math::{randomnumbers::RandomNumberGenerator, statistics::clip_lower},
    utils::errors::{AtlasError, Result},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Free,
    /// `elapsed` months since the hourly phase started.
    Hourly { elapsed: usize },
    Retainer,
}

/// # RegimeSchedule
/// Boundaries between the three business regimes.
///
/// ## Example
/// ```
/// use npvatlas::prelude::*;
/// let schedule = RegimeSchedule::new(3, 4);
/// assert_eq!(schedule.regime_at(2), Regime::Free);
/// assert_eq!(schedule.regime_at(4), Regime::Hourly { elapsed: 1 });
/// assert_eq!(schedule.regime_at(7), Regime::Retainer);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeSchedule {
    free_months: usize,
    hourly_months: usize,
}

impl RegimeSchedule {
    pub fn new(free_months: usize, hourly_months: usize) -> Self {
        RegimeSchedule {
            free_months,
            hourly_months,
        }
    }

    pub fn free_months(&self) -> usize {
        self.free_months
    }

    pub fn hourly_months(&self) -> usize {
        self.hourly_months
    }

    /// First month of the retainer regime.
    pub fn retainer_start(&self) -> usize {
        self.free_months + self.hourly_months
    }

    pub fn regime_at(&self, month: usize) -> Regime {
        if month < self.free_months {
            Regime::Free
        } else if month < self.retainer_start() {
            Regime::Hourly {
                elapsed: month - self.free_months,
            }
        } else {
            Regime::Retainer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessModel {
    free_months_range: (i64, i64),
    hourly_months_range: (i64, i64),
    hourly_rate: (f64, f64),
    growth_pct: (f64, f64),
    hours: (f64, f64),
    retainer: (f64, f64),
    retainer_floor: f64,
    retainer_count_range: (i64, i64),
    fixed_cost: f64,
}

impl Default for BusinessModel {
    fn default() -> Self {
        BusinessModel {
            free_months_range: (3, 9),
            hourly_months_range: (4, 9),
            hourly_rate: (80.0, 15.0),
            growth_pct: (5.0, 2.0),
            hours: (16.0, 4.0),
            retainer: (10_000.0, 5_000.0),
            retainer_floor: 300.0,
            retainer_count_range: (0, 6),
            fixed_cost: -400.0,
        }
    }
}

impl BusinessModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the free then the hourly regime length.
    pub fn draw_schedule<R: RandomNumberGenerator>(&self, rng: &mut R) -> Result<RegimeSchedule> {
        let (free_lo, free_hi) = self.free_months_range;
        let free = rng.gen_uniform_int_scalar(free_lo, free_hi)?;
        let (hourly_lo, hourly_hi) = self.hourly_months_range;
        let hourly = rng.gen_uniform_int_scalar(hourly_lo, hourly_hi)?;
        let to_months = |v: i64| {
            usize::try_from(v).map_err(|_| {
                AtlasError::DistributionErr(format!("negative regime length {}", v))
            })
        };
        Ok(RegimeSchedule::new(to_months(free)?, to_months(hourly)?))
    }

    fn hourly_revenue<R: RandomNumberGenerator>(
        &self,
        elapsed: usize,
        n_paths: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let rates = rng.gen_normal(self.hourly_rate.0, self.hourly_rate.1, n_paths)?;
        let growth: Vec<f64> = rng
            .gen_normal(self.growth_pct.0, self.growth_pct.1, n_paths)?
            .into_iter()
            .map(|g| g / 100.0)
            .collect();
        let hours = rng.gen_normal(self.hours.0, self.hours.1, n_paths)?;

        let mut revenue: Vec<f64> = (0..n_paths)
            .map(|i| rates[i] * (1.0 + growth[i] * elapsed as f64) * hours[i])
            .collect();
        clip_lower(&mut revenue, 0.0);
        Ok(revenue)
    }

    fn retainer_revenue<R: RandomNumberGenerator>(
        &self,
        n_paths: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let mut sizes = rng.gen_normal(self.retainer.0, self.retainer.1, n_paths)?;
        clip_lower(&mut sizes, self.retainer_floor);
        let (count_lo, count_hi) = self.retainer_count_range;
        let counts = rng.gen_uniform_int(count_lo, count_hi, n_paths)?;
        Ok(sizes
            .iter()
            .zip(counts.iter())
            .map(|(size, count)| size * *count as f64)
            .collect())
    }

    /// Net business cash flows (revenue plus fixed cost) under `schedule`.
    /// Free months draw nothing; every other month draws one batch per path.
    pub fn simulate<R: RandomNumberGenerator>(
        &self,
        schedule: &RegimeSchedule,
        n_paths: usize,
        n_months: usize,
        rng: &mut R,
    ) -> Result<CashflowMatrix> {
        let mut blocks = Vec::with_capacity(n_months);
        for month in 0..n_months {
            let revenue = match schedule.regime_at(month) {
                Regime::Free => vec![0.0; n_paths],
                Regime::Hourly { elapsed } => self.hourly_revenue(elapsed, n_paths, rng)?,
                Regime::Retainer => self.retainer_revenue(n_paths, rng)?,
            };
            blocks.push(revenue.into_iter().map(|r| r + self.fixed_cost).collect());
        }
        debug!(
            free_months = schedule.free_months(),
            hourly_months = schedule.hourly_months(),
            n_paths,
            n_months,
            "business cash flows simulated"
        );
        CashflowMatrix::from_month_blocks(n_paths, blocks)
    }
}
