use tracing::debug;

use crate::{
    cashflows::cashflowmatrix::CashflowMatrix,
    math::{randomnumbers::RandomNumberGenerator, statistics::clip_lower},
    models::{
        business::{BusinessModel, RegimeSchedule},
        enums::ScenarioKind,
        traits::{is_year_end, ScenarioSimulator},
    },
    utils::errors::Result,
};

/// Independent business plus a side salary with a year-end bonus.
///
/// Draws, in order: the regime schedule, the per-month business batches,
/// then `n` bonus fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependentScenario {
    business: BusinessModel,
    annual_salary: f64,
    bonus_mean: f64,
    bonus_std: f64,
}

impl Default for IndependentScenario {
    fn default() -> Self {
        IndependentScenario {
            business: BusinessModel::default(),
            annual_salary: 250_000.0,
            bonus_mean: 0.12,
            bonus_std: 0.03,
        }
    }
}

impl IndependentScenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the scenario and also returns the regime schedule that all
    /// paths shared.
    pub fn simulate_with_schedule<R: RandomNumberGenerator>(
        &self,
        n_paths: usize,
        n_months: usize,
        rng: &mut R,
    ) -> Result<(CashflowMatrix, RegimeSchedule)> {
        let schedule = self.business.draw_schedule(rng)?;
        let business = self.business.simulate(&schedule, n_paths, n_months, rng)?;

        let mut bonus_fractions = rng.gen_normal(self.bonus_mean, self.bonus_std, n_paths)?;
        clip_lower(&mut bonus_fractions, 0.0);

        let monthly_salary = self.annual_salary / 12.0;
        let mut blocks = Vec::with_capacity(n_months);
        for month in 0..n_months {
            let block = if is_year_end(month) {
                bonus_fractions
                    .iter()
                    .map(|f| monthly_salary + self.annual_salary * f)
                    .collect()
            } else {
                vec![monthly_salary; n_paths]
            };
            blocks.push(block);
        }
        let salary = CashflowMatrix::from_month_blocks(n_paths, blocks)?;

        debug!(
            scenario = %self.kind(),
            free_months = schedule.free_months(),
            hourly_months = schedule.hourly_months(),
            n_paths,
            n_months,
            "independent cash flows simulated"
        );
        Ok((salary.try_add(&business)?, schedule))
    }
}

impl ScenarioSimulator for IndependentScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ScenarioA
    }

    fn simulate<R: RandomNumberGenerator>(
        &self,
        n_paths: usize,
        n_months: usize,
        rng: &mut R,
    ) -> Result<CashflowMatrix> {
        self.simulate_with_schedule(n_paths, n_months, rng)
            .map(|(matrix, _)| matrix)
    }
}
