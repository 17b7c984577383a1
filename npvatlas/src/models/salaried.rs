use tracing::debug;

use crate::{
    cashflows::cashflowmatrix::CashflowMatrix,
    math::{randomnumbers::RandomNumberGenerator, statistics::clip_lower},
    models::{
        enums::ScenarioKind,
        traits::{is_year_end, ScenarioSimulator},
    },
    utils::errors::{AtlasError, Result},
};

/// Years covered by the bonus multiplier draws.
pub const BONUS_YEARS: usize = 5;

/// Salaried employee: a stochastic base salary fixed per path, a monthly
/// health premium and a year-end bonus scaled by a yearly multiplier.
///
/// Draws, in order: `n` salaries, then an `n x 5` path-major block of bonus
/// multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalariedScenario {
    salary_mean: f64,
    salary_std: f64,
    health_premium: f64,
    bonus_rate: f64,
    multiplier_mean: f64,
    multiplier_std: f64,
}

impl Default for SalariedScenario {
    fn default() -> Self {
        SalariedScenario {
            salary_mean: 320_000.0,
            salary_std: 35_000.0,
            health_premium: -50.0,
            bonus_rate: 0.15,
            multiplier_mean: 1.0,
            multiplier_std: 0.2,
        }
    }
}

impl SalariedScenario {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioSimulator for SalariedScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ScenarioB
    }

    fn simulate<R: RandomNumberGenerator>(
        &self,
        n_paths: usize,
        n_months: usize,
        rng: &mut R,
    ) -> Result<CashflowMatrix> {
        if n_months > BONUS_YEARS * 12 {
            return Err(AtlasError::InvalidValueErr(format!(
                "{} months exceed the {}-year bonus schedule",
                n_months, BONUS_YEARS
            )));
        }

        let mut annual_salaries = rng.gen_normal(self.salary_mean, self.salary_std, n_paths)?;
        clip_lower(&mut annual_salaries, 0.0);
        let monthly_salaries: Vec<f64> = annual_salaries.iter().map(|s| s / 12.0).collect();

        let mut multipliers = rng.gen_normal_matrix(
            self.multiplier_mean,
            self.multiplier_std,
            n_paths,
            BONUS_YEARS,
        )?;
        clip_lower(&mut multipliers, 0.0);

        let mut values = Vec::with_capacity(n_paths * n_months);
        for month in 0..n_months {
            let year = month / 12;
            for path in 0..n_paths {
                let mut cash_flow = monthly_salaries[path] + self.health_premium;
                if is_year_end(month) {
                    cash_flow += self.bonus_rate
                        * annual_salaries[path]
                        * multipliers[path * BONUS_YEARS + year];
                }
                values.push(cash_flow);
            }
        }

        debug!(
            scenario = %self.kind(),
            n_paths,
            n_months,
            "salaried cash flows simulated"
        );
        CashflowMatrix::from_values(n_months, n_paths, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::randomnumbers::SeededDrawEngine;
    use crate::models::testutils::{DrawCall, RecordingDraws, UniformPick};

    #[test]
    fn test_draw_sequence() -> Result<()> {
        let mut rng = RecordingDraws::new(UniformPick::Low);
        SalariedScenario::new().simulate(4, 60, &mut rng)?;
        let expected = vec![
            DrawCall::normal(320_000.0, 35_000.0, 4),
            DrawCall::normal(1.0, 0.2, 20),
        ];
        assert_eq!(rng.calls, expected);
        Ok(())
    }

    #[test]
    fn test_cash_flows_with_mean_draws() -> Result<()> {
        let mut rng = RecordingDraws::new(UniformPick::Low);
        let matrix = SalariedScenario::new().simulate(3, 60, &mut rng)?;
        let monthly = 320_000.0 / 12.0 - 50.0;
        let bonus = 0.15 * 320_000.0 * 1.0;
        for month in 0..60 {
            for &cf in matrix.month(month)? {
                if [11, 23, 35, 47, 59].contains(&month) {
                    assert_eq!(cf, monthly + bonus);
                } else {
                    assert_eq!(cf, monthly);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_bonus_only_at_year_end() -> Result<()> {
        let mut rng = SeededDrawEngine::new(42);
        let matrix = SalariedScenario::new().simulate(200, 60, &mut rng)?;
        for path in 0..200 {
            let flows: Vec<f64> = matrix.path(path).collect();
            let base = flows[0];
            assert!(base >= -50.0);
            for (month, cf) in flows.iter().enumerate() {
                if is_year_end(month) {
                    assert!(*cf >= base);
                } else {
                    assert_eq!(*cf, base, "path {} month {}", path, month);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_horizon_beyond_bonus_schedule() {
        let mut rng = SeededDrawEngine::new(42);
        assert!(SalariedScenario::new().simulate(1, 61, &mut rng).is_err());
    }
}
