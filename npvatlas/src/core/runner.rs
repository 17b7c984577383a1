use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    aggregation::{
        pipeline::{discount, npv_by_path, summarize, unpivot},
        records::{NpvRecord, SummaryRecord},
    },
    core::config::SimulationConfig,
    math::randomnumbers::{RandomNumberGenerator, SeededDrawEngine},
    models::{
        enums::ScenarioKind, independent::IndependentScenario, salaried::SalariedScenario,
        traits::ScenarioSimulator,
    },
    utils::errors::{AtlasError, Result},
};

/// Outcome of one run: every path NPV and the per-scenario summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    config: SimulationConfig,
    npvs: Vec<NpvRecord>,
    summary: Vec<SummaryRecord>,
}

impl SimulationReport {
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn npvs(&self) -> &[NpvRecord] {
        &self.npvs
    }

    pub fn summary(&self) -> &[SummaryRecord] {
        &self.summary
    }

    pub fn summary_for(&self, scenario: ScenarioKind) -> Result<&SummaryRecord> {
        self.summary
            .iter()
            .find(|s| s.scenario == scenario)
            .ok_or(AtlasError::NotFoundErr(format!("summary for {}", scenario)))
    }

    pub fn npvs_for(&self, scenario: ScenarioKind) -> impl Iterator<Item = &NpvRecord> + '_ {
        self.npvs.iter().filter(move |r| r.scenario == scenario)
    }

    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary)?)
    }
}

/// Runs both scenarios from one seeded stream and reduces them to NPV
/// summaries. Scenario B draws first, then scenario A.
pub fn npv_eval(config: &SimulationConfig) -> Result<SimulationReport> {
    config.validate()?;
    let rate = config.discount_rate()?;
    info!(
        seed = config.seed(),
        n_simulations = config.n_simulations(),
        n_months = config.n_months(),
        annual_discount_rate = config.annual_discount_rate(),
        "starting npv simulation"
    );

    let mut rng = SeededDrawEngine::new(config.seed());
    let n = config.n_simulations();
    let m = config.n_months();

    let salaried = SalariedScenario::new();
    let independent = IndependentScenario::new();
    let scenario_b = salaried.simulate(n, m, &mut rng)?;
    let scenario_a = independent.simulate(n, m, &mut rng)?;

    let records = unpivot(&[
        (salaried.kind(), &scenario_b),
        (independent.kind(), &scenario_a),
    ]);
    let discounted = discount(&records, &rate);
    let npvs = npv_by_path(&discounted)?;
    let summary = summarize(&npvs)?;

    info!(
        seed = rng.seed(),
        draws = rng.draws(),
        scenarios = summary.len(),
        "npv simulation finished"
    );
    Ok(SimulationReport {
        config: *config,
        npvs,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() -> Result<()> {
        let config = SimulationConfig::default().with_simulations(300);
        let report = npv_eval(&config)?;
        assert_eq!(report.config(), &config);
        assert_eq!(report.summary().len(), 2);
        assert_eq!(report.npvs().len(), 600);
        assert_eq!(report.npvs_for(ScenarioKind::ScenarioA).count(), 300);
        assert_eq!(report.npvs_for(ScenarioKind::ScenarioB).count(), 300);
        assert_eq!(report.summary()[0].scenario, ScenarioKind::ScenarioA);
        assert_eq!(report.summary()[1].scenario, ScenarioKind::ScenarioB);
        for s in report.summary() {
            assert!(s.p5_npv <= s.median_npv);
            assert!(s.median_npv <= s.p95_npv);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_config_fails_before_simulation() {
        let config = SimulationConfig::default().with_months(0);
        assert!(matches!(
            npv_eval(&config),
            Err(AtlasError::InvalidConfigurationErr(_))
        ));
    }

    #[test]
    fn test_salaried_npv_is_plausible() -> Result<()> {
        let report = npv_eval(&SimulationConfig::default().with_simulations(2_000))?;
        let b = report.summary_for(ScenarioKind::ScenarioB)?;
        // 60 discounted months of ~26.6k salary plus five bonuses of ~48k
        assert!(b.mean_npv > 1_300_000.0 && b.mean_npv < 1_600_000.0);
        Ok(())
    }
}
