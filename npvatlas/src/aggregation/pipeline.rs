//! Reduction from scenario cash-flow matrices to per-scenario NPV summaries:
//! unpivot to long form, discount, sum per (scenario, path), then summarise
//! per scenario.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    aggregation::records::{CashflowRecord, LongFormRecord, NpvRecord, SummaryRecord},
    cashflows::cashflowmatrix::CashflowMatrix,
    math::statistics::DistributionSummary,
    models::enums::ScenarioKind,
    rates::interestrate::InterestRate,
    utils::errors::{AtlasError, Result},
};

/// Long-form rows for every (scenario, month, path), scenarios in the order
/// given, months ascending, paths ascending within a month.
pub fn unpivot(matrices: &[(ScenarioKind, &CashflowMatrix)]) -> Vec<CashflowRecord> {
    let total = matrices.iter().map(|(_, m)| m.len()).sum();
    let mut records = Vec::with_capacity(total);
    for (scenario, matrix) in matrices {
        for month in 0..matrix.n_months() {
            let start = month * matrix.n_paths();
            let block = &matrix.values()[start..start + matrix.n_paths()];
            for (path, cash_flow) in block.iter().enumerate() {
                records.push(CashflowRecord {
                    path,
                    month,
                    scenario: *scenario,
                    cash_flow: *cash_flow,
                });
            }
        }
    }
    debug!(rows = records.len(), "cash flows unpivoted");
    records
}

pub fn discount(records: &[CashflowRecord], rate: &InterestRate) -> Vec<LongFormRecord> {
    records
        .iter()
        .map(|r| LongFormRecord {
            scenario: r.scenario,
            path: r.path,
            month: r.month,
            cash_flow: r.cash_flow,
            discounted_cash_flow: r.cash_flow * rate.discount_factor(r.month),
        })
        .collect()
}

/// Sums discounted cash flows per (scenario, path). Output is sorted by
/// scenario then path. A non-finite NPV is an error.
pub fn npv_by_path(records: &[LongFormRecord]) -> Result<Vec<NpvRecord>> {
    let mut sums: BTreeMap<(ScenarioKind, usize), f64> = BTreeMap::new();
    for r in records {
        *sums.entry((r.scenario, r.path)).or_insert(0.0) += r.discounted_cash_flow;
    }
    let npvs = sums
        .into_iter()
        .map(|((scenario, path), npv)| {
            if !npv.is_finite() {
                return Err(AtlasError::NonFiniteValueErr(format!(
                    "NPV of {} path {} is {}",
                    scenario, path, npv
                )));
            }
            Ok(NpvRecord {
                scenario,
                path,
                npv,
            })
        })
        .collect::<Result<Vec<NpvRecord>>>()?;
    debug!(rows = npvs.len(), "npv per path computed");
    Ok(npvs)
}

/// One summary row per scenario, sorted by scenario label.
pub fn summarize(npvs: &[NpvRecord]) -> Result<Vec<SummaryRecord>> {
    let mut groups: BTreeMap<ScenarioKind, Vec<f64>> = BTreeMap::new();
    for r in npvs {
        groups.entry(r.scenario).or_default().push(r.npv);
    }
    groups
        .into_iter()
        .map(|(scenario, values)| {
            let stats = DistributionSummary::from_sample(&values)?;
            Ok(SummaryRecord {
                scenario,
                mean_npv: stats.mean,
                median_npv: stats.median,
                p5_npv: stats.p5,
                p95_npv: stats.p95,
            })
        })
        .collect::<Result<Vec<SummaryRecord>>>()
}
