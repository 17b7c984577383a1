use serde::{Deserialize, Serialize};

use crate::models::enums::ScenarioKind;

/// One cash flow of one path, before discounting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CashflowRecord {
    pub path: usize,
    pub month: usize,
    pub scenario: ScenarioKind,
    pub cash_flow: f64,
}

/// # LongFormRecord
/// A cash flow together with its present value at month 0.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LongFormRecord {
    pub scenario: ScenarioKind,
    pub path: usize,
    pub month: usize,
    pub cash_flow: f64,
    pub discounted_cash_flow: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NpvRecord {
    pub scenario: ScenarioKind,
    pub path: usize,
    pub npv: f64,
}

/// # SummaryRecord
/// Distribution of path NPVs for one scenario.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SummaryRecord {
    pub scenario: ScenarioKind,
    #[serde(rename = "mean_NPV")]
    pub mean_npv: f64,
    #[serde(rename = "median_NPV")]
    pub median_npv: f64,
    #[serde(rename = "p5_NPV")]
    pub p5_npv: f64,
    #[serde(rename = "p95_NPV")]
    pub p95_npv: f64,
}
