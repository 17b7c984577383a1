use std::fmt;

use serde::{Deserialize, Serialize};

/// # ScenarioKind
/// The two simulated career scenarios. Ordering follows the label.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Own business with a side salary.
    ScenarioA,
    /// Salaried employee.
    ScenarioB,
}

impl ScenarioKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::ScenarioA => "scenario_a",
            ScenarioKind::ScenarioB => "scenario_b",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
