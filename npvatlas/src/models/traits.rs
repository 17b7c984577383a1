use crate::{
    cashflows::cashflowmatrix::CashflowMatrix, math::randomnumbers::RandomNumberGenerator,
    models::enums::ScenarioKind, utils::errors::Result,
};

/// Trait for models generating the monthly cash flows of one scenario.
pub trait ScenarioSimulator {
    fn kind(&self) -> ScenarioKind;

    /// Simulate `n_paths` paths over `n_months` months, drawing from `rng`.
    fn simulate<R: RandomNumberGenerator>(
        &self,
        n_paths: usize,
        n_months: usize,
        rng: &mut R,
    ) -> Result<CashflowMatrix>;
}

/// True for the last month of each year, counting months from 0.
pub fn is_year_end(month: usize) -> bool {
    (month + 1) % 12 == 0
}
