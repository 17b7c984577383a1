//! Monte Carlo estimate of the net present value of two career scenarios:
//! a salaried job and an independent business run next to a side salary.

pub mod aggregation;
pub mod cashflows;
pub mod core;
pub mod math;
pub mod models;
pub mod prelude;
pub mod rates;
pub mod utils;
