pub use crate::{
    aggregation::{pipeline::*, records::*},
    cashflows::cashflowmatrix::*,
    core::{config::*, runner::*},
    math::{
        interpolation::{linear::*, traits::*},
        randomnumbers::*,
        statistics::*,
    },
    models::{business::*, enums::*, independent::*, salaried::*, traits::*},
    rates::{enums::*, interestrate::*},
    utils::errors::*,
};
