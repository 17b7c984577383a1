use serde::{Deserialize, Serialize};

/// # Frequency
/// Number of compounding periods per year. The discriminant is the period count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Annual = 1,
    Semiannual = 2,
    Quarterly = 4,
    Monthly = 12,
}

impl Frequency {
    pub fn periods_per_year(&self) -> f64 {
        *self as i64 as f64
    }
}
