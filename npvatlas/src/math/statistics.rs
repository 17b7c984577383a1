//! Sample statistics used to summarise NPV distributions.
//!
//! Quantiles interpolate linearly between order statistics: for a sorted
//! sample `x[0..n)` and level `q`, the position is `h = q (n - 1)` and the
//! value is `x[floor h] + (h - floor h) (x[ceil h] - x[floor h])`.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::math::interpolation::{linear::LinearInterpolator, traits::Interpolate};
use crate::utils::errors::{AtlasError, Result};

/// Raises every value below `floor` to `floor`. NaN is left untouched.
pub fn clip_lower(values: &mut [f64], floor: f64) {
    for v in values.iter_mut() {
        if *v < floor {
            *v = floor;
        }
    }
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(AtlasError::InvalidValueErr(
            "Statistic requested over an empty sample".to_string(),
        ));
    }
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(AtlasError::NonFiniteValueErr(format!(
            "sample value {} at position {}",
            v, i
        )));
    }
    Ok(())
}

pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_finite(values)?;
    Ok(values.iter().mean())
}

/// Returns a sorted copy of `values`, rejecting empty or non-finite samples.
pub fn sorted(values: &[f64]) -> Result<Vec<f64>> {
    ensure_finite(values)?;
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    Ok(out)
}

/// Quantile `q` of an already sorted sample.
pub fn quantile(sorted: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(AtlasError::InvalidValueErr(format!(
            "Quantile level {} outside [0, 1]",
            q
        )));
    }
    if sorted.is_empty() {
        return Err(AtlasError::InvalidValueErr(
            "Quantile requested over an empty sample".to_string(),
        ));
    }
    let h = q * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    if lo == hi {
        return Ok(sorted[lo]);
    }
    LinearInterpolator::interpolate(
        h,
        &[lo as f64, hi as f64],
        &[sorted[lo], sorted[hi]],
        false,
    )
}

pub fn median(sorted: &[f64]) -> Result<f64> {
    quantile(sorted, 0.5)
}

/// Mean, median and the 5th/95th percentiles of a sample.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    pub mean: f64,
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
}

impl DistributionSummary {
    pub fn from_sample(values: &[f64]) -> Result<DistributionSummary> {
        let sorted = sorted(values)?;
        Ok(DistributionSummary {
            mean: mean(values)?,
            median: median(&sorted)?,
            p5: quantile(&sorted, 0.05)?,
            p95: quantile(&sorted, 0.95)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_linear_rule() -> Result<()> {
        let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        // h = 0.05 * 9 = 0.45
        assert!((quantile(&sample, 0.05)? - 1.45).abs() < 1e-12);
        // h = 0.95 * 9 = 8.55
        assert!((quantile(&sample, 0.95)? - 9.55).abs() < 1e-12);
        assert_eq!(median(&sample)?, 5.5);
        assert_eq!(quantile(&sample, 0.0)?, 1.0);
        assert_eq!(quantile(&sample, 1.0)?, 10.0);
        Ok(())
    }

    #[test]
    fn test_odd_median_is_middle_value() -> Result<()> {
        let sample = sorted(&[9.0, -3.0, 4.0])?;
        assert_eq!(sample, vec![-3.0, 4.0, 9.0]);
        assert_eq!(median(&sample)?, 4.0);
        Ok(())
    }

    #[test]
    fn test_single_value_sample() -> Result<()> {
        let summary = DistributionSummary::from_sample(&[42.5])?;
        assert_eq!(summary.mean, 42.5);
        assert_eq!(summary.median, 42.5);
        assert_eq!(summary.p5, 42.5);
        assert_eq!(summary.p95, 42.5);
        Ok(())
    }

    #[test]
    fn test_rejects_nan_and_empty() {
        assert!(matches!(
            mean(&[1.0, f64::NAN]),
            Err(AtlasError::NonFiniteValueErr(_))
        ));
        assert!(matches!(mean(&[]), Err(AtlasError::InvalidValueErr(_))));
        assert!(quantile(&[1.0], 1.5).is_err());
    }

    #[test]
    fn test_clip_lower_keeps_nan() {
        let mut values = vec![-1.0, 0.5, f64::NAN, 2.0];
        clip_lower(&mut values, 0.0);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 0.5);
        assert!(values[2].is_nan());
        assert_eq!(values[3], 2.0);
    }

    #[test]
    fn test_mean_of_sample() -> Result<()> {
        assert!((mean(&[1.0, 2.0, 3.0, 6.0])? - 3.0).abs() < 1e-12);
        Ok(())
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn percentiles_are_ordered(sample in proptest::collection::vec(-1e7f64..1e7, 1..200)) {
                let summary = DistributionSummary::from_sample(&sample).unwrap();
                prop_assert!(summary.p5 <= summary.median);
                prop_assert!(summary.median <= summary.p95);
            }
        }
    }
}
