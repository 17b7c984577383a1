use std::cmp::Ordering;

use crate::utils::errors::{AtlasError, Result};

use super::traits::Interpolate;

/// # Linear Interpolator
/// Basic linear interpolator over sorted abscissas.
#[derive(Clone)]
pub struct LinearInterpolator {}

impl Interpolate for LinearInterpolator {
    fn interpolate(x: f64, x_: &[f64], y_: &[f64], enable_extrapolation: bool) -> Result<f64> {
        if x_.len() != y_.len() {
            return Err(AtlasError::InvalidValueErr(format!(
                "Abscissas ({}) and ordinates ({}) differ in length",
                x_.len(),
                y_.len()
            )));
        }
        match x_.len() {
            0 => {
                return Err(AtlasError::InvalidValueErr(
                    "Cannot interpolate over an empty grid".to_string(),
                ))
            }
            1 => return Ok(y_[0]),
            _ => {}
        }

        let first = x_[0];
        let last = x_[x_.len() - 1];
        if !enable_extrapolation && (x < first || x > last) {
            return Err(AtlasError::InvalidValueErr(format!(
                "Extrapolation is not enabled, and {} is outside [{}, {}]",
                x, first, last
            )));
        }

        let by_knot = |knot: &f64| knot.partial_cmp(&x).unwrap_or(Ordering::Equal);
        let index = match x_.binary_search_by(by_knot) {
            Ok(index) => return Ok(y_[index]),
            Err(index) => index,
        };

        let value = match index {
            0 => y_[0] + (x - x_[0]) * (y_[1] - y_[0]) / (x_[1] - x_[0]),
            index if index == x_.len() => {
                y_[index - 1]
                    + (x - x_[index - 1]) * (y_[index - 1] - y_[index - 2])
                        / (x_[index - 1] - x_[index - 2])
            }
            _ => {
                y_[index - 1]
                    + (x - x_[index - 1]) * (y_[index] - y_[index - 1])
                        / (x_[index] - x_[index - 1])
            }
        };
        Ok(value)
    }
}
