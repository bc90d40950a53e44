use healthutils_model::user::User;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed interval of body mass index values considered healthy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub lower: f64,
    pub upper: f64,
}

impl HealthyRange {
    pub fn contains(&self, bmi: f64) -> bool {
        (self.lower..=self.upper).contains(&bmi)
    }
}

pub const HEALTHY_RANGE: HealthyRange = HealthyRange {
    lower: 18.5,
    upper: 24.9,
};

/// Body mass index from weight in kilograms and height in meters.
///
/// Inputs are not checked. A zero height gives infinity (or NaN for a zero
/// weight), see [`try_calculate_bmi`] for the checked version.
pub fn calculate_bmi<T: Float>(weight: T, height: T) -> T {
    weight / height.powi(2)
}

/// Whether `bmi` lies within [`HEALTHY_RANGE`], bounds included. NaN is
/// never healthy.
pub fn is_healthy_bmi<T: Float>(bmi: T) -> bool {
    bmi.to_f64().is_some_and(|bmi| HEALTHY_RANGE.contains(bmi))
}

pub fn try_calculate_bmi(weight: f64, height: f64) -> Result<f64> {
    if !height.is_finite() || height <= 0.0 {
        return Err(Error::InvalidHeight(height));
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight(weight));
    }
    let bmi = calculate_bmi(weight, height);
    if !bmi.is_finite() {
        return Err(Error::InvalidBmi(bmi));
    }
    Ok(bmi)
}

pub fn get_body_mass_index(user: &User, weight: f64) -> f64 {
    calculate_bmi(weight, user.height_m())
}
