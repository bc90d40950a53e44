use healthutils_model::measurement::{Record, Value, ValueType};
use log::{debug, info, warn};

use crate::bmi::{is_healthy_bmi, try_calculate_bmi};
use crate::error::{Error, Result};

/// Source of the body measurements needed to compute a body mass index.
/// Weight is in kilograms, height in meters.
#[mockall::automock]
pub trait BodyMetrics {
    fn weight(&self) -> Option<f64>;
    fn height(&self) -> Option<f64>;
}

impl BodyMetrics for Record {
    fn weight(&self) -> Option<f64> {
        self.get(ValueType::Weight)
    }

    fn height(&self) -> Option<f64> {
        self.get(ValueType::Height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment {
    pub bmi: f64,
    pub healthy: bool,
}

pub fn assess(metrics: &dyn BodyMetrics) -> Result<Assessment> {
    let weight = metrics
        .weight()
        .ok_or(Error::MissingValue(ValueType::Weight))?;
    let height = metrics
        .height()
        .ok_or(Error::MissingValue(ValueType::Height))?;

    let bmi = try_calculate_bmi(weight, height)?;
    let healthy = is_healthy_bmi(bmi);
    debug!(
        "Weight {} kg, height {} m: BMI {:.1} (healthy: {})",
        weight, height, bmi, healthy
    );

    Ok(Assessment { bmi, healthy })
}

/// Adds a body mass index value to every record that has enough data for
/// one and doesn't carry one yet. Returns the number of records changed.
pub fn annotate_records(records: &mut [Record]) -> usize {
    let mut annotated = 0;
    for record in records.iter_mut() {
        if record.get(ValueType::BodyMassIndex).is_some() {
            continue;
        }

        match assess(&*record) {
            Ok(assessment) => {
                record.add_value(Value::BodyMassIndex(assessment.bmi));
                annotated += 1;
            }
            Err(e) => warn!("Skipping record from {}: {}", record.timestamp, e),
        }
    }

    info!(
        "Annotated {} of {} records with body mass index",
        annotated,
        records.len()
    );
    annotated
}
