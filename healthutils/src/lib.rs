pub mod assessment;
pub mod bmi;
mod error;

pub use assessment::{annotate_records, assess, Assessment, BodyMetrics, MockBodyMetrics};
pub use bmi::{calculate_bmi, is_healthy_bmi, try_calculate_bmi, HealthyRange, HEALTHY_RANGE};
pub use error::{Error, Result};
