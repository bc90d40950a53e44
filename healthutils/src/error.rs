use healthutils_model::measurement::ValueType;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid height: {0} m")]
    InvalidHeight(f64),
    #[error("invalid weight: {0} kg")]
    InvalidWeight(f64),
    #[error("body mass index out of range: {0}")]
    InvalidBmi(f64),
    #[error("missing {0} value")]
    MissingValue(ValueType),
}

pub type Result<T> = std::result::Result<T, Error>;
