use chrono::NaiveDateTime;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Weight(f64),
    Height(f64),
    BodyMassIndex(f64),
}

impl Value {
    pub fn value(&self) -> f64 {
        match self {
            Value::Weight(x) | Value::Height(x) | Value::BodyMassIndex(x) => *x,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    Weight,
    Height,
    BodyMassIndex,
}

impl From<&Value> for ValueType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Weight(_) => ValueType::Weight,
            Value::Height(_) => ValueType::Height,
            Value::BodyMassIndex(_) => ValueType::BodyMassIndex,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub timestamp: NaiveDateTime,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(timestamp: NaiveDateTime, values: Vec<Value>) -> Self {
        Self { timestamp, values }
    }

    pub fn add_value(&mut self, value: Value) {
        self.values.push(value)
    }

    /// Returns the first value of the given type, if the record has one.
    pub fn get(&self, value_type: ValueType) -> Option<f64> {
        self.values
            .iter()
            .find(|value| ValueType::from(*value) == value_type)
            .map(Value::value)
    }
}
