//! Custom GraphQL scalars.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

/// Release date carried as an opaque value.
///
/// Integer input stays an integer timestamp; anything else is stored and
/// returned exactly as received. No validation or timezone handling.
#[derive(Clone, Debug, PartialEq)]
pub struct Date(pub serde_json::Value);

impl Date {
    /// `None` for a stored JSON null, so the field renders as `null`.
    pub fn from_stored(value: serde_json::Value) -> Option<Self> {
        (!value.is_null()).then_some(Date(value))
    }

    pub fn into_stored(date: Option<Self>) -> serde_json::Value {
        date.map(|d| d.0).unwrap_or(serde_json::Value::Null)
    }
}

#[Scalar]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        let json = value.into_json().map_err(InputValueError::custom)?;
        Ok(Date(json))
    }

    fn to_value(&self) -> Value {
        Value::from_json(self.0.clone()).unwrap_or(Value::Null)
    }
}
