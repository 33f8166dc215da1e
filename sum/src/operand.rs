use std::fmt;

use num_bigint::BigInt;
use serde_json::{Number, Value};

use crate::render::{self, Repr};
use crate::SumError;

/// One side of the addition, as found in the event.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Any JSON integer, kept exact whatever its size.
    Int(BigInt),
    /// Adds as `0` or `1`.
    Bool(bool),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    /// Nulls and objects. These do not add.
    Other(Value),
}

impl Operand {
    pub fn from_value(value: Value) -> Result<Self, SumError> {
        let operand = match value {
            Value::Number(number) => Self::from_number(&number)?,
            Value::Bool(flag) => Self::Bool(flag),
            Value::String(text) => Self::Text(text),
            Value::Array(list) => Self::List(list),
            other => Self::Other(other),
        };

        Ok(operand)
    }

    /// Integer literals become [`Operand::Int`], everything else a float.
    pub(crate) fn from_number(number: &Number) -> Result<Self, SumError> {
        let literal = number.to_string();

        if let Ok(int) = literal.parse::<BigInt>() {
            return Ok(Self::Int(int));
        }

        literal
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| SumError::InvalidNumber { literal })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) | Self::Float(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::List(_) => "array",
            Self::Other(value) => value_kind(value),
        }
    }

    fn integer(&self) -> Option<BigInt> {
        match self {
            Self::Int(int) => Some(int.clone()),
            Self::Bool(flag) => Some(BigInt::from(u8::from(*flag))),
            _ => None,
        }
    }

    fn real(&self) -> Option<Result<f64, SumError>> {
        if let Self::Float(float) = self {
            return Some(Ok(*float));
        }

        // Decimal parsing rounds correctly, and overflows to infinity
        self.integer().map(|int| {
            let value = int.to_string();
            match value.parse::<f64>() {
                Ok(float) if float.is_finite() => Ok(float),
                _ => Err(SumError::IntegerTooLarge { value }),
            }
        })
    }

    /// Integers and booleans add exactly. A float on either side makes
    /// the sum a float. Strings concatenate, as do arrays. Anything else
    /// fails.
    pub fn checked_add(&self, rhs: &Operand) -> Result<Operand, SumError> {
        if let (Some(a), Some(b)) = (self.integer(), rhs.integer()) {
            return Ok(Self::Int(a + b));
        }

        if let (Some(a), Some(b)) = (self.real(), rhs.real()) {
            return Ok(Self::Float(a? + b?));
        }

        match (self, rhs) {
            (Self::Text(a), Self::Text(b)) => Ok(Self::Text(format!("{a}{b}"))),
            (Self::List(a), Self::List(b)) => {
                Ok(Self::List(a.iter().chain(b.iter()).cloned().collect()))
            }
            (lhs, rhs) => Err(SumError::UnsupportedOperands {
                left: lhs.kind(),
                right: rhs.kind(),
            }),
        }
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::Int(BigInt::from(0))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Float(float) => render::write_float(f, *float),
            Self::Text(text) => f.write_str(text),
            Self::List(list) => render::write_list(f, list),
            Self::Other(value) => write!(f, "{}", Repr(value)),
        }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
