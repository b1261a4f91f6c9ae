use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MathError;

/// An integer or floating-point value.
///
/// Serializes as a bare JSON number, so `Int(5)` is written as `5` and
/// `Float(5.0)` as `5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `self` unless it is NaN or infinite, which JSON cannot carry.
    pub fn finite(self) -> Result<Self, MathError> {
        match self {
            Number::Float(f) if !f.is_finite() => Err(MathError::NonFinite(f)),
            n => Ok(n),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::from(i),
            Number::Float(f) => Value::from(f),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = MathError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Number(n) = value else {
            return Err(MathError::NotNumeric);
        };
        if let Some(i) = n.as_i64() {
            Ok(Number::Int(i))
        } else {
            // u64 above i64::MAX and every non-integral number land here.
            n.as_f64().map(Number::Float).ok_or(MathError::NotNumeric)
        }
    }
}

impl FromStr for Number {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(MathError::NotNumeric),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}
