use serde_json::Value;

use crate::error::Result;
use crate::number::Number;

/// Adds two numbers.
///
/// Two integers produce an integer; if either side is a float the result is
/// a float. An integer sum that overflows `i64` is returned as a float.
pub fn sum(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 + y as f64)),
        (a, b) => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Adds two untyped JSON values.
///
/// Fails with [`MathError::NotNumeric`](crate::MathError::NotNumeric) if
/// either argument is not a JSON number.
pub fn sum_values(a: &Value, b: &Value) -> Result<Number> {
    let a = Number::try_from(a)?;
    let b = Number::try_from(b)?;
    Ok(sum(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MathError;
    use serde_json::json;

    #[test]
    fn test_sum() {
        assert_eq!(sum(Number::Int(2), Number::Int(3)), Number::Int(5));
    }

    #[test]
    fn test_sum_mixed_operands_yield_float() {
        assert_eq!(sum(Number::Int(2), Number::Float(0.5)), Number::Float(2.5));
        assert_eq!(sum(Number::Float(1.5), Number::Float(1.5)), Number::Float(3.0));
        assert_eq!(sum(Number::Int(-4), Number::Float(4.0)), Number::Float(0.0));
    }

    #[test]
    fn test_sum_matches_native_addition() {
        let pairs: [(i64, i64); 4] = [(0, 0), (-10, 3), (1_000_000, 7), (i64::MIN, 1)];
        for (a, b) in pairs {
            assert_eq!(sum(Number::Int(a), Number::Int(b)), Number::Int(a + b));
        }
        let floats = [(0.1, 0.2), (-1.25, 1e-3), (1e300, 1e300)];
        for (a, b) in floats {
            assert_eq!(sum(Number::Float(a), Number::Float(b)), Number::Float(a + b));
        }
    }

    #[test]
    fn test_sum_overflow_promotes_to_float() {
        let result = sum(Number::Int(i64::MAX), Number::Int(1));
        assert!(result.is_float());
        assert_eq!(result.as_f64(), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(sum_values(&json!(2), &json!(3)), Ok(Number::Int(5)));
        assert_eq!(sum_values(&json!(2), &json!(0.5)), Ok(Number::Float(2.5)));
    }

    #[test]
    fn test_sum_error() {
        let err = sum_values(&json!(2), &json!("3")).unwrap_err();
        assert_eq!(err, MathError::NotNumeric);
        assert_eq!(err.to_string(), "arguments must be of type `float` or `int`");
        assert_eq!(sum_values(&json!([1]), &json!(1)), Err(MathError::NotNumeric));
    }
}
