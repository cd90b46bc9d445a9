// src/core/number.rs

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num::rational::Ratio;
use num::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::error::{NumsError, Result};

/// 10^18 is the largest power of ten that fits an i64.
const MAX_DECIMAL_PLACES: u32 = 18;

/// A numeric component: an integer or a floating-point value.
///
/// Integer arithmetic stays integral and falls back to floating point on
/// overflow. True division always produces a float. Equality and ordering are
/// numeric across variants, so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(v) => v < 0,
            Number::Float(v) => v < 0.0,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }

    /// Rejects NaN and infinities, which are not usable numeric values.
    pub fn validate(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(NumsError::invalid_type(format!("{} is not a finite number", self)))
        }
    }

    pub fn abs(self) -> Self {
        match self {
            Number::Int(v) => v
                .checked_abs()
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float((v as f64).abs())),
            Number::Float(v) => Number::Float(v.abs()),
        }
    }

    /// The integral value of this number, if it has one that fits an i64.
    pub fn to_integer(self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(v),
            Number::Float(v) if v.fract() == 0.0 => v.to_i64(),
            Number::Float(_) => None,
        }
    }

    /// Real division, as Python's `/`: the result is always a float.
    pub fn true_div(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(NumsError::DivisionByZero);
        }
        Ok(Number::Float(self.to_f64() / rhs.to_f64()))
    }

    /// Exact rational value, reading floats through their shortest decimal form.
    pub fn to_ratio(self) -> Result<Ratio<i64>> {
        match self {
            Number::Int(v) => Ok(Ratio::from_integer(v)),
            Number::Float(_) => {
                let v = self.validate()?.to_f64();
                let places = decimal_places(v);
                if places > MAX_DECIMAL_PLACES {
                    return Err(NumsError::invalid_value(format!(
                        "{} has too many decimal places for an exact ratio",
                        v
                    )));
                }
                let scale = 10i64.pow(places);
                let scaled = (v * scale as f64)
                    .round()
                    .to_i64()
                    .ok_or_else(|| NumsError::invalid_value(format!("{} is too large for an exact ratio", v)))?;
                Ok(Ratio::new(scaled, scale))
            }
        }
    }
}

/// Number of digits after the decimal point in the shortest representation of `value`.
pub fn decimal_places(value: f64) -> u32 {
    let text = format!("{}", value);
    text.split_once('.')
        .map(|(_, fraction)| fraction.len() as u32)
        .unwrap_or(0)
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 + b as f64)),
            (a, b) => Number::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 - b as f64)),
            (a, b) => Number::Float(a.to_f64() - b.to_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 * b as f64)),
            (a, b) => Number::Float(a.to_f64() * b.to_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(v) => v
                .checked_neg()
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(-(v as f64))),
            Number::Float(v) => Number::Float(-v),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl FromStr for Number {
    type Err = NumsError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if let Ok(v) = text.parse::<i64>() {
            return Ok(Number::Int(v));
        }
        match text.parse::<f64>() {
            Ok(v) => Number::Float(v).validate(),
            Err(_) => Err(NumsError::invalid_type(format!("{:?} must be an integer or a float", s))),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v as i64)
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        Number::Int(v as i64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_across_variants() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert_ne!(Number::Int(1), Number::Float(1.5));
        assert!(Number::Int(2) > Number::Float(1.5));
    }

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        assert!(matches!(Number::Int(2) + Number::Int(3), Number::Int(5)));
        assert!(matches!(Number::Int(2) * Number::Int(3), Number::Int(6)));
        assert!(matches!(Number::Int(2) - Number::Float(0.5), Number::Float(_)));
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let product = Number::Int(i64::MAX) * Number::Int(2);
        assert!(product.is_float());
        assert_eq!(product.to_f64(), i64::MAX as f64 * 2.0);
    }

    #[test]
    fn test_true_div() {
        assert_eq!(Number::Int(1).true_div(Number::Int(4)).unwrap(), Number::Float(0.25));
        assert!(Number::Int(4).true_div(Number::Int(2)).unwrap().is_float());
        assert_eq!(Number::Int(1).true_div(Number::Int(0)), Err(NumsError::DivisionByZero));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(Number::Float(f64::NAN).validate().is_err());
        assert!(Number::Float(f64::INFINITY).validate().is_err());
        assert!(Number::Float(2.5).validate().is_ok());
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(Number::Float(4.0).to_integer(), Some(4));
        assert_eq!(Number::Float(4.5).to_integer(), None);
        assert_eq!(Number::Int(-3).to_integer(), Some(-3));
    }

    #[test]
    fn test_to_ratio_uses_decimal_expansion() {
        assert_eq!(Number::Float(0.2).to_ratio().unwrap(), Ratio::new(1, 5));
        assert_eq!(Number::Float(3.245).to_ratio().unwrap(), Ratio::new(649, 200));
        assert_eq!(Number::Int(7).to_ratio().unwrap(), Ratio::from_integer(7));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(0.1), 1);
        assert_eq!(decimal_places(0.25), 2);
        assert_eq!(decimal_places(10.0), 0);
    }

    #[test]
    fn test_parse_and_display() {
        assert!(matches!("42".parse::<Number>().unwrap(), Number::Int(42)));
        assert!(matches!("0.5".parse::<Number>().unwrap(), Number::Float(_)));
        assert!("x".parse::<Number>().is_err());
        assert!("inf".parse::<Number>().is_err());
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Int(1).to_string(), "1");
    }
}
