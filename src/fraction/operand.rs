// src/fraction/operand.rs

use std::str::FromStr;

use crate::core::{Number, NumsError, Result};
use crate::fraction::Fraction;

/// Right-hand side of a fraction operator: a fraction or a bare number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Fraction(Fraction),
    Number(Number),
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Operand::Fraction(f)
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(Number::Int(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(Number::from(n))
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(Number::Float(n))
    }
}

/// Text containing `/` is read as a fraction, anything else as a number.
/// Text that is neither fails with `NotAFraction`.
impl FromStr for Operand {
    type Err = NumsError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = if s.contains('/') {
            s.parse::<Fraction>().map(Operand::Fraction)
        } else {
            s.parse::<Number>().map(Operand::Number)
        };
        parsed.map_err(|err| match err {
            NumsError::ZeroDenominator => err,
            _ => NumsError::NotAFraction { input: s.to_string() },
        })
    }
}
