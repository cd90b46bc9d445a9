// src/fraction/mod.rs
//
// Fractions and the module-level helpers that build and combine them.

pub mod continued_fraction;
pub mod fraction;
pub mod operand;

pub use continued_fraction::ContinuedFraction;
pub use fraction::Fraction;
pub use operand::Operand;

use num::ToPrimitive;

use crate::core::number::decimal_places;
use crate::core::{Number, NumsError, Result};

pub fn add_fractions(f1: &Fraction, f2: &Fraction) -> Result<Fraction> {
    f1.checked_add(*f2)
}

pub fn subtract_fractions(f1: &Fraction, f2: &Fraction) -> Result<Fraction> {
    f1.checked_sub(*f2)
}

pub fn multiply_fractions(f1: &Fraction, f2: &Fraction) -> Result<Fraction> {
    f1.checked_mul(*f2)
}

pub fn divide_fractions(f1: &Fraction, f2: &Fraction) -> Result<Fraction> {
    f1.checked_div(*f2)
}

/// Creates a simplified fraction equal to `n`.
///
/// A float is scaled by `10^k`, `k` being its number of decimal places, so
/// `0.5` becomes `5/10` and then `1.0/2.0`.
pub fn make_fraction(n: impl Into<Number>) -> Result<Fraction> {
    match n.into().validate()? {
        Number::Int(v) => Ok(Fraction::from(v).simplify()),
        Number::Float(v) => {
            let scale = 10i64
                .checked_pow(decimal_places(v))
                .ok_or_else(|| NumsError::invalid_value(format!("{} has too many decimal places", v)))?;
            let scaled = (v * scale as f64).round();
            if scaled.to_i64().is_none() {
                return Err(NumsError::invalid_value(format!("{} is too large to scale", v)));
            }
            Ok(Fraction::new(scaled, scale)?.simplify())
        }
    }
}

/// Creates `n / 1` without simplifying.
pub fn make_simple_fraction(n: impl Into<Number>) -> Result<Fraction> {
    Fraction::whole(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_fraction_from_float() {
        let f = make_fraction(0.5).unwrap();
        assert_eq!(f.fraction(), (Number::Float(1.0), Number::Float(2.0)));

        let f = make_fraction(3.245).unwrap();
        assert_eq!(f.fraction(), (Number::Float(649.0), Number::Float(200.0)));
    }

    #[test]
    fn test_make_fraction_from_int() {
        let f = make_fraction(4).unwrap();
        assert_eq!(f.fraction(), (Number::Float(4.0), Number::Float(1.0)));
        assert!(make_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_make_simple_fraction() {
        let f = make_simple_fraction(3.25).unwrap();
        assert_eq!(f.fraction(), (Number::Float(3.25), Number::Int(1)));
    }
}
