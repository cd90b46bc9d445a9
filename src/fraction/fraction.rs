// src/fraction/fraction.rs

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Sub};
use std::str::FromStr;

use log::trace;
use num::rational::Ratio;
use num::{CheckedDiv, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::core::{Number, NumsError, Result};
use crate::fraction::continued_fraction::ContinuedFraction;
use crate::fraction::operand::Operand;
use crate::integer_math::factors::{integral_gcf, integral_operands, lcm};

/// A ratio of two numeric components.
///
/// The denominator is never zero and both components are finite: every way
/// of building or changing a `Fraction` goes through [`Fraction::new`].
/// Components keep their flavor, so `Fraction::new(1, 2)` holds integers while
/// `"1/2".parse()` and the result of [`Fraction::simplify`] hold floats.
///
/// # Examples
/// ```
/// use nums::fraction::Fraction;
///
/// let a = Fraction::new(1, 2).unwrap();
/// let b = Fraction::new(1, 3).unwrap();
/// let sum = (a + b).unwrap();
/// assert!((sum.decimal() - 5.0 / 6.0).abs() < 1e-12);
/// assert!(b < a);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "FractionParts", into = "FractionParts")]
pub struct Fraction {
    numerator: Number,
    denominator: Number,
}

#[derive(Serialize, Deserialize)]
struct FractionParts {
    numerator: Number,
    denominator: Number,
}

impl Fraction {
    /// Creates `numerator / denominator`.
    ///
    /// # Errors
    /// * `ZeroDenominator` if `denominator` is zero
    /// * `InvalidType` if either component is NaN or infinite
    pub fn new(numerator: impl Into<Number>, denominator: impl Into<Number>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumsError::ZeroDenominator);
        }
        Ok(Fraction {
            numerator: numerator.validate()?,
            denominator: denominator.validate()?,
        })
    }

    /// Creates `n / 1`.
    pub fn whole(n: impl Into<Number>) -> Result<Self> {
        Fraction::new(n, 1)
    }

    /// The `(numerator, denominator)` pair, unmodified.
    pub fn fraction(&self) -> (Number, Number) {
        (self.numerator, self.denominator)
    }

    pub fn numerator(&self) -> Number {
        self.numerator
    }

    pub fn denominator(&self) -> Number {
        self.denominator
    }

    /// The floating-point quotient `numerator / denominator`.
    pub fn decimal(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Truthiness: false only for a zero numerator.
    pub fn as_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Returns a new fraction with both components divided by their
    /// greatest common factor.
    ///
    /// The division is real division, so the components come back as floats.
    /// Components without an integral form share no factor and are divided by 1.
    ///
    /// # Examples
    /// ```
    /// use nums::core::Number;
    /// use nums::fraction::Fraction;
    ///
    /// let half = Fraction::new(5, 10).unwrap().simplify();
    /// assert_eq!(half.fraction(), (Number::Float(1.0), Number::Float(2.0)));
    /// ```
    pub fn simplify(&self) -> Fraction {
        let divisor = match integral_operands(self.numerator, self.denominator) {
            Ok(Some((n, d))) => integral_gcf(n, d),
            _ => 1,
        };
        // gcf is 0 only for a zero numerator
        let divisor = if divisor == 0 { 1.0 } else { divisor as f64 };

        // A non-zero divisor of a non-zero denominator leaves it non-zero.
        Fraction {
            numerator: Number::Float(self.numerator.to_f64() / divisor),
            denominator: Number::Float(self.denominator.to_f64() / divisor),
        }
    }

    /// Replaces both components, validating them like [`Fraction::new`].
    /// On error the fraction is left unchanged.
    pub fn change(&mut self, numerator: impl Into<Number>, denominator: impl Into<Number>) -> Result<()> {
        *self = Fraction::new(numerator, denominator)?;
        Ok(())
    }

    /// `denominator / numerator`; fails with `ZeroDenominator` for a zero fraction.
    pub fn reciprocal(&self) -> Result<Fraction> {
        Fraction::new(self.denominator, self.numerator)
    }

    /// Rescales in place so the denominator becomes `denominator`,
    /// keeping the value.
    ///
    /// # Examples
    /// ```
    /// use nums::fraction::Fraction;
    ///
    /// let mut f = Fraction::new(1, 5).unwrap();
    /// f.make_denom(25).unwrap();
    /// assert_eq!(f.to_string(), "5.0/25");
    /// ```
    pub fn make_denom(&mut self, denominator: impl Into<Number>) -> Result<()> {
        let target = denominator.into().validate()?;
        let ratio = self.denominator.true_div(target)?;
        let numerator = self.numerator.true_div(ratio)?;
        self.change(numerator, target)
    }

    /// Rescales in place so the numerator becomes `numerator`, keeping the value.
    ///
    /// Fails with `DivisionByZero` when `numerator` is zero or when the
    /// current numerator is zero.
    pub fn make_num(&mut self, numerator: impl Into<Number>) -> Result<()> {
        let target = numerator.into().validate()?;
        let ratio = self.numerator.true_div(target)?;
        let denominator = self.denominator.true_div(ratio)?;
        self.change(target, denominator)
    }

    /// Rescales `other` to this fraction's denominator. Only `other` changes.
    pub fn make_same(&self, other: &mut Fraction) -> Result<()> {
        other.make_denom(self.denominator)
    }

    /// `n / 1` rescaled to this fraction's denominator, then simplified.
    pub fn make_fraction(&self, n: impl Into<Number>) -> Result<Fraction> {
        let mut f = Fraction::whole(n)?;
        f.make_denom(self.denominator)?;
        Ok(f.simplify())
    }

    /// Lowest common denominator of two fractions with integral denominators.
    pub fn lcd(&self, other: &Fraction) -> Result<u64> {
        match integral_operands(self.denominator, other.denominator)? {
            Some((a, b)) => lcm(a, b),
            None => Err(NumsError::invalid_value(format!(
                "no common denominator for {} and {}",
                self.denominator, other.denominator
            ))),
        }
    }

    /// Sum of this fraction and `rhs`, simplified.
    ///
    /// Both sides are simplified and the right side is rescaled to the left
    /// side's denominator before the numerators are added.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> Result<Fraction> {
        self.combine(rhs.into(), |a, b| a + b)
    }

    /// Difference of this fraction and `rhs`, simplified.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> Result<Fraction> {
        self.combine(rhs.into(), |a, b| a - b)
    }

    /// Product of this fraction and `rhs`; not simplified.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let rhs = self.coerce(rhs.into())?;
        Fraction::new(self.numerator * rhs.numerator, self.denominator * rhs.denominator)
    }

    /// Quotient of this fraction and `rhs`, as the product with its reciprocal.
    ///
    /// Dividing by a zero fraction fails with `ZeroDenominator`.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let rhs = self.coerce(rhs.into())?;
        self.checked_mul(rhs.reciprocal()?)
    }

    /// Lazily expands this fraction into continued-fraction coefficients.
    ///
    /// # Examples
    /// ```
    /// use nums::fraction::Fraction;
    ///
    /// let f: Fraction = "3.245".parse().unwrap();
    /// let terms: Vec<i64> = f.continued_fraction().unwrap().collect();
    /// assert_eq!(terms, vec![3, 4, 12, 4]);
    /// ```
    pub fn continued_fraction(&self) -> Result<ContinuedFraction> {
        Ok(ContinuedFraction::new(Ratio::try_from(*self)?))
    }

    fn combine(&self, rhs: Operand, op: impl Fn(Number, Number) -> Number) -> Result<Fraction> {
        let rhs = self.coerce(rhs)?;
        let left = self.simplify();
        let mut right = rhs.simplify();
        right.make_denom(left.denominator)?;
        let combined = Fraction::new(op(left.numerator, right.numerator), left.denominator)?;
        trace!("combine {} with {} -> {}", self, rhs, combined);
        Ok(combined.simplify())
    }

    fn coerce(&self, operand: Operand) -> Result<Fraction> {
        match operand {
            Operand::Fraction(f) => Ok(f),
            Operand::Number(n) => self.make_fraction(n),
        }
    }
}

impl<T: Into<Operand>> Add<T> for Fraction {
    type Output = Result<Fraction>;

    fn add(self, rhs: T) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Fraction {
    type Output = Result<Fraction>;

    fn sub(self, rhs: T) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<T: Into<Operand>> Mul<T> for Fraction {
    type Output = Result<Fraction>;

    fn mul(self, rhs: T) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<T: Into<Operand>> Div<T> for Fraction {
    type Output = Result<Fraction>;

    fn div(self, rhs: T) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Compares by cross-multiplication; neither side is rescaled.
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = match (self.numerator, other.denominator, other.numerator, self.denominator) {
            // i64 products always fit in i128
            (Number::Int(a), Number::Int(d), Number::Int(c), Number::Int(b)) => {
                (a as i128 * d as i128).cmp(&(c as i128 * b as i128))
            }
            _ => {
                let left = self.numerator * other.denominator;
                let right = other.numerator * self.denominator;
                left.partial_cmp(&right)?
            }
        };
        if self.denominator.is_negative() != other.denominator.is_negative() {
            Some(ordering.reverse())
        } else {
            Some(ordering)
        }
    }
}

/// Even positions give the numerator, odd positions the denominator.
impl Index<usize> for Fraction {
    type Output = Number;

    fn index(&self, index: usize) -> &Number {
        if index % 2 == 0 {
            &self.numerator
        } else {
            &self.denominator
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `"numerator/denominator"` into float components, or a bare number as `n/1`.
impl FromStr for Fraction {
    type Err = NumsError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [numerator] => Fraction::new(parse_component(numerator)?, 1.0),
            [numerator, denominator] => {
                Fraction::new(parse_component(numerator)?, parse_component(denominator)?)
            }
            _ => Err(NumsError::invalid_value(format!(
                "{:?} must have the form \"numerator/denominator\"",
                s
            ))),
        }
    }
}

fn parse_component(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| NumsError::invalid_type(format!("{:?} must be an integer or a float", text)))
}

impl TryFrom<FractionParts> for Fraction {
    type Error = NumsError;

    fn try_from(parts: FractionParts) -> Result<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

impl From<Fraction> for FractionParts {
    fn from(f: Fraction) -> Self {
        FractionParts {
            numerator: f.numerator,
            denominator: f.denominator,
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction {
            numerator: Number::Int(n),
            denominator: Number::Int(1),
        }
    }
}

impl TryFrom<f64> for Fraction {
    type Error = NumsError;

    fn try_from(n: f64) -> Result<Self> {
        Fraction::whole(n)
    }
}

impl From<Ratio<i64>> for Fraction {
    fn from(ratio: Ratio<i64>) -> Self {
        Fraction {
            numerator: Number::Int(*ratio.numer()),
            denominator: Number::Int(*ratio.denom()),
        }
    }
}

/// Exact rational value; float components are read through their decimal form.
impl TryFrom<Fraction> for Ratio<i64> {
    type Error = NumsError;

    fn try_from(f: Fraction) -> Result<Self> {
        let numerator = f.numerator.to_ratio()?;
        let denominator = f.denominator.to_ratio()?;
        if denominator == Ratio::from_integer(0) {
            return Err(NumsError::DivisionByZero);
        }
        CheckedDiv::checked_div(&numerator, &denominator)
            .ok_or_else(|| NumsError::invalid_value(format!("{} overflows an exact ratio", f)))
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> Self {
        f.decimal()
    }
}

/// Integer conversions truncate the decimal value.
impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        self.decimal().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.decimal().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(NumsError::ZeroDenominator));
        assert_eq!(Fraction::new(1.0, 0.0), Err(NumsError::ZeroDenominator));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(Fraction::new(f64::NAN, 2), Err(NumsError::InvalidType { .. })));
        assert!(matches!(Fraction::new(1, f64::INFINITY), Err(NumsError::InvalidType { .. })));
    }

    #[test]
    fn test_whole_defaults_denominator() {
        let f = Fraction::whole(0.2).unwrap();
        assert_eq!(f.fraction(), (Number::Float(0.2), Number::Int(1)));
        assert_eq!(Fraction::from(7).to_string(), "7/1");
    }

    #[test]
    fn test_parse_gives_float_components() {
        let f: Fraction = "1/5".parse().unwrap();
        assert_eq!(f.fraction(), (Number::Float(1.0), Number::Float(5.0)));
        assert!(f.numerator().is_float());
        assert_eq!(f.to_string(), "1.0/5.0");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("1/0".parse::<Fraction>(), Err(NumsError::ZeroDenominator));
        assert!(matches!("a/2".parse::<Fraction>(), Err(NumsError::InvalidType { .. })));
        assert!(matches!("1/2/3".parse::<Fraction>(), Err(NumsError::InvalidValue { .. })));
        assert_eq!("0.25".parse::<Fraction>().unwrap().decimal(), 0.25);
    }

    #[test]
    fn test_index_alternates() {
        let f = frac(3, 4);
        assert_eq!(f[0], Number::Int(3));
        assert_eq!(f[1], Number::Int(4));
        assert_eq!(f[2], Number::Int(3));
        assert_eq!(f[5], Number::Int(4));
    }

    #[test]
    fn test_truthiness_and_conversions() {
        assert!(!frac(0, 3).as_bool());
        assert!(frac(1, 3).as_bool());
        assert_eq!(f64::from(frac(1, 4)), 0.25);
        assert_eq!(frac(7, 2).to_i64(), Some(3));
        assert_eq!(frac(-7, 2).to_i64(), Some(-3));
    }

    #[test]
    fn test_simplify() {
        let f = frac(5, 10).simplify();
        assert_eq!(f.fraction(), (Number::Float(1.0), Number::Float(2.0)));
        assert_eq!(frac(0, 5).simplify().fraction(), (Number::Float(0.0), Number::Float(5.0)));
        assert_eq!(frac(7, 13).simplify().fraction(), (Number::Float(7.0), Number::Float(13.0)));
    }

    #[test]
    fn test_simplify_non_integral_is_unchanged() {
        let f = Fraction::new(0.5, 3).unwrap().simplify();
        assert_eq!(f.fraction(), (Number::Float(0.5), Number::Float(3.0)));
    }

    #[test]
    fn test_make_denom() {
        let mut f = frac(1, 5);
        f.make_denom(25).unwrap();
        assert_eq!(f.fraction(), (Number::Float(5.0), Number::Int(25)));
        assert_eq!(f.make_denom(0), Err(NumsError::DivisionByZero));
        assert_eq!(f.fraction(), (Number::Float(5.0), Number::Int(25)), "unchanged after error");
    }

    #[test]
    fn test_make_num() {
        let mut f = frac(1, 5);
        f.make_num(25).unwrap();
        assert_eq!(f.fraction(), (Number::Int(25), Number::Float(125.0)));
        assert_eq!(f.make_num(0), Err(NumsError::DivisionByZero));

        let mut zero = frac(0, 5);
        assert_eq!(zero.make_num(3), Err(NumsError::DivisionByZero));
    }

    #[test]
    fn test_make_same_mutates_other_only() {
        let a = frac(1, 5);
        let mut b = frac(23, 15);
        a.make_same(&mut b).unwrap();
        assert_eq!(a.fraction(), (Number::Int(1), Number::Int(5)));
        assert_eq!(b.denominator(), Number::Int(5));
        assert!((b.numerator().to_f64() - 23.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_make_fraction() {
        let f = frac(1, 2).make_fraction(25).unwrap();
        assert_eq!(f.fraction(), (Number::Float(25.0), Number::Float(1.0)));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(frac(2, 5).reciprocal().unwrap().fraction(), (Number::Int(5), Number::Int(2)));
        assert_eq!(frac(0, 5).reciprocal(), Err(NumsError::ZeroDenominator));
    }

    #[test]
    fn test_lcd() {
        assert_eq!(frac(1, 4).lcd(&frac(1, 6)).unwrap(), 12);
        assert!(frac(1, 4).lcd(&Fraction::new(1, 0.5).unwrap()).is_err());
    }

    #[test]
    fn test_comparison_cross_multiplies() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(1, 2) >= frac(2, 4));
        assert_eq!(frac(1, 2), frac(2, 4));
        assert_ne!(frac(1, 2), frac(1, 3));
        assert!(frac(1, -2) < frac(1, 3));
        assert!(frac(-1, -2) > frac(1, 3));
    }

    #[test]
    fn test_large_integral_comparison() {
        let big = frac(i64::MAX, 2);
        let smaller = frac(i64::MAX - 1, 2);
        assert_ne!(big, smaller);
        assert!(big > smaller);
        assert!(frac(i64::MIN, 3) < frac(i64::MIN + 1, 3));
        assert_eq!(frac(i64::MAX, i64::MAX), frac(1, 1));
        assert!(frac(i64::MAX, -2) < frac(i64::MAX - 1, -2));
    }

    #[test]
    fn test_comparison_leaves_operands_untouched() {
        let a = frac(1, 2);
        let b = frac(1, 3);
        assert!(!(a < b));
        assert_eq!(b.fraction(), (Number::Int(1), Number::Int(3)));
    }

    #[test]
    fn test_operators_with_bare_numbers() {
        let half = frac(1, 2);
        assert_eq!((half + 1).unwrap().decimal(), 1.5);
        assert_eq!((half - 1).unwrap().decimal(), -0.5);
        assert_eq!((half * 3).unwrap().decimal(), 1.5);
        assert_eq!((half / 2).unwrap().decimal(), 0.25);
        assert_eq!((half * 0.5).unwrap().decimal(), 0.25);
    }

    #[test]
    fn test_divide_by_zero_fraction() {
        assert_eq!(frac(1, 2) / frac(0, 3), Err(NumsError::ZeroDenominator));
        assert_eq!(frac(1, 2) / 0, Err(NumsError::ZeroDenominator));
    }

    #[test]
    fn test_ratio_conversions() {
        let ratio = Ratio::try_from(frac(6, 8)).unwrap();
        assert_eq!(ratio, Ratio::new(3, 4));
        let back = Fraction::from(Ratio::new(3, 4));
        assert_eq!(back.fraction(), (Number::Int(3), Number::Int(4)));
        let parsed: Fraction = "0.2/0.4".parse().unwrap();
        assert_eq!(Ratio::try_from(parsed).unwrap(), Ratio::new(1, 2));
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&frac(1, 2)).unwrap();
        assert_eq!(json, r#"{"numerator":1,"denominator":2}"#);
        let back: Fraction = serde_json::from_str(r#"{"numerator":1.5,"denominator":3}"#).unwrap();
        assert_eq!(back.fraction(), (Number::Float(1.5), Number::Int(3)));
        assert!(serde_json::from_str::<Fraction>(r#"{"numerator":1,"denominator":0}"#).is_err());
    }
}
