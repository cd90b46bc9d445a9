// src/number_theory/mod.rs
//
// Number manipulation helpers: rounding, quadratic roots, Gaussian sums,
// numeric integration, trigonometry and triangle geometry. Factor analysis
// lives in integer_math and is re-exported here.

pub mod geometry;
pub mod integral;
pub mod trig;

pub use crate::integer_math::factors::{common_factors, factors, gcf, prime_factors};
pub use geometry::triangle_area;
pub use integral::{integral, integral_of, integral_with_shapes, IntegralMethod, IntegralOptions, Shape};
pub use trig::{cos_d, cos_r, deg_to_rad, rad_to_deg, sin_d, sin_r, tan_d, tan_r};

use crate::core::{NumsError, Result};

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
pub const E: f64 = std::f64::consts::E;

/// Rounds `n` to the nearest multiple of `base`, ties to even.
///
/// # Examples
/// ```
/// use nums::number_theory::round_to_base;
///
/// assert_eq!(round_to_base(5.0, 10.0).unwrap(), 0.0);
/// assert_eq!(round_to_base(160.0, 100.0).unwrap(), 200.0);
/// ```
pub fn round_to_base(n: f64, base: f64) -> Result<f64> {
    if base == 0.0 {
        return Err(NumsError::DivisionByZero);
    }
    Ok((n / base).round_ties_even() * base)
}

/// Real roots of `ax² + bx + c`, or None when there are no two distinct real roots.
///
/// # Examples
/// ```
/// use nums::number_theory::quad_form;
///
/// assert_eq!(quad_form(1.0, -4.0, 0.0).unwrap(), Some((4.0, 0.0)));
/// ```
pub fn quad_form(a: f64, b: f64, c: f64) -> Result<Option<(f64, f64)>> {
    if a == 0.0 {
        return Err(NumsError::DivisionByZero);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return Ok(None);
    }
    let root = discriminant.sqrt();
    Ok(Some(((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))))
}

/// Sum of an evenly spaced sequence from its endpoints.
///
/// Assumes the values form an arithmetic progression.
pub fn gauss_sum(numbers: &[f64]) -> Result<f64> {
    match (numbers.first(), numbers.last()) {
        (Some(first), Some(last)) => Ok((first + last) * (numbers.len() as f64 / 2.0)),
        _ => Err(NumsError::invalid_value("sequence must not be empty")),
    }
}
