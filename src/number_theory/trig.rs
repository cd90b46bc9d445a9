// src/number_theory/trig.rs
//
// Trigonometry that returns exact values at the special angles where the
// floating point functions leave residue (sin(π) = 1.2e-16 and so on).

use std::f64::consts::PI;

use lazy_static::lazy_static;

const TOLERANCE: f64 = 1e-12;

lazy_static! {
    static ref SIN_TABLE: Vec<(f64, f64)> = vec![
        (0.0, 0.0),
        (PI / 6.0, 0.5),
        (PI / 2.0, 1.0),
        (5.0 * PI / 6.0, 0.5),
        (PI, 0.0),
        (7.0 * PI / 6.0, -0.5),
        (3.0 * PI / 2.0, -1.0),
        (11.0 * PI / 6.0, -0.5),
    ];
    static ref COS_TABLE: Vec<(f64, f64)> = vec![
        (0.0, 1.0),
        (PI / 3.0, 0.5),
        (PI / 2.0, 0.0),
        (2.0 * PI / 3.0, -0.5),
        (PI, -1.0),
        (4.0 * PI / 3.0, -0.5),
        (3.0 * PI / 2.0, 0.0),
        (5.0 * PI / 3.0, 0.5),
    ];
    // None marks the asymptotes
    static ref TAN_TABLE: Vec<(f64, Option<f64>)> = vec![
        (0.0, Some(0.0)),
        (PI / 4.0, Some(1.0)),
        (PI / 2.0, None),
        (3.0 * PI / 4.0, Some(-1.0)),
        (PI, Some(0.0)),
        (5.0 * PI / 4.0, Some(1.0)),
        (3.0 * PI / 2.0, None),
        (7.0 * PI / 4.0, Some(-1.0)),
    ];
}

/// Finds `angle` in a table of angles in `[0, 2π)`.
fn lookup<T: Copy>(table: &[(f64, T)], angle: f64) -> Option<T> {
    let normalized = angle.rem_euclid(std::f64::consts::TAU);
    table.iter().find_map(|&(special, value)| {
        let distance = (normalized - special).abs();
        // angles just below 2π wrap around to 0
        let wrapped = (std::f64::consts::TAU - distance).abs();
        (distance < TOLERANCE || wrapped < TOLERANCE).then_some(value)
    })
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Sine of an angle in radians, exact at multiples of π/6 and π/2.
pub fn sin_r(theta: f64) -> f64 {
    lookup(SIN_TABLE.as_slice(), theta).unwrap_or_else(|| theta.sin())
}

/// Cosine of an angle in radians, exact at multiples of π/3 and π/2.
pub fn cos_r(theta: f64) -> f64 {
    lookup(COS_TABLE.as_slice(), theta).unwrap_or_else(|| theta.cos())
}

/// Tangent of an angle in radians, `None` where it is undefined.
///
/// # Examples
/// ```
/// use nums::number_theory::tan_r;
/// use std::f64::consts::PI;
///
/// assert_eq!(tan_r(PI / 4.0), Some(1.0));
/// assert_eq!(tan_r(PI / 2.0), None);
/// ```
pub fn tan_r(theta: f64) -> Option<f64> {
    match lookup(TAN_TABLE.as_slice(), theta) {
        Some(value) => value,
        None => Some(theta.tan()),
    }
}

pub fn sin_d(degrees: f64) -> f64 {
    sin_r(deg_to_rad(degrees))
}

pub fn cos_d(degrees: f64) -> f64 {
    cos_r(deg_to_rad(degrees))
}

pub fn tan_d(degrees: f64) -> Option<f64> {
    tan_r(deg_to_rad(degrees))
}
