// src/number_theory/geometry.rs

use crate::core::{NumsError, Result};

/// Area of the triangle with sides `a`, `b`, `c`.
///
/// With a `height`, the area is half the height times the longest side.
/// Otherwise Heron's formula is used.
///
/// # Examples
/// ```
/// use nums::number_theory::triangle_area;
///
/// assert_eq!(triangle_area(6.0, 8.0, 10.0, None).unwrap(), 24.0);
/// assert_eq!(triangle_area(6.0, 8.0, 10.0, Some(5.0)).unwrap(), 25.0);
/// ```
pub fn triangle_area(a: f64, b: f64, c: f64, height: Option<f64>) -> Result<f64> {
    for side in [a, b, c] {
        if !side.is_finite() || side <= 0.0 {
            return Err(NumsError::invalid_value(format!("side {} must be positive", side)));
        }
    }
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(NumsError::invalid_value(format!(
            "sides {}, {}, {} do not form a triangle",
            a, b, c
        )));
    }

    match height {
        Some(h) if !h.is_finite() || h <= 0.0 => {
            Err(NumsError::invalid_value(format!("height {} must be positive", h)))
        }
        Some(h) => Ok(0.5 * h * a.max(b).max(c)),
        None => {
            let s = (a + b + c) / 2.0;
            Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
        }
    }
}
