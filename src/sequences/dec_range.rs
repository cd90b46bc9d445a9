// src/sequences/dec_range.rs

use crate::core::number::decimal_places;
use crate::core::{NumsError, Result};

/// Lazy range over floats: `start, start + step, ...` up to `stop`.
///
/// Each value is computed from its index and rounded to the number of
/// decimal places in `step`, so error does not accumulate.
#[derive(Debug, Clone)]
pub struct DecRange {
    start: f64,
    stop: f64,
    step: f64,
    scale: f64,
    index: u64,
}

impl DecRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(NumsError::invalid_type("start, stop and step must be finite"));
        }
        if step <= 0.0 {
            return Err(NumsError::invalid_value("step must be greater than zero"));
        }
        Ok(DecRange {
            start,
            stop,
            step,
            scale: 10f64.powi(decimal_places(step) as i32),
            index: 0,
        })
    }
}

impl Iterator for DecRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let raw = self.start + self.index as f64 * self.step;
        let value = (raw * self.scale).round() / self.scale;
        if value > self.stop {
            return None;
        }
        self.index += 1;
        Some(value)
    }
}

/// # Examples
/// ```
/// use nums::sequences::dec_range;
///
/// let values: Vec<f64> = dec_range(0.0, 0.5, 0.1).unwrap().collect();
/// assert_eq!(values, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
/// ```
pub fn dec_range(start: f64, stop: f64, step: f64) -> Result<DecRange> {
    DecRange::new(start, stop, step)
}
