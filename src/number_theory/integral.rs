// src/number_theory/integral.rs
//
// Composite numeric integration over [start, stop] with a fixed number of
// strips ("shapes"). Samples that are not finite count as zero, so a pole
// inside the interval does not poison the whole sum.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{NumsError, Result};
use crate::expression::Function;

/// Corners of one strip: base left, top left, top right, base right.
pub type Shape = [(f64, f64); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IntegralMethod {
    Left,
    Middle,
    Right,
    Trapezoid,
    Simpson,
}

impl IntegralMethod {
    pub fn name(&self) -> &str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::Trapezoid => "trapezoid",
            Self::Simpson => "simpson",
        }
    }
}

/// Only the first letter matters: "t", "Trap" and "trapezoid" all select
/// the trapezoid rule.
impl FromStr for IntegralMethod {
    type Err = NumsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('l') => Ok(Self::Left),
            Some('m') => Ok(Self::Middle),
            Some('r') => Ok(Self::Right),
            Some('t') => Ok(Self::Trapezoid),
            Some('s') => Ok(Self::Simpson),
            _ => Err(NumsError::invalid_value(
                "The method must be 'left', 'middle', 'right', 'trapezoid', or 'simpson'",
            )),
        }
    }
}

impl TryFrom<String> for IntegralMethod {
    type Error = NumsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<IntegralMethod> for String {
    fn from(method: IntegralMethod) -> Self {
        method.name().to_string()
    }
}

impl fmt::Display for IntegralMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegralOptions {
    /// Number of strips (Simpson's rule rounds an odd count up)
    pub shapes: u32,

    /// Lower bound
    pub start: f64,

    /// Upper bound, greater than `start`
    pub stop: f64,

    pub method: IntegralMethod,
}

impl Default for IntegralOptions {
    fn default() -> Self {
        IntegralOptions {
            shapes: 1000,
            start: 0.0,
            stop: 100.0,
            method: IntegralMethod::Trapezoid,
        }
    }
}

impl IntegralOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(NumsError::invalid_type("start and stop must be finite"));
        }
        if self.shapes == 0 {
            return Err(NumsError::invalid_value("shapes must be greater than zero"));
        }
        if self.stop <= self.start {
            return Err(NumsError::invalid_value("stop must be greater than start"));
        }
        Ok(())
    }
}

/// Integral of `f` over `[options.start, options.stop]`.
///
/// # Examples
/// ```
/// use nums::number_theory::{integral, IntegralMethod, IntegralOptions};
///
/// let options = IntegralOptions { method: IntegralMethod::Simpson, ..Default::default() };
/// let area = integral(|x| x * x, &options).unwrap();
/// assert!((area - 1_000_000.0 / 3.0).abs() < 1e-6);
/// ```
pub fn integral<F: Fn(f64) -> f64>(f: F, options: &IntegralOptions) -> Result<f64> {
    integrate(&f, options, false).map(|(area, _)| area)
}

/// Like [`integral`], also returning the polygon of every strip.
/// Simpson's rule fits parabolas and returns no polygons.
pub fn integral_with_shapes<F: Fn(f64) -> f64>(f: F, options: &IntegralOptions) -> Result<(f64, Vec<Shape>)> {
    integrate(&f, options, true)
}

/// Integral of a text expression in `x`, such as `"x^2"` or `"3sin(x)"`.
///
/// Points where the expression cannot be evaluated count as zero.
pub fn integral_of(expression: &str, options: &IntegralOptions) -> Result<f64> {
    let function: Function = expression.parse()?;
    if let Some(other) = function.detect_variables().into_iter().find(|v| v != "x") {
        return Err(NumsError::invalid_value(format!(
            "expression may only use the variable x, found {}",
            other
        )));
    }
    let expr = function.expression();
    integral(
        |x| expr.evaluate_with(&|name| (name == "x").then_some(x)).unwrap_or(0.0),
        options,
    )
}

fn integrate(f: &dyn Fn(f64) -> f64, options: &IntegralOptions, keep_shapes: bool) -> Result<(f64, Vec<Shape>)> {
    options.validate()?;
    let IntegralOptions { shapes, start, stop, method } = *options;

    let n = if method == IntegralMethod::Simpson && shapes % 2 != 0 {
        shapes
            .checked_add(1)
            .ok_or_else(|| NumsError::invalid_value(format!("{} shapes cannot be rounded up to even", shapes)))?
    } else {
        shapes
    };
    let h = (stop - start) / n as f64;
    let point = |i: u32| if i == n { stop } else { start + i as f64 * h };
    let sample = |x: f64| {
        let y = f(x);
        if y.is_finite() {
            y
        } else {
            trace!("integral: f({}) = {} counted as 0", x, y);
            0.0
        }
    };

    let mut polygons = Vec::new();
    let mut strip = |x0: f64, y0: f64, x1: f64, y1: f64| {
        if keep_shapes {
            polygons.push([(x0, 0.0), (x0, y0), (x1, y1), (x1, 0.0)]);
        }
    };

    let area = match method {
        IntegralMethod::Left | IntegralMethod::Middle | IntegralMethod::Right => {
            let mut sum = 0.0;
            for i in 0..n {
                let (x0, x1) = (point(i), point(i + 1));
                let y = match method {
                    IntegralMethod::Left => sample(x0),
                    IntegralMethod::Right => sample(x1),
                    _ => sample(x0 + h / 2.0),
                };
                sum += y;
                strip(x0, y, x1, y);
            }
            sum * h
        }
        IntegralMethod::Trapezoid => {
            let mut sum = 0.0;
            let mut y0 = sample(start);
            for i in 0..n {
                let (x0, x1) = (point(i), point(i + 1));
                let y1 = sample(x1);
                sum += y0 + y1;
                strip(x0, y0, x1, y1);
                y0 = y1;
            }
            sum * h / 2.0
        }
        IntegralMethod::Simpson => {
            let mut sum = sample(start) + sample(stop);
            for i in 1..n {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                sum += weight * sample(point(i));
            }
            sum * h / 3.0
        }
    };

    debug!("integral over [{}, {}] with {} {} shapes = {}", start, stop, n, method, area);
    Ok((area, polygons))
}
