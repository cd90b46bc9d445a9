// src/expression/function.rs

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::core::{NumsError, Result};
use crate::expression::parser::Expr;

/// A parsed expression together with stored variable values.
///
/// # Examples
/// ```
/// use nums::expression::Function;
///
/// let mut f = Function::parse("2x^2 + y").unwrap();
/// assert_eq!(f.evaluate(&[("x", 3.0), ("y", 1.0)]).unwrap(), 19.0);
/// // the last values are remembered
/// assert_eq!(f.evaluate(&[]).unwrap(), 19.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    expr: Expr,
    variables: BTreeMap<String, f64>,
}

impl Function {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Function {
            expr: Expr::parse(text)?,
            variables: BTreeMap::new(),
        })
    }

    pub fn expression(&self) -> &Expr {
        &self.expr
    }

    pub fn variables(&self) -> &BTreeMap<String, f64> {
        &self.variables
    }

    /// Creates each variable with the value 0.
    pub fn create_variable(&mut self, names: &[&str]) {
        for name in names {
            self.set_variable(name, 0.0);
        }
    }

    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn del_variable(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            if self.variables.remove(*name).is_none() {
                return Err(NumsError::invalid_value(format!("no variable named '{}'", name)));
            }
        }
        Ok(())
    }

    /// Variables used by the expression, in order of first appearance.
    pub fn detect_variables(&self) -> Vec<String> {
        self.expr.variables()
    }

    /// Evaluates with the stored values when `vars` is empty. Otherwise
    /// `vars` replaces the stored values first.
    pub fn evaluate(&mut self, vars: &[(&str, f64)]) -> Result<f64> {
        if !vars.is_empty() {
            self.variables = vars.iter().map(|&(name, value)| (name.to_string(), value)).collect();
        }
        trace!("evaluating {} with {:?}", self.expr, self.variables);
        let variables = &self.variables;
        self.expr.evaluate_with(&|name| variables.get(name).copied())
    }

    /// Like [`Function::evaluate`], with every detected variable missing
    /// from `vars` set to `default`.
    pub fn evaluate_with_default(&mut self, default: f64, vars: &[(&str, f64)]) -> Result<f64> {
        let mut all: BTreeMap<String, f64> = vars.iter().map(|&(name, value)| (name.to_string(), value)).collect();
        for name in self.detect_variables() {
            all.entry(name).or_insert(default);
        }
        if !all.is_empty() {
            self.variables = all;
        }
        let variables = &self.variables;
        self.expr.evaluate_with(&|name| variables.get(name).copied())
    }
}

impl FromStr for Function {
    type Err = NumsError;

    fn from_str(s: &str) -> Result<Self> {
        Function::parse(s)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}
