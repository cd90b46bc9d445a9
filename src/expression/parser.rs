// src/expression/parser.rs
//
// Recursive descent over the token stream:
//
//   sum     := product (('+' | '-') product)*
//   product := unary (('*' | '/') unary | <implicit> power)*
//   unary   := ('-' | '+') unary | power
//   power   := primary ('^' unary)?
//   primary := number | constant | variable | function '(' sum ')' | '(' sum ')'
//
// Exponentiation binds tighter than unary minus and is right associative,
// so -2^2 is -4 and 2^3^2 is 512.

use std::fmt;

use crate::core::{NumsError, Result};
use crate::expression::tokens::{tokenize, Token};
use crate::number_theory::trig::{cos_r, sin_r, tan_r};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 4,
        }
    }

    fn symbol(&self) -> &str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

impl Constant {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            "tau" => Some(Constant::Tau),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
            Constant::Tau => "tau",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
            Constant::Tau => std::f64::consts::TAU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log10,
    Exp,
    Abs,
    Floor,
    Ceil,
}

impl MathFn {
    /// `log` is the natural logarithm and `fabs` is `abs`.
    fn from_name(name: &str) -> Option<Self> {
        let f = match name {
            "sin" => MathFn::Sin,
            "cos" => MathFn::Cos,
            "tan" => MathFn::Tan,
            "asin" => MathFn::Asin,
            "acos" => MathFn::Acos,
            "atan" => MathFn::Atan,
            "sqrt" => MathFn::Sqrt,
            "log" | "ln" => MathFn::Ln,
            "log10" => MathFn::Log10,
            "exp" => MathFn::Exp,
            "abs" | "fabs" => MathFn::Abs,
            "floor" => MathFn::Floor,
            "ceil" => MathFn::Ceil,
            _ => return None,
        };
        Some(f)
    }

    pub fn name(&self) -> &str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Asin => "asin",
            MathFn::Acos => "acos",
            MathFn::Atan => "atan",
            MathFn::Sqrt => "sqrt",
            MathFn::Ln => "ln",
            MathFn::Log10 => "log10",
            MathFn::Exp => "exp",
            MathFn::Abs => "abs",
            MathFn::Floor => "floor",
            MathFn::Ceil => "ceil",
        }
    }

    pub fn apply(&self, x: f64) -> Result<f64> {
        let domain = |ok: bool| {
            if ok {
                Ok(())
            } else {
                Err(NumsError::invalid_value(format!("math domain error: {}({})", self.name(), x)))
            }
        };
        match self {
            MathFn::Sin => Ok(sin_r(x)),
            MathFn::Cos => Ok(cos_r(x)),
            MathFn::Tan => tan_r(x).ok_or_else(|| NumsError::invalid_value(format!("tan({}) is undefined", x))),
            MathFn::Asin => domain((-1.0..=1.0).contains(&x)).map(|_| x.asin()),
            MathFn::Acos => domain((-1.0..=1.0).contains(&x)).map(|_| x.acos()),
            MathFn::Atan => Ok(x.atan()),
            MathFn::Sqrt => domain(x >= 0.0).map(|_| x.sqrt()),
            MathFn::Ln => domain(x > 0.0).map(|_| x.ln()),
            MathFn::Log10 => domain(x > 0.0).map(|_| x.log10()),
            MathFn::Exp => Ok(x.exp()),
            MathFn::Abs => Ok(x.abs()),
            MathFn::Floor => Ok(x.floor()),
            MathFn::Ceil => Ok(x.ceil()),
        }
    }
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    Variable(String),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(MathFn, Box<Expr>),
}

impl Expr {
    pub fn parse(s: &str) -> Result<Expr> {
        let tokens = tokenize(s)?;
        if tokens.is_empty() {
            return Err(NumsError::parse("empty expression"));
        }
        let mut parser = Parser { tokens, pos: 0, depth: 0 };
        let parsed = parser.sum()?;
        match parser.peek() {
            None => Ok(parsed.expr),
            Some(token) => Err(NumsError::parse(format!("unexpected {:?} at token {}", token, parser.pos))),
        }
    }

    /// Evaluates the tree, resolving variables through `lookup`.
    pub fn evaluate_with(&self, lookup: &dyn Fn(&str) -> Option<f64>) -> Result<f64> {
        match self {
            Expr::Number(v) => Ok(*v),
            Expr::Constant(c) => Ok(c.value()),
            Expr::Variable(name) => {
                lookup(name).ok_or_else(|| NumsError::invalid_value(format!("name '{}' is not defined", name)))
            }
            Expr::Neg(inner) => Ok(-inner.evaluate_with(lookup)?),
            Expr::Call(f, arg) => f.apply(arg.evaluate_with(lookup)?),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.evaluate_with(lookup)?;
                let b = rhs.evaluate_with(lookup)?;
                match op {
                    BinaryOp::Add => Ok(a + b),
                    BinaryOp::Sub => Ok(a - b),
                    BinaryOp::Mul => Ok(a * b),
                    BinaryOp::Div if b == 0.0 => Err(NumsError::DivisionByZero),
                    BinaryOp::Div => Ok(a / b),
                    BinaryOp::Pow if a == 0.0 && b < 0.0 => Err(NumsError::DivisionByZero),
                    BinaryOp::Pow => {
                        let value = a.powf(b);
                        if value.is_nan() {
                            Err(NumsError::invalid_value(format!("math domain error: {}^{}", a, b)))
                        } else {
                            Ok(value)
                        }
                    }
                }
            }
        }
    }

    /// Variable names in order of first appearance.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Expr::Variable(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Expr::Neg(inner) | Expr::Call(_, inner) => inner.collect_variables(names),
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Expr::Number(_) | Expr::Constant(_) => {}
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary(op, _, _) => op.precedence(),
            Expr::Neg(_) => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn child(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
            if parens {
                write!(f, "({})", expr)
            } else {
                write!(f, "{}", expr)
            }
        }

        match self {
            Expr::Number(v) => write!(f, "{}", v),
            Expr::Constant(c) => f.write_str(c.name()),
            Expr::Variable(name) => f.write_str(name),
            Expr::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                child(f, inner, inner.precedence() <= 3)
            }
            Expr::Binary(op, lhs, rhs) => {
                let p = op.precedence();
                let left_parens = lhs.precedence() < p || (*op == BinaryOp::Pow && lhs.precedence() <= p);
                let right_parens = rhs.precedence() < p
                    || (rhs.precedence() == p && matches!(op, BinaryOp::Sub | BinaryOp::Div));
                child(f, lhs, left_parens)?;
                f.write_str(op.symbol())?;
                child(f, rhs, right_parens)
            }
        }
    }
}

/// Deepest tree the parser builds, and deepest nesting it follows.
/// Evaluation and printing recurse over the tree.
pub const MAX_DEPTH: usize = 256;

fn too_deep() -> NumsError {
    NumsError::parse(format!("expression nested too deeply (limit {})", MAX_DEPTH))
}

/// A subtree with its height.
struct Parsed {
    expr: Expr,
    height: usize,
}

impl Parsed {
    fn leaf(expr: Expr) -> Self {
        Parsed { expr, height: 1 }
    }

    fn node(expr: Expr, child_height: usize) -> Result<Self> {
        let height = child_height + 1;
        if height > MAX_DEPTH {
            return Err(too_deep());
        }
        Ok(Parsed { expr, height })
    }

    fn binary(op: BinaryOp, lhs: Parsed, rhs: Parsed) -> Result<Self> {
        let child_height = lhs.height.max(rhs.height);
        Parsed::node(Expr::Binary(op, Box::new(lhs.expr), Box::new(rhs.expr)), child_height)
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    // active `unary` calls; every recursive cycle of the grammar passes through it
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn sum(&mut self) -> Result<Parsed> {
        let mut lhs = self.product()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.product()?;
            lhs = Parsed::binary(op, lhs, rhs)?;
        }
    }

    fn product(&mut self) -> Result<Parsed> {
        let mut lhs = self.unary()?;
        loop {
            let (op, rhs) = match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    (BinaryOp::Mul, self.unary()?)
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    (BinaryOp::Div, self.unary()?)
                }
                // 2x, 3sin(x), (x+1)(x-1)
                Some(Token::Number(_)) | Some(Token::Ident(_)) | Some(Token::LParen) => {
                    (BinaryOp::Mul, self.unary_unsigned()?)
                }
                _ => return Ok(lhs),
            };
            lhs = Parsed::binary(op, lhs, rhs)?;
        }
    }

    fn unary(&mut self) -> Result<Parsed> {
        self.nested(|parser| {
            if parser.eat(&Token::Minus) {
                let inner = parser.unary()?;
                let height = inner.height;
                return Parsed::node(Expr::Neg(Box::new(inner.expr)), height);
            }
            if parser.eat(&Token::Plus) {
                return parser.unary();
            }
            parser.power()
        })
    }

    /// A factor of an implicit product: a power without a leading sign.
    fn unary_unsigned(&mut self) -> Result<Parsed> {
        self.nested(|parser| parser.power())
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<Parsed>) -> Result<Parsed> {
        if self.depth >= MAX_DEPTH {
            return Err(too_deep());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn power(&mut self) -> Result<Parsed> {
        let base = self.primary()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Parsed::binary(BinaryOp::Pow, base, exponent);
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Parsed> {
        match self.next() {
            Some(Token::Number(v)) => Ok(Parsed::leaf(Expr::Number(v))),
            Some(Token::LParen) => {
                let inner = self.sum()?;
                self.expect_close()?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                if let Some(func) = MathFn::from_name(&name) {
                    if !self.eat(&Token::LParen) {
                        return Err(NumsError::parse(format!("{} must be called with parentheses", name)));
                    }
                    let arg = self.sum()?;
                    self.expect_close()?;
                    let height = arg.height;
                    Parsed::node(Expr::Call(func, Box::new(arg.expr)), height)
                } else if let Some(constant) = Constant::from_name(&name) {
                    Ok(Parsed::leaf(Expr::Constant(constant)))
                } else {
                    Ok(Parsed::leaf(Expr::Variable(name)))
                }
            }
            Some(token) => Err(NumsError::parse(format!("unexpected {:?}", token))),
            None => Err(NumsError::parse("unexpected end of expression")),
        }
    }

    fn expect_close(&mut self) -> Result<()> {
        if self.eat(&Token::RParen) {
            Ok(())
        } else {
            Err(NumsError::parse("missing closing parenthesis"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Result<f64> {
        Expr::parse(s)?.evaluate_with(&|_| None)
    }

    fn eval_x(s: &str, x: f64) -> f64 {
        Expr::parse(s).unwrap().evaluate_with(&|name| (name == "x").then_some(x)).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(eval("(1 + 2) * 3").unwrap(), 9.0);
        assert_eq!(eval("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(eval("2 ^ 3 ^ 2").unwrap(), 512.0);
        assert_eq!(eval("-2 ^ 2").unwrap(), -4.0);
        assert_eq!(eval("2 ** -1").unwrap(), 0.5);
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(eval_x("2x", 3.0), 6.0);
        assert_eq!(eval_x("2x^2", 3.0), 18.0);
        assert_eq!(eval_x("3(x + 1)", 1.0), 6.0);
        assert_eq!(eval_x("(x + 1)(x - 1)", 3.0), 8.0);
        assert_eq!(eval_x("2sqrt(x)", 9.0), 6.0);
    }

    #[test]
    fn test_functions_and_constants() {
        assert_eq!(eval("sin(pi)").unwrap(), 0.0);
        assert_eq!(eval("cos(tau)").unwrap(), 1.0);
        assert!((eval("ln(e)").unwrap() - 1.0).abs() < 1e-15);
        assert!((eval("log10(1000)").unwrap() - 3.0).abs() < 1e-15);
        assert_eq!(eval("fabs(-2.5) + floor(1.5) + ceil(1.5)").unwrap(), 5.5);
    }

    #[test]
    fn test_evaluation_errors() {
        assert_eq!(eval("1 / 0"), Err(NumsError::DivisionByZero));
        assert!(matches!(eval("sqrt(-1)"), Err(NumsError::InvalidValue { .. })));
        assert!(matches!(eval("tan(pi / 2)"), Err(NumsError::InvalidValue { .. })));
        assert!(matches!(eval("y + 1"), Err(NumsError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Expr::parse(""), Err(NumsError::Parse { .. })));
        assert!(matches!(Expr::parse("(1 + 2"), Err(NumsError::Parse { .. })));
        assert!(matches!(Expr::parse("1 +"), Err(NumsError::Parse { .. })));
        assert!(matches!(Expr::parse("sin x"), Err(NumsError::Parse { .. })));
        assert!(matches!(Expr::parse("1 )"), Err(NumsError::Parse { .. })));
    }

    #[test]
    fn test_display_round_trips_structure() {
        for text in ["2x^2 + 3x - 1", "-(x + 1)^2", "(2^3)^2", "a - (b - c)", "x/(y*z)", "sin(x)cos(x)"] {
            let expr = Expr::parse(text).unwrap();
            let printed = expr.to_string();
            assert_eq!(Expr::parse(&printed).unwrap(), expr, "{} printed as {}", text, printed);
        }
        assert_eq!(Expr::parse("2x^2").unwrap().to_string(), "2*x^2");
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(Expr::parse(&parens), Err(NumsError::Parse { .. })));

        let signs = format!("{}1", "-".repeat(100_000));
        assert!(matches!(Expr::parse(&signs), Err(NumsError::Parse { .. })));

        let powers = vec!["2"; 100_000].join("^");
        assert!(matches!(Expr::parse(&powers), Err(NumsError::Parse { .. })));
    }

    #[test]
    fn test_long_chains_are_rejected() {
        // flat in the grammar but one tree level per operator
        let sum = vec!["1"; 100_000].join(" + ");
        assert!(matches!(Expr::parse(&sum), Err(NumsError::Parse { .. })));
        let implicit = vec!["x"; 100_000].join(" ");
        assert!(matches!(Expr::parse(&implicit), Err(NumsError::Parse { .. })));
    }

    #[test]
    fn test_moderate_nesting_is_accepted() {
        let parens = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(Expr::parse(&parens).unwrap(), Expr::Variable("x".to_string()));
        let sum = vec!["1"; 200].join(" + ");
        assert_eq!(eval(&sum).unwrap(), 200.0);
    }

    #[test]
    fn test_variables_in_order() {
        let expr = Expr::parse("y*x + x + sin(z)").unwrap();
        assert_eq!(expr.variables(), vec!["y", "x", "z"]);
    }
}
