// src/expression/mod.rs
//
// Text math expressions in one or more variables.

pub mod function;
pub mod parser;
pub mod tokens;

pub use function::Function;
pub use parser::{BinaryOp, Constant, Expr, MathFn};
