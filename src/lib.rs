// src/lib.rs

pub mod config;
pub mod core;
pub mod expression;
pub mod fraction;
pub mod integer_math;
pub mod number_theory;
pub mod sequences;
