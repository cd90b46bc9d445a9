// src/core/mod.rs

pub mod error;
pub mod number;

pub use error::{NumsError, Result};
pub use number::Number;
