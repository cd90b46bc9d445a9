// src/integer_math/mod.rs

pub mod factors;
pub mod prime_sieve;

pub use factors::{common_factors, factors, gcf, lcm, prime_factors};
pub use prime_sieve::PrimeSieve;
