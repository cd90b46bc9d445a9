// src/sequences/mod.rs
//
// Sequence generators: primes, Fibonacci, triangle numbers, Collatz chains
// and decimal ranges.

pub mod collatz;
pub mod dec_range;
pub mod fibonacci;
pub mod primes;
pub mod triangle;

pub use crate::integer_math::prime_sieve::PrimeSieve;
pub use collatz::{collatz, collatz_with_limit, is_collatz, DEFAULT_MAX_ITERATIONS};
pub use dec_range::{dec_range, DecRange};
pub use fibonacci::{fib, prev_fibs, Fibonacci};
pub use primes::{is_prime, n_primes, nth_prime, prev_primes, prime_range};
pub use triangle::{prev_tri_nums, tri_num};
