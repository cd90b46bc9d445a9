// src/sequences/primes.rs

use log::debug;

use crate::core::{NumsError, Result};
use crate::integer_math::prime_sieve::PrimeSieve;

/// Trial division primality test.
///
/// # Examples
/// ```
/// use nums::sequences::is_prime;
///
/// assert!(is_prime(967));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let root = num::integer::sqrt(n);
    (3..=root).step_by(2).all(|d| n % d != 0)
}

/// Primes up to and including `n`; `n < 2` is an error.
pub fn prev_primes(n: u64) -> Result<Vec<u64>> {
    Ok(PrimeSieve::new(n)?.primes().collect())
}

/// Primes in `[a, b]`, empty when `a > b`.
pub fn prime_range(a: u64, b: u64) -> Result<Vec<u64>> {
    if a < 2 {
        return Err(NumsError::invalid_value("a must be at least 2"));
    }
    PrimeSieve::segment(a, b)
}

/// The first `n` primes.
pub fn n_primes(n: usize) -> Result<Vec<u64>> {
    if n < 1 {
        return Err(NumsError::invalid_value("n must be at least 1"));
    }
    let limit = nth_prime_upper_bound(n as u64)?;
    debug!("n_primes({}) sieving up to {}", n, limit);
    Ok(PrimeSieve::new(limit)?.primes().take(n).collect())
}

/// The `n`th prime, counting 2 as the first.
///
/// # Examples
/// ```
/// use nums::sequences::nth_prime;
///
/// assert_eq!(nth_prime(25).unwrap(), 97);
/// ```
pub fn nth_prime(n: usize) -> Result<u64> {
    n_primes(n)?
        .last()
        .copied()
        .ok_or_else(|| NumsError::invalid_value("n must be at least 1"))
}

/// Rosser's bound `p_n < n (ln n + ln ln n)`, valid for `n >= 6`.
fn nth_prime_upper_bound(n: u64) -> Result<u64> {
    if n < 6 {
        return Ok(13);
    }
    let x = n as f64;
    let upper = (x * (x.ln() + x.ln().ln())).ceil();
    if upper >= u64::MAX as f64 {
        return Err(NumsError::invalid_value(format!("the {}th prime is out of range", n)));
    }
    Ok(upper as u64)
}
