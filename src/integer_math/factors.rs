// src/integer_math/factors.rs
//
// Factor listing by trial division, prime factorization, common factors and
// the greatest common factor used to simplify fractions.

use log::trace;
use num::Integer;

use crate::core::{Number, NumsError, Result};

/// Returns every divisor of `n` greater than 1, in ascending order.
///
/// Divisors are found in pairs by trial division up to `sqrt(n)`.
/// `factors(0)` and `factors(1)` are empty.
///
/// # Examples
/// ```
/// use nums::integer_math::factors::factors;
///
/// assert_eq!(factors(25), vec![5, 25]);
/// assert_eq!(factors(12), vec![2, 3, 4, 6, 12]);
/// ```
pub fn factors(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let mut found = Vec::new();
    for candidate in 1..=num::integer::sqrt(n) {
        if n % candidate == 0 {
            found.push(candidate);
            found.push(n / candidate);
        }
    }
    found.sort_unstable();
    found.dedup();
    found.retain(|&f| f != 1);
    trace!("factors({}) = {:?}", n, found);
    found
}

/// Returns the prime factors of `n` in ascending order, with multiplicity.
///
/// `prime_factors(1)` is empty; `n` must be at least 1.
pub fn prime_factors(n: u64) -> Result<Vec<u64>> {
    if n < 1 {
        return Err(NumsError::invalid_value("n must be greater than 0"));
    }

    let mut result = Vec::new();
    let mut remaining = n;

    // Factor out all 2s
    while remaining % 2 == 0 {
        result.push(2);
        remaining /= 2;
    }

    let mut divisor = 3u64;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            result.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    // If remaining > 1, it's a prime factor
    if remaining > 1 {
        result.push(remaining);
    }

    trace!("prime_factors({}) = {:?}", n, result);
    Ok(result)
}

/// Returns the factors shared by `a` and `b`, or `[1]` if they share none.
///
/// Signs are ignored. Values without an integral form have no common
/// integer factors and also give `[1]`.
///
/// # Examples
/// ```
/// use nums::integer_math::factors::common_factors;
///
/// assert_eq!(common_factors(25, 144).unwrap(), vec![1]);
/// assert_eq!(common_factors(12, 18).unwrap(), vec![2, 3, 6]);
/// ```
pub fn common_factors(a: impl Into<Number>, b: impl Into<Number>) -> Result<Vec<u64>> {
    match integral_operands(a.into(), b.into())? {
        Some((a, b)) => Ok(shared_factors(a, b)),
        None => Ok(vec![1]),
    }
}

/// Greatest common factor of `a` and `b`.
///
/// When either value is zero the smaller magnitude (zero) is returned, as a
/// zero is divisible by the other value. Values without an integral form
/// give 1.
///
/// # Examples
/// ```
/// use nums::integer_math::factors::gcf;
///
/// assert_eq!(gcf(25, 144).unwrap(), 1);
/// assert_eq!(gcf(25, 10).unwrap(), 5);
/// ```
pub fn gcf(a: impl Into<Number>, b: impl Into<Number>) -> Result<u64> {
    Ok(match integral_operands(a.into(), b.into())? {
        Some((a, b)) => integral_gcf(a, b),
        None => 1,
    })
}

/// Least common multiple of two non-zero magnitudes.
pub fn lcm(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(NumsError::invalid_value("lcm is undefined for zero"));
    }
    (a / a.gcd(&b))
        .checked_mul(b)
        .ok_or_else(|| NumsError::invalid_value(format!("lcm of {} and {} overflows", a, b)))
}

/// Greatest common factor of two magnitudes.
///
/// Equal to `max(common_factors(a, b))` for non-zero inputs, which the tests
/// check; Euclid's algorithm avoids listing every factor.
pub(crate) fn integral_gcf(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a.min(b);
    }
    a.gcd(&b)
}

/// Integral magnitudes of `a` and `b`, or None if either has a fractional part.
pub(crate) fn integral_operands(a: Number, b: Number) -> Result<Option<(u64, u64)>> {
    let a = a.validate()?;
    let b = b.validate()?;
    Ok(match (a.to_integer(), b.to_integer()) {
        (Some(a), Some(b)) => Some((a.unsigned_abs(), b.unsigned_abs())),
        _ => None,
    })
}

fn shared_factors(a: u64, b: u64) -> Vec<u64> {
    let b_factors = factors(b);
    let common: Vec<u64> = factors(a)
        .into_iter()
        .filter(|f| b_factors.binary_search(f).is_ok())
        .collect();
    if common.is_empty() {
        vec![1]
    } else {
        common
    }
}
