// src/sequences/fibonacci.rs

use num::{BigUint, One, Zero};

use crate::core::{NumsError, Result};

/// Unbounded Fibonacci sequence `0, 1, 1, 2, 3, 5, ...`
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci {
            current: BigUint::zero(),
            next: BigUint::one(),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }
}

/// The `n`th Fibonacci number with `fib(1) == 0`.
///
/// # Examples
/// ```
/// use nums::sequences::fib;
///
/// assert_eq!(fib(25).unwrap(), 46368u32.into());
/// ```
pub fn fib(n: usize) -> Result<BigUint> {
    if n == 0 {
        return Err(NumsError::invalid_value("n must be at least 1"));
    }
    Fibonacci::new()
        .nth(n - 1)
        .ok_or_else(|| NumsError::invalid_value(format!("no Fibonacci number at {}", n)))
}

/// `[0, 1]` followed by the Fibonacci numbers after them that are below `n`.
pub fn prev_fibs(n: u64) -> Vec<u64> {
    let mut fibs = vec![0, 1];
    let (mut a, mut b) = (1u64, 1u64);
    while b < n {
        fibs.push(b);
        match a.checked_add(b) {
            Some(c) => {
                a = b;
                b = c;
            }
            None => break,
        }
    }
    fibs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fib() {
        assert_eq!(fib(1).unwrap(), BigUint::zero());
        assert_eq!(fib(2).unwrap(), BigUint::one());
        assert_eq!(fib(3).unwrap(), BigUint::one());
        assert_eq!(fib(25).unwrap(), BigUint::from(46368u32));
        assert!(fib(0).is_err());
    }

    #[test]
    fn test_fib_beyond_u64() {
        let f = fib(101).unwrap();
        assert_eq!(f.to_string(), "354224848179261915075");
    }

    #[test]
    fn test_prev_fibs() {
        assert_eq!(
            prev_fibs(1000),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987]
        );
        assert_eq!(prev_fibs(0), vec![0, 1]);
        assert_eq!(prev_fibs(13), vec![0, 1, 1, 2, 3, 5, 8]);
    }
}
