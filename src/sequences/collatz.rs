// src/sequences/collatz.rs

use log::trace;

use crate::core::{NumsError, Result};

pub const DEFAULT_MAX_ITERATIONS: usize = 5000;

/// The Collatz chain starting at `n`, stopping at 1 or after
/// [`DEFAULT_MAX_ITERATIONS`] steps.
///
/// # Examples
/// ```
/// use nums::sequences::collatz;
///
/// assert_eq!(collatz(6).unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub fn collatz(n: u64) -> Result<Vec<u64>> {
    collatz_with_limit(n, DEFAULT_MAX_ITERATIONS)
}

pub fn collatz_with_limit(n: u64, max_iterations: usize) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(NumsError::invalid_value("n must be at least 1"));
    }
    let mut chain = vec![n];
    let mut current = n;
    while current != 1 && chain.len() <= max_iterations {
        current = if current % 2 == 0 {
            current / 2
        } else {
            current
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or_else(|| NumsError::invalid_value(format!("Collatz chain of {} overflows at {}", n, current)))?
        };
        chain.push(current);
    }
    trace!("collatz({}) has {} terms", n, chain.len());
    Ok(chain)
}

/// Whether the chain of `n` reaches 1 within the default step limit.
pub fn is_collatz(n: u64) -> Result<bool> {
    Ok(collatz(n)?.last() == Some(&1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collatz_25() {
        let chain = collatz(25).unwrap();
        assert_eq!(chain.len(), 24);
        assert_eq!(&chain[..4], &[25, 76, 38, 19]);
        assert_eq!(chain.last(), Some(&1));
    }

    #[test]
    fn test_collatz_one() {
        assert_eq!(collatz(1).unwrap(), vec![1]);
        assert!(is_collatz(1).unwrap());
    }

    #[test]
    fn test_limit_cuts_chain() {
        let chain = collatz_with_limit(27, 10).unwrap();
        assert_eq!(chain.len(), 11);
        assert_ne!(chain.last(), Some(&1));
        // 27 needs 111 steps
        assert_eq!(collatz(27).unwrap().len(), 112);
    }

    #[test]
    fn test_invalid_start() {
        assert!(matches!(collatz(0), Err(NumsError::InvalidValue { .. })));
        assert!(matches!(collatz(u64::MAX), Err(NumsError::InvalidValue { .. })));
    }

    #[test]
    fn test_is_collatz() {
        assert!(is_collatz(25).unwrap());
        assert!((1..500).all(|n| is_collatz(n).unwrap()));
    }
}
