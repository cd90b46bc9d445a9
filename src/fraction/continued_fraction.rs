// src/fraction/continued_fraction.rs

use num::rational::Ratio;
use num::Integer;

/// Coefficients `[a0; a1, a2, ...]` of the regular continued fraction of an
/// exact rational, produced lazily by the Euclidean algorithm.
///
/// Iteration stops once the remainder's numerator reaches zero, so every
/// rational yields a finite sequence.
#[derive(Debug, Clone)]
pub struct ContinuedFraction {
    numer: i64,
    denom: i64,
}

impl ContinuedFraction {
    pub fn new(ratio: Ratio<i64>) -> Self {
        // Ratio keeps its denominator positive
        ContinuedFraction {
            numer: *ratio.numer(),
            denom: *ratio.denom(),
        }
    }
}

impl Iterator for ContinuedFraction {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.denom == 0 {
            return None;
        }
        let (quotient, remainder) = Integer::div_mod_floor(&self.numer, &self.denom);
        self.numer = self.denom;
        self.denom = remainder;
        Some(quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(n: i64, d: i64) -> Vec<i64> {
        ContinuedFraction::new(Ratio::new(n, d)).collect()
    }

    #[test]
    fn test_expansions() {
        assert_eq!(expand(649, 200), vec![3, 4, 12, 4]);
        assert_eq!(expand(415, 93), vec![4, 2, 6, 7]);
        assert_eq!(expand(5, 1), vec![5]);
        assert_eq!(expand(0, 1), vec![0]);
    }

    #[test]
    fn test_negative_uses_floor() {
        assert_eq!(expand(-7, 2), vec![-4, 2]);
    }
}
