// src/integer_math/prime_sieve.rs

use bitvec::prelude::*;
use log::debug;

use crate::core::{NumsError, Result};

/// Sieve of Eratosthenes over `[0, limit]`.
///
/// Bit `i` is set when `i` is known to be composite (0 and 1 are marked as
/// well), so the primes are the zero bits.
pub struct PrimeSieve {
    limit: u64,
    composite: BitVec,
}

impl PrimeSieve {
    pub fn new(limit: u64) -> Result<Self> {
        if limit < 2 {
            return Err(NumsError::invalid_value(format!("n must be at least 2, got {}", limit)));
        }
        let size = bit_count(limit)?;

        let mut composite = bitvec![0; size];
        composite.set(0, true);
        composite.set(1, true);

        let root = num::integer::sqrt(limit) as usize;
        for p in 2..=root {
            if composite[p] {
                continue;
            }
            let mut multiple = p * p;
            while multiple < size {
                composite.set(multiple, true);
                multiple += p;
            }
        }

        debug!("PrimeSieve::new({}) found {} primes", limit, composite.count_zeros());
        Ok(PrimeSieve { limit, composite })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Primality of `n`; values beyond the sieved limit report false.
    pub fn is_prime(&self, n: u64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.composite.get(i).map(|bit| !*bit))
            .unwrap_or(false)
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.composite.iter_zeros().map(|i| i as u64)
    }

    pub fn count(&self) -> usize {
        self.composite.count_zeros()
    }

    /// Primes in `[low, high]` from a segmented sieve.
    ///
    /// Only the base primes up to `sqrt(high)` are sieved in full; the
    /// segment itself is marked in a bit vector of `high - low + 1` bits.
    pub fn segment(low: u64, high: u64) -> Result<Vec<u64>> {
        if low > high || high < 2 {
            return Ok(Vec::new());
        }
        debug!("PrimeSieve::segment({}, {})", low, high);

        let base = PrimeSieve::new(num::integer::sqrt(high).max(2))?;
        let mut composite = bitvec![0; bit_count(high - low)?];

        for p in base.primes() {
            let first_multiple = match low.div_ceil(p).checked_mul(p) {
                Some(m) => m.max(p * p),
                None => continue,
            };
            let mut multiple = first_multiple;
            while multiple <= high {
                composite.set((multiple - low) as usize, true);
                multiple = match multiple.checked_add(p) {
                    Some(m) => m,
                    None => break,
                };
            }
        }

        let primes: Vec<u64> = composite
            .iter_zeros()
            .map(|i| low + i as u64)
            .filter(|&v| v >= 2)
            .collect();
        debug!("PrimeSieve::segment found {} primes", primes.len());
        Ok(primes)
    }
}

/// Number of bits needed to index `[0, last]`.
fn bit_count(last: u64) -> Result<usize> {
    usize::try_from(last)
        .ok()
        .and_then(|l| l.checked_add(1))
        .ok_or_else(|| NumsError::invalid_value(format!("{} is too large to sieve", last)))
}
