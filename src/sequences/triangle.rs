// src/sequences/triangle.rs

use crate::core::{NumsError, Result};

/// The `n`th triangle number `(n² + n) / 2`.
pub fn tri_num(n: u64) -> Result<u64> {
    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .map(|v| v / 2)
        .ok_or_else(|| NumsError::invalid_value(format!("triangle number {} overflows", n)))
}

/// Triangle numbers up to and including `n`.
///
/// # Examples
/// ```
/// use nums::sequences::prev_tri_nums;
///
/// assert_eq!(prev_tri_nums(25), vec![1, 3, 6, 10, 15, 21]);
/// ```
pub fn prev_tri_nums(n: u64) -> Vec<u64> {
    let mut numbers = Vec::new();
    let (mut total, mut k) = (0u64, 0u64);
    loop {
        k += 1;
        total = match total.checked_add(k) {
            Some(t) if t <= n => t,
            _ => return numbers,
        };
        numbers.push(total);
    }
}
