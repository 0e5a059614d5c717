// src/integer_math/two_adic.rs

use num::{BigInt, Zero};

/// Factors n as n = 2^e * n_odd with n_odd odd. Returns (0, 0) for n = 0.
pub fn extract_odd_component(n: &BigInt) -> (BigInt, u64) {
    if n.is_zero() {
        return (BigInt::zero(), 0);
    }
    let e = n.trailing_zeros().unwrap_or(0);
    (n >> e, e)
}

/// floor(log2(n)) for n > 0, i.e. the bit length minus one.
pub fn log2(n: &BigInt) -> u64 {
    n.bits() - 1
}
