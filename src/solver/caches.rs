// src/solver/caches.rs

use lazy_static::lazy_static;
use num::{BigInt, One, Zero};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::complex_math::gaussian_int::GaussianInt;
use crate::complex_math::hurwitz_int::HurwitzInt;

lazy_static! {
    static ref GAUSSIAN_POWER_CACHE: RwLock<HashMap<u64, GaussianInt>> =
        RwLock::new(HashMap::new());

    /// Hurwitz GCRDs for every n in 0..=20, indexed by n. Inputs with odd
    /// part at or below 20 skip the randomized search entirely.
    pub static ref PRECOMPUTED_GCRDS: [HurwitzInt; 21] = {
        let table: [(i64, i64, i64, i64); 21] = [
            (0, 0, 0, 0), // 0
            (1, 0, 0, 0), // 1
            (1, 1, 0, 0), // 2
            (1, 1, 1, 0), // 3
            (2, 0, 0, 0), // 4
            (2, 1, 0, 0), // 5
            (2, 1, 1, 0), // 6
            (2, 1, 1, 1), // 7
            (2, 2, 0, 0), // 8
            (2, 2, 1, 0), // 9
            (2, 2, 1, 1), // 10
            (3, 1, 1, 0), // 11
            (3, 1, 1, 1), // 12
            (3, 2, 0, 0), // 13
            (3, 2, 1, 0), // 14
            (3, 2, 1, 1), // 15
            (4, 0, 0, 0), // 16
            (4, 1, 0, 0), // 17
            (4, 1, 1, 0), // 18
            (4, 1, 1, 1), // 19
            (4, 2, 0, 0), // 20
        ];
        table.map(|(a, b, c, d)| {
            HurwitzInt::new(
                BigInt::from(a),
                BigInt::from(b),
                BigInt::from(c),
                BigInt::from(d),
                false,
            )
        })
    };
}

/// (1 + i)^e by exponentiation by squaring, memoized. The result always
/// satisfies |result|^2 = 2^e.
pub fn one_plus_i_pow(e: u64) -> GaussianInt {
    if e == 0 {
        return GaussianInt::one();
    }
    if let Some(cached) = GAUSSIAN_POWER_CACHE.read().unwrap().get(&e) {
        return cached.clone();
    }
    let mut result = GaussianInt::one();
    let mut base = GaussianInt::new(BigInt::one(), BigInt::one());
    let mut exp = e;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.prod(&base);
        }
        base = base.prod(&base);
        exp >>= 1;
    }
    GAUSSIAN_POWER_CACHE
        .write()
        .unwrap()
        .insert(e, result.clone());
    result
}

/// Preloads (1+i)^0 through (1+i)^e by successive multiplication.
pub fn precompute_gaussian_powers(e: u64) {
    let one_plus_i = GaussianInt::new(BigInt::one(), BigInt::one());
    let mut power = GaussianInt::one();
    let mut cache = GAUSSIAN_POWER_CACHE.write().unwrap();
    cache.clear();
    for exponent in 0..=e {
        cache.insert(exponent, power.clone());
        power = power.prod(&one_plus_i);
    }
}

/// Empties the (1+i)^e cache.
pub fn reset_gaussian_power_cache() {
    GAUSSIAN_POWER_CACHE.write().unwrap().clear();
}
