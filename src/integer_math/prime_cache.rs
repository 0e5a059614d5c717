// src/integer_math/prime_cache.rs

use lazy_static::lazy_static;
use log::debug;
use num::{BigInt, One};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::integer_math::two_adic::log2;

/// Inputs at or below this bound resolve through the precomputed Hurwitz
/// GCRD table, so their prime product is never consulted.
pub const PRECOMPUTED_LIMIT: u64 = 20;

lazy_static! {
    static ref PRIME_CACHE: RwLock<PrimeCache> = RwLock::new(PrimeCache::with_limit(16));
}

/// Append-only cache of small primes and their cumulative products
/// 2, 2*3, 2*3*5, ... The list starts with a sentinel 1 (product 1) so a
/// lookup below the first prime has a defined answer.
///
/// Growth happens only in the single-threaded pre-search phase of a solve;
/// workers take read access exclusively.
pub struct PrimeCache {
    primes: Vec<u64>,
    products: HashMap<u64, BigInt>,
    max: u64,
}

impl PrimeCache {
    pub fn with_limit(limit: u64) -> Self {
        let mut cache = PrimeCache {
            primes: vec![1, 2, 3, 5, 7],
            products: HashMap::from([
                (1, BigInt::from(1)),
                (2, BigInt::from(2)),
                (3, BigInt::from(6)),
                (5, BigInt::from(30)),
                (7, BigInt::from(210)),
            ]),
            max: 7,
        };
        let mut prod = BigInt::from(210);
        let mut candidate = 9;
        while candidate <= limit {
            cache.check_add_prime(candidate, &mut prod);
            candidate += 2;
        }
        cache
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Product of the primes strictly below log_n, by binary search over the
    /// cached list. Falls back to 2 if no cached prime is below log_n.
    pub fn find_prime_product(&self, log_n: u64) -> BigInt {
        let pos = self.primes.partition_point(|&p| p < log_n);
        if pos <= 1 {
            return BigInt::from(2);
        }
        self.products[&self.primes[pos - 1]].clone()
    }

    /// Extends the cache with every prime strictly below log_n and returns
    /// the cumulative product of all primes strictly below log_n.
    pub fn grow_to(&mut self, log_n: u64) -> BigInt {
        if log_n <= self.max {
            return self.find_prime_product(log_n);
        }
        debug!("growing prime cache from {} toward {}", self.max, log_n);
        let mut prod = self.products[&self.max].clone();
        let mut candidate = self.max + 2;
        while candidate < log_n {
            self.check_add_prime(candidate, &mut prod);
            candidate += 2;
        }
        prod
    }

    /// Trial-divides an odd candidate against the cached primes; on success
    /// appends it together with its cumulative product.
    fn check_add_prime(&mut self, n: u64, prod: &mut BigInt) {
        let mut is_prime = true;
        for &p in &self.primes[1..] {
            if p * p > n {
                break;
            }
            if n % p == 0 {
                is_prime = false;
                break;
            }
        }
        if !is_prime {
            return;
        }
        self.primes.push(n);
        *prod *= n;
        self.products.insert(n, prod.clone());
        self.max = n;
    }
}

/// Product of all primes strictly below floor(log2(n)). Returns 1 for
/// n <= 20. Cache misses grow the global cache; growth is serialized by the
/// write lock and only ever happens before the worker race starts.
pub fn compute_prime_product(n: &BigInt) -> BigInt {
    if n <= &BigInt::from(PRECOMPUTED_LIMIT) {
        return BigInt::one();
    }
    let log_n = log2(n);
    {
        let cache = PRIME_CACHE.read().unwrap();
        if log_n <= cache.max() {
            return cache.find_prime_product(log_n);
        }
    }
    PRIME_CACHE.write().unwrap().grow_to(log_n)
}

/// Discards every prime above the initial seed range.
pub fn reset_prime_cache() {
    *PRIME_CACHE.write().unwrap() = PrimeCache::with_limit(0);
}
