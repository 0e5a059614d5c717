// src/solver/basic.rs
//
// Gaussian-GCD searches for the basic (non-FCM) path. Both variants race
// workers over k-candidates with p = pre_p * k - 1; they differ in how k is
// sampled and how much prime mass pre_p carries.

use num::BigInt;

use crate::complex_math::gaussian_int::GaussianInt;
use crate::solver::candidate::{
    gaussian_gcd, initial_rand_limit, is_valid_gaussian_gcd, pick_candidate_large,
    pick_candidate_small, rand_bit_length, TINY_PRIME_PRODUCT,
};
use crate::solver::race::race;

/// SMALL variant, for odd parts under 16 bits. Workers draw k' below
/// n^exp / 2 / workers and map it through a shared stride with per-worker
/// odd offsets, so no two workers ever test the same k.
pub fn find_gaussian_gcd_small(n: &BigInt, prime_product: &BigInt, num_workers: usize) -> GaussianInt {
    let pre_p = prime_product * n;
    let mut rand_limit = initial_rand_limit(n) >> 1;
    rand_limit /= BigInt::from(num_workers);
    if rand_limit < BigInt::from(1) {
        rand_limit = BigInt::from(1);
    }
    let mul = BigInt::from(2 * num_workers);
    let offsets: Vec<BigInt> = (0..num_workers).map(|i| BigInt::from(2 * i + 1)).collect();

    race(num_workers, |worker_id, rng| {
        let (s, p) = pick_candidate_small(rng, &mul, &offsets[worker_id], &rand_limit, &pre_p)?;
        let gcd = gaussian_gcd(&s, &p);
        if !is_valid_gaussian_gcd(&gcd) {
            return None;
        }
        Some(gcd)
    })
}

/// LARGE variant, for odd parts of 16 bits and up. Workers draw odd k below
/// 2^round(20 + 2 ln(bits)); the sample space is wide enough that worker
/// collisions are not worth preventing.
pub fn find_gaussian_gcd_large(n: &BigInt, bit_len: u64, num_workers: usize) -> GaussianInt {
    let pre_p = BigInt::from(TINY_PRIME_PRODUCT) * n;
    let rand_limit = BigInt::from(1) << rand_bit_length(bit_len);

    race(num_workers, |_, rng| {
        let (s, p) = pick_candidate_large(rng, &rand_limit, &pre_p)?;
        let gcd = gaussian_gcd(&s, &p);
        if !is_valid_gaussian_gcd(&gcd) {
            return None;
        }
        Some(gcd)
    })
}
