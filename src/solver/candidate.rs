// src/solver/candidate.rs
//
// Candidate generation for the randomized search. Every variant produces a
// pair (s, p) with p prime and s^2 = -1 (mod p); the solver then reads off
// a Gaussian prime above p from gcd(s + i, p).

use num::{BigInt, One, Signed, Zero};

use crate::complex_math::gaussian_int::GaussianInt;
use crate::core::random_source::RandomSource;
use crate::integer_math::primality::is_probable_prime;

pub const MAX_ITER_FIND_U: usize = 10;

/// Bit length at which the SMALL sampling strategy hands over to LARGE.
pub const RAND_LIMIT_THRESHOLD: u64 = 16;

/// 2 * 3 * 5 * 7, the fixed prime product of the LARGE variant.
pub const TINY_PRIME_PRODUCT: u64 = 210;

/// Given a prime p, finds s with s^2 = -1 (mod p).
///
/// Draws an even u below p and accepts once u is a quadratic non-residue
/// (u^((p-1)/2) = p - 1), then returns s = u^((p-1)/4) mod p. Gives up
/// after MAX_ITER_FIND_U draws so the caller resamples p instead of
/// spinning on an unlucky prime.
pub fn derive_s_from_p(rng: &mut RandomSource, p: &BigInt) -> Option<BigInt> {
    let p_minus_1 = p - 1u32;
    let mut pow_u = &p_minus_1 >> 1;
    let half_p = p >> 1;
    let mut u = None;
    for _ in 0..MAX_ITER_FIND_U {
        let candidate: BigInt = rng.below(&half_p) << 1;
        if candidate.modpow(&pow_u, p) == p_minus_1 {
            u = Some(candidate);
            break;
        }
    }
    let u = u?;
    pow_u >>= 1;
    Some(u.modpow(&pow_u, p))
}

/// One SMALL-variant draw: k = k' * mul + offset for k' below rand_limit,
/// p = pre_p * k - 1. The per-worker offset and shared stride keep worker
/// sample spaces disjoint.
pub fn pick_candidate_small(
    rng: &mut RandomSource,
    mul: &BigInt,
    offset: &BigInt,
    rand_limit: &BigInt,
    pre_p: &BigInt,
) -> Option<(BigInt, BigInt)> {
    let k = rng.below(rand_limit) * mul + offset;
    candidate_from_k(rng, &k, pre_p)
}

/// One LARGE-variant draw: k odd below rand_limit, p = pre_p * k - 1.
pub fn pick_candidate_large(
    rng: &mut RandomSource,
    rand_limit: &BigInt,
    pre_p: &BigInt,
) -> Option<(BigInt, BigInt)> {
    let k = rng.below(rand_limit) | BigInt::one();
    candidate_from_k(rng, &k, pre_p)
}

/// One FCM-variant draw: l = 2l' + 1, p = pre_p - l^2. The value l is
/// carried out because it becomes the j-coefficient of the Hurwitz
/// candidate.
pub fn pick_candidate_fcm(
    rng: &mut RandomSource,
    rand_limit: &BigInt,
    pre_p: &BigInt,
) -> Option<(BigInt, BigInt, BigInt)> {
    let l = (rng.below(rand_limit) << 1) + 1u32;
    let p: BigInt = pre_p - &l * &l;
    if !p.is_positive() {
        return None;
    }
    if !is_probable_prime(&p) {
        return None;
    }
    let s = derive_s_from_p(rng, &p)?;
    Some((s, p, l))
}

fn candidate_from_k(rng: &mut RandomSource, k: &BigInt, pre_p: &BigInt) -> Option<(BigInt, BigInt)> {
    let p = pre_p * k - 1u32;
    if !is_probable_prime(&p) {
        return None;
    }
    let s = derive_s_from_p(rng, &p)?;
    Some((s, p))
}

/// gcd(s + i, p) in the Gaussian integers.
pub fn gaussian_gcd(s: &BigInt, p: &BigInt) -> GaussianInt {
    let gauss_s = GaussianInt::new(s.clone(), BigInt::one());
    let gauss_p = GaussianInt::new(p.clone(), BigInt::zero());
    gauss_s.gcd(&gauss_p)
}

/// Rejects unit and degenerate GCDs; anything in {1, i, 1+i} up to sign
/// means the candidate prime did not split usefully and the worker should
/// resample.
pub fn is_valid_gaussian_gcd(gcd: &GaussianInt) -> bool {
    let abs_r = gcd.r.abs();
    let abs_i = gcd.i.abs();
    if abs_r.is_one() && abs_i.is_zero() {
        return false;
    }
    if abs_r.is_zero() && abs_i.is_one() {
        return false;
    }
    if abs_r.is_one() && abs_i.is_one() {
        return false;
    }
    true
}

/// Upper bound for k' in the SMALL variant: n_odd^exp, where exp shrinks
/// from 4 as the bit length grows.
pub fn initial_rand_limit(n: &BigInt) -> BigInt {
    let mut bit_len = n.bits() >> 2;
    let mut exp = 4u32;
    while bit_len > 1 {
        exp -= 1;
        bit_len >>= 1;
    }
    num::pow(n.clone(), exp as usize)
}

/// Bit width of the LARGE variant's k samples: round(20 + 2 ln(bit_len)).
pub fn rand_bit_length(bit_len: u64) -> u64 {
    (20.0 + 2.0 * (bit_len as f64).ln()).round() as u64
}

/// Bit width of the FCM variant's l' samples: half of pre_p's width,
/// floored at 10.
pub fn fcm_rand_bit_length(pre_p: &BigInt) -> u64 {
    (pre_p.bits() / 2).max(10)
}
