// src/solver/mod.rs

pub mod caches;
pub mod candidate;
pub mod four_int;
pub mod race;

mod basic;
mod fcm;

use log::debug;
use num::bigint::Sign;
use num::{BigInt, One, ToPrimitive, Zero};

use crate::complex_math::gaussian_int::GaussianInt;
use crate::complex_math::hurwitz_int::HurwitzInt;
use crate::integer_math::prime_cache::{compute_prime_product, PRECOMPUTED_LIMIT};
use crate::integer_math::two_adic::extract_odd_component;
use crate::solver::basic::{find_gaussian_gcd_large, find_gaussian_gcd_small};
use crate::solver::caches::{one_plus_i_pow, PRECOMPUTED_GCRDS};
use crate::solver::candidate::RAND_LIMIT_THRESHOLD;
use crate::solver::fcm::find_gaussian_gcd_fcm;
use crate::solver::four_int::FourInt;

/// Computes Lagrange four-square representations. Construction is
/// option-style:
///
/// ```
/// use four_squares::Solver;
/// use num::BigInt;
///
/// let solver = Solver::new().with_num_workers(2);
/// let fi = solver.solve(&BigInt::from(35_955_023u64));
/// assert!(four_squares::verify(&BigInt::from(35_955_023u64), &fi));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    /// Inputs at or above this bound take the FCM path.
    fcm_threshold: BigInt,
    /// Number of race workers; 0 means hardware parallelism.
    num_workers: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            fcm_threshold: BigInt::one() << 500,
            num_workers: num_cpus::get(),
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    pub fn with_fcm_threshold(mut self, threshold: BigInt) -> Self {
        self.fcm_threshold = threshold;
        self
    }

    pub fn with_num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn from_config(config: &crate::core::solver_config::SolverConfig) -> Self {
        Solver {
            fcm_threshold: BigInt::one() << (config.fcm_threshold_bits as usize),
            num_workers: config.workers.unwrap_or_else(num_cpus::get),
        }
    }

    /// Returns (w1, w2, w3, w4) with w1^2 + w2^2 + w3^2 + w4^2 = n, sorted
    /// in descending order. Picks the basic or FCM algorithm by magnitude.
    /// Requires n >= 0.
    pub fn solve(&self, n: &BigInt) -> FourInt {
        debug_assert!(n.sign() != Sign::Minus, "input must be non-negative");
        if n.is_zero() {
            let (w1, w2, w3, w4) = PRECOMPUTED_GCRDS[0].val_int();
            return FourInt::new(w1, w2, w3, w4);
        }
        if n < &self.fcm_threshold {
            self.solve_basic(n)
        } else {
            self.solve_fcm(n)
        }
    }

    /// Forces the basic (non-FCM) algorithm regardless of magnitude.
    pub fn solve_basic(&self, n: &BigInt) -> FourInt {
        let num_workers = self.effective_workers();
        let (n_odd, e) = extract_odd_component(n);

        let hurwitz_gcrd = if n_odd <= BigInt::from(PRECOMPUTED_LIMIT) {
            let index = n_odd.to_u64().expect("odd part fits in u64 here") as usize;
            PRECOMPUTED_GCRDS[index].clone()
        } else {
            let bit_len = n_odd.bits();
            let gaussian_gcd = if bit_len < RAND_LIMIT_THRESHOLD {
                debug!("basic path, SMALL variant, {} bits, {} workers", bit_len, num_workers);
                find_gaussian_gcd_small(&n_odd, &compute_prime_product(&n_odd), num_workers)
            } else {
                debug!("basic path, LARGE variant, {} bits, {} workers", bit_len, num_workers);
                find_gaussian_gcd_large(&n_odd, bit_len, num_workers)
            };
            finalize_hurwitz_gcrd(&n_odd, &gaussian_gcd, &BigInt::one())
        };

        recombine(&hurwitz_gcrd, e)
    }

    fn solve_fcm(&self, n: &BigInt) -> FourInt {
        let num_workers = self.effective_workers();
        let (n_odd, e) = extract_odd_component(n);
        debug!("FCM path, {} bits, {} workers", n_odd.bits(), num_workers);
        let (gaussian_gcd, l) = find_gaussian_gcd_fcm(&n_odd, num_workers);
        let hurwitz_gcrd = finalize_hurwitz_gcrd(&n_odd, &gaussian_gcd, &l);
        recombine(&hurwitz_gcrd, e)
    }

    fn effective_workers(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get()
        } else {
            self.num_workers
        }
    }
}

/// gcrd(A + Bi + Lj, n) for the Gaussian GCD A + Bi; the basic path passes
/// L = 1 and the FCM path passes the l of p = 2n - l^2.
fn finalize_hurwitz_gcrd(n: &BigInt, gcd: &GaussianInt, j_coefficient: &BigInt) -> HurwitzInt {
    let candidate = HurwitzInt::new(
        gcd.r.clone(),
        gcd.i.clone(),
        j_coefficient.clone(),
        BigInt::zero(),
        false,
    );
    let modulus = HurwitzInt::new(
        n.clone(),
        BigInt::zero(),
        BigInt::zero(),
        BigInt::zero(),
        false,
    );
    candidate.gcrd(&modulus)
}

/// Lifts a decomposition of the odd part to one of n: left-multiplying the
/// GCRD by (1+i)^e embedded as a quaternion scales the squared norm by 2^e.
fn recombine(hurwitz_gcrd: &HurwitzInt, e: u64) -> FourInt {
    let gi = one_plus_i_pow(e);
    let factor = HurwitzInt::new(gi.r, gi.i, BigInt::zero(), BigInt::zero(), false);
    let (w1, w2, w3, w4) = factor.prod(hurwitz_gcrd).val_int();
    FourInt::new(w1, w2, w3, w4)
}

/// True when target = w1^2 + w2^2 + w3^2 + w4^2.
pub fn verify(target: &BigInt, fi: &FourInt) -> bool {
    let mut sum = BigInt::zero();
    for i in 0..4 {
        sum += &fi[i] * &fi[i];
    }
    &sum == target
}
