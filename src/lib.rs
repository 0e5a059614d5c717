// src/lib.rs
//
// Lagrange four-square decomposition: for any non-negative integer n, find
// four non-negative integers (w1, w2, w3, w4) with
// w1^2 + w2^2 + w3^2 + w4^2 = n.
//
// The search follows the randomized reduction of "Finding the Four Squares
// in Lagrange's Theorem": factor out powers of two, race workers to find a
// prime p with a known square root of -1 (mod p), take a Gaussian-integer
// GCD, lift it into the Hurwitz quaternions, and recombine with (1+i)^e.

pub mod complex_math;
pub mod core;
pub mod integer_math;
pub mod solver;

pub use crate::core::solver_config::SolverConfig;
pub use crate::integer_math::prime_cache::reset_prime_cache;
pub use crate::solver::caches::{precompute_gaussian_powers, reset_gaussian_power_cache};
pub use crate::solver::four_int::FourInt;
pub use crate::solver::verify;
pub use crate::solver::Solver;
