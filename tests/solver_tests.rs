// tests/solver_tests.rs
//
// End-to-end solve/verify properties for the four-square solver. Every
// decomposition the solver returns must verify against its input, with
// non-negative components in descending order.

use four_squares::complex_math::hurwitz_int::HurwitzInt;
use four_squares::core::random_source::RandomSource;
use four_squares::solver::caches::{one_plus_i_pow, PRECOMPUTED_GCRDS};
use four_squares::{verify, FourInt, Solver};
use num::{BigInt, One, Zero};
use rayon::prelude::*;

fn test_solver() -> Solver {
    Solver::new().with_num_workers(2)
}

fn assert_well_formed(n: &BigInt, fi: &FourInt) {
    assert!(verify(n, fi), "verify failed for n = {}: {}", n, fi);
    for i in 0..4 {
        assert!(fi[i] >= BigInt::zero(), "component {} negative for {}", i, n);
        if i > 0 {
            assert!(fi[i - 1] >= fi[i], "components out of order for {}", n);
        }
    }
}

#[test]
fn solves_dense_small_range() {
    let _ = env_logger::builder().is_test(true).try_init();
    let solver = test_solver();
    (0u64..=4096).into_par_iter().for_each(|n| {
        let n = BigInt::from(n);
        let fi = solver.solve(&n);
        assert_well_formed(&n, &fi);
    });
}

// The full property sweep; takes a while, run with --ignored.
#[test]
#[ignore]
fn solves_exhaustive_range_to_2_pow_20() {
    let solver = test_solver();
    (0u64..=(1 << 20)).into_par_iter().for_each(|n| {
        let n = BigInt::from(n);
        let fi = solver.solve(&n);
        assert_well_formed(&n, &fi);
    });
}

#[test]
fn solves_random_inputs_across_bit_lengths() {
    let solver = test_solver();
    let mut rng = RandomSource::new();
    for bits in [1u64, 16, 64, 256] {
        for _ in 0..4 {
            // force the exact bit length by setting the top bit
            let n = rng.below(&(BigInt::one() << bits)) | (BigInt::one() << (bits - 1));
            let fi = solver.solve(&n);
            assert_well_formed(&n, &fi);
        }
    }
}

#[test]
fn solve_concrete_scenarios() {
    let solver = test_solver();

    assert_eq!(solver.solve(&BigInt::zero()).to_string(), "{0, 0, 0, 0}");
    assert_eq!(solver.solve(&BigInt::from(4)).to_string(), "{2, 0, 0, 0}");
    // 8 = 2^3, resolved deterministically through the precomputed table
    assert_eq!(solver.solve(&BigInt::from(8)).to_string(), "{2, 2, 0, 0}");

    let n = BigInt::from(35_955_023u64);
    let fi = solver.solve(&n);
    assert_well_formed(&n, &fi);
}

#[test]
fn verify_accepts_and_rejects() {
    let fi = FourInt::new(
        BigInt::from(5454),
        BigInt::from(2323),
        BigInt::from(893),
        BigInt::from(123),
    );
    assert!(verify(&BigInt::from(35_955_023u64), &fi));
    assert!(!verify(&BigInt::from(35_955_024u64), &fi));

    // mutating any single component must break verification
    let components = [5454i64, 2323, 893, 123];
    for i in 0..4 {
        let mut mutated = components;
        mutated[i] += 1;
        let fi = FourInt::new(
            BigInt::from(mutated[0]),
            BigInt::from(mutated[1]),
            BigInt::from(mutated[2]),
            BigInt::from(mutated[3]),
        );
        assert!(!verify(&BigInt::from(35_955_023u64), &fi));
    }
}

#[test]
fn power_of_two_times_small_odd_uses_precomputed_table() {
    let solver = test_solver();
    for m in 1u64..=20 {
        if m % 2 == 0 {
            continue;
        }
        for e in [0u64, 1, 2, 7, 16] {
            let n = BigInt::from(m) << e;
            let fi = solver.solve(&n);
            assert_well_formed(&n, &fi);

            // the small-odd path is deterministic: it must equal the
            // recombination of (1+i)^e with the table entry for m
            let gi = one_plus_i_pow(e);
            let factor = HurwitzInt::new(gi.r, gi.i, BigInt::zero(), BigInt::zero(), false);
            let (w1, w2, w3, w4) = factor.prod(&PRECOMPUTED_GCRDS[m as usize]).val_int();
            assert_eq!(fi, FourInt::new(w1, w2, w3, w4), "n = {} * 2^{}", m, e);
        }
    }
}

#[test]
fn solve_basic_handles_large_inputs() {
    let solver = test_solver();
    let mut rng = RandomSource::new();
    // roughly 100 bits, forced through the basic (LARGE-variant) path
    let n = rng.below(&(BigInt::one() << 100)) | (BigInt::one() << 99);
    let fi = solver.solve_basic(&n);
    assert_well_formed(&n, &fi);
}

#[test]
fn solve_handles_even_inputs_with_large_odd_part() {
    let solver = test_solver();
    // 2^9 * (2^40 + 1) exercises extraction plus the randomized search
    let n = ((BigInt::one() << 40) + 1) << 9;
    let fi = solver.solve(&n);
    assert_well_formed(&n, &fi);
}
