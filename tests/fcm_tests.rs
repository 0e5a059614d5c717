// tests/fcm_tests.rs
//
// End-to-end coverage of the FCM algorithm (p = 2 n_odd - l^2), both forced
// through a lowered threshold and through the default 2^500 dispatch.

use four_squares::core::random_source::RandomSource;
use four_squares::{verify, Solver};
use num::{BigInt, One};

#[test]
fn forced_fcm_on_moderate_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    let solver = Solver::new()
        .with_num_workers(2)
        .with_fcm_threshold(BigInt::one() << 64);
    let mut rng = RandomSource::new();
    for _ in 0..3 {
        let n = rng.below(&(BigInt::one() << 80)) | (BigInt::one() << 79);
        let fi = solver.solve(&n);
        assert!(verify(&n, &fi), "FCM verify failed for n = {}: {}", n, fi);
    }
}

#[test]
fn forced_fcm_handles_even_inputs() {
    let solver = Solver::new()
        .with_num_workers(2)
        .with_fcm_threshold(BigInt::one() << 64);
    let n = ((BigInt::one() << 90) + 1) << 5;
    let fi = solver.solve(&n);
    assert!(verify(&n, &fi));
}

#[test]
fn default_threshold_routes_600_bit_input_through_fcm() {
    let solver = Solver::new();
    let n = (BigInt::one() << 600) + 1;
    let fi = solver.solve(&n);
    assert!(verify(&n, &fi), "verify failed for 2^600 + 1: {}", fi);
    for i in 0..4 {
        assert!(fi[i] >= BigInt::from(0));
    }
}
