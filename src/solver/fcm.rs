// src/solver/fcm.rs
//
// Fermat-Christmas-method search for very large inputs: instead of growing
// a prime p above n, take p = 2 n_odd - l^2 for odd l, which keeps p at
// n's own size. The winning l survives the search because it becomes the
// j-coefficient of the Hurwitz candidate.

use num::BigInt;

use crate::complex_math::gaussian_int::GaussianInt;
use crate::solver::candidate::{
    fcm_rand_bit_length, gaussian_gcd, is_valid_gaussian_gcd, pick_candidate_fcm,
};
use crate::solver::race::race;

pub fn find_gaussian_gcd_fcm(n_odd: &BigInt, num_workers: usize) -> (GaussianInt, BigInt) {
    let pre_p = n_odd << 1;
    let rand_limit = BigInt::from(1) << fcm_rand_bit_length(&pre_p);

    race(num_workers, |_, rng| {
        let (s, p, l) = pick_candidate_fcm(rng, &rand_limit, &pre_p)?;
        let gcd = gaussian_gcd(&s, &p);
        if !is_valid_gaussian_gcd(&gcd) {
            return None;
        }
        Some((gcd, l))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Integer;

    #[test]
    fn test_fcm_search_yields_gcd_and_odd_l() {
        // 2^70 + 1 is odd and large enough for the p = 2n - l^2 form to
        // find primes quickly
        let n_odd = (BigInt::from(1) << 70) + 1;
        let (gcd, l) = find_gaussian_gcd_fcm(&n_odd, 2);
        assert!(is_valid_gaussian_gcd(&gcd));
        assert!(l.is_odd());
    }
}
