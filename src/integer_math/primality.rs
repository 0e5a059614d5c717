// src/integer_math/primality.rs

use num::{BigInt, One, Zero};

const PRIME_CHECK_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Miller-Rabin over a fixed base set. Deterministic for inputs below
/// 3.4 * 10^14; for larger inputs the false-positive probability is
/// negligible, and a false positive only costs the caller a retry.
pub fn is_probable_prime(input: &BigInt) -> bool {
    if input < &BigInt::from(2) {
        return false;
    }
    for &a in &PRIME_CHECK_BASES {
        let base = BigInt::from(a);
        if input == &base {
            return true;
        }
        if (input % &base).is_zero() {
            return false;
        }
    }

    let mut d: BigInt = input - BigInt::one();
    let mut s = 0;
    let two = BigInt::from(2);
    while (&d % &two).is_zero() {
        d /= &two;
        s += 1;
    }

    for &a in &PRIME_CHECK_BASES {
        let mut x = BigInt::from(a).modpow(&d, input);
        if x.is_one() || x == input - 1 {
            continue;
        }
        let mut r = 1;
        while r < s {
            x = x.modpow(&BigInt::from(2), input);
            if x.is_one() {
                return false;
            }
            if x == input - 1 {
                break;
            }
            r += 1;
        }
        if x != input - 1 {
            return false;
        }
    }
    true
}
