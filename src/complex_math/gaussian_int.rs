// src/complex_math/gaussian_int.rs

use num::{BigInt, Integer, One, Zero};

/// Gaussian integer a + bi with arbitrary-precision components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaussianInt {
    pub r: BigInt,
    pub i: BigInt,
}

impl GaussianInt {
    pub fn new(r: BigInt, i: BigInt) -> Self {
        GaussianInt { r, i }
    }

    pub fn zero() -> Self {
        GaussianInt::new(BigInt::zero(), BigInt::zero())
    }

    pub fn one() -> Self {
        GaussianInt::new(BigInt::one(), BigInt::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.r.is_zero() && self.i.is_zero()
    }

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    pub fn prod(&self, other: &GaussianInt) -> GaussianInt {
        GaussianInt::new(
            &self.r * &other.r - &self.i * &other.i,
            &self.r * &other.i + &self.i * &other.r,
        )
    }

    pub fn conj(&self) -> GaussianInt {
        GaussianInt::new(self.r.clone(), -&self.i)
    }

    /// Field norm a^2 + b^2.
    pub fn norm(&self) -> BigInt {
        &self.r * &self.r + &self.i * &self.i
    }

    /// Euclidean GCD. The quotient at each step is self * conj(other) over
    /// norm(other) with both components rounded to the nearest integer,
    /// which bounds the remainder norm by half the divisor norm. The result
    /// is some associate of the true GCD; callers that care about units
    /// filter afterwards.
    pub fn gcd(&self, other: &GaussianInt) -> GaussianInt {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem_round(&b);
            a = b;
            b = r;
        }
        a
    }

    /// self - round(self / other) * other
    fn rem_round(&self, other: &GaussianInt) -> GaussianInt {
        let num = self.prod(&other.conj());
        let den = other.norm();
        let q = GaussianInt::new(round_div(&num.r, &den), round_div(&num.i, &den));
        GaussianInt::new(
            &self.r - (&q.r * &other.r - &q.i * &other.i),
            &self.i - (&q.r * &other.i + &q.i * &other.r),
        )
    }
}

/// Nearest integer to n / d for d > 0, rounding half up.
fn round_div(n: &BigInt, d: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    (n * &two + d).div_floor(&(d * &two))
}
