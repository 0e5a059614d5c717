// src/complex_math/hurwitz_int.rs

use num::{BigInt, Integer, Zero};

/// Hurwitz quaternion a + bi + cj + dk whose components are either all
/// integers or all half-integers.
///
/// Components are stored doubled, so the parity of the stored values is
/// uniform across a valid quaternion: all even for an integer (Lipschitz)
/// quaternion, all odd for a half-integer one. Doubling keeps every
/// operation in exact BigInt arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HurwitzInt {
    dbl: [BigInt; 4],
}

impl HurwitzInt {
    /// Builds a quaternion from four components. With `doubled = false` the
    /// arguments are the integer components themselves; with
    /// `doubled = true` they are already-doubled values, which permits
    /// half-integer quaternions (all arguments odd).
    pub fn new(a: BigInt, b: BigInt, c: BigInt, d: BigInt, doubled: bool) -> Self {
        if doubled {
            let dbl = [a, b, c, d];
            let odd = dbl[0].is_odd();
            assert!(
                dbl.iter().all(|v| v.is_odd() == odd),
                "Hurwitz components must be all integers or all half-integers"
            );
            HurwitzInt { dbl }
        } else {
            HurwitzInt {
                dbl: [a * 2, b * 2, c * 2, d * 2],
            }
        }
    }

    pub fn zero() -> Self {
        HurwitzInt {
            dbl: [
                BigInt::zero(),
                BigInt::zero(),
                BigInt::zero(),
                BigInt::zero(),
            ],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dbl.iter().all(|v| v.is_zero())
    }

    /// True when all components are integers.
    pub fn is_lipschitz(&self) -> bool {
        self.dbl.iter().all(|v| v.is_even())
    }

    /// The four integer components. The receiver must be Lipschitz; the
    /// solver only ever extracts components from integer quaternions, so a
    /// half-integer receiver is a contract violation.
    pub fn val_int(&self) -> (BigInt, BigInt, BigInt, BigInt) {
        assert!(
            self.is_lipschitz(),
            "cannot extract integer components of a half-integer quaternion"
        );
        (
            &self.dbl[0] >> 1,
            &self.dbl[1] >> 1,
            &self.dbl[2] >> 1,
            &self.dbl[3] >> 1,
        )
    }

    pub fn conj(&self) -> HurwitzInt {
        HurwitzInt {
            dbl: [
                self.dbl[0].clone(),
                -&self.dbl[1],
                -&self.dbl[2],
                -&self.dbl[3],
            ],
        }
    }

    /// Reduced norm a^2 + b^2 + c^2 + d^2, an ordinary non-negative integer
    /// for every valid Hurwitz quaternion.
    pub fn norm(&self) -> BigInt {
        let sum: BigInt = self.dbl.iter().map(|v| v * v).sum();
        sum >> 2
    }

    /// Hamilton product. Quaternions do not commute; `self` is the left
    /// factor.
    pub fn prod(&self, other: &HurwitzInt) -> HurwitzInt {
        let [a1, b1, c1, d1] = &self.dbl;
        let [a2, b2, c2, d2] = &other.dbl;
        // the raw products are 4x the true components; a product of two
        // Hurwitz quaternions is again Hurwitz, so halving is exact
        let a = a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2;
        let b = a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2;
        let c = a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2;
        let d = a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2;
        HurwitzInt {
            dbl: [a >> 1, b >> 1, c >> 1, d >> 1],
        }
    }

    fn sub(&self, other: &HurwitzInt) -> HurwitzInt {
        HurwitzInt {
            dbl: [
                &self.dbl[0] - &other.dbl[0],
                &self.dbl[1] - &other.dbl[1],
                &self.dbl[2] - &other.dbl[2],
                &self.dbl[3] - &other.dbl[3],
            ],
        }
    }

    /// Greatest common right divisor of `self` and `other`, normalized to
    /// integer components.
    ///
    /// Each Euclidean step right-divides: q is self * conj(other) / norm
    /// rounded to the nearest point of the Hurwitz order, taking the better
    /// of the all-integer and all-half-integer roundings. The nearer of the
    /// two is always within squared distance 1/2, so the remainder norm at
    /// most halves and the loop terminates.
    pub fn gcrd(&self, other: &HurwitzInt) -> HurwitzInt {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem_round(&b);
            a = b;
            b = r;
        }
        a.normalize_lipschitz()
    }

    /// a - q*b for q the rounded right quotient a * b^-1.
    fn rem_round(&self, b: &HurwitzInt) -> HurwitzInt {
        // c/2 = (self/2)(conj(b)/2), so the true quotient components are
        // c.dbl / (2 * norm(b)) and the doubled quotient is c.dbl / norm(b)
        let c = self.prod(&b.conj());
        let den = b.norm();
        let q_int = HurwitzInt {
            dbl: c.dbl.clone().map(|n| nearest_even(&n, &den)),
        };
        let q_half = HurwitzInt {
            dbl: c.dbl.clone().map(|n| nearest_odd(&n, &den)),
        };
        let r_int = self.sub(&q_int.prod(b));
        let r_half = self.sub(&q_half.prod(b));
        if r_int.norm() <= r_half.norm() {
            r_int
        } else {
            r_half
        }
    }

    /// Left-multiplies by a Hurwitz unit until the components are integers.
    /// A left-unit multiple of a common right divisor is still a common
    /// right divisor with the same norm.
    fn normalize_lipschitz(self) -> HurwitzInt {
        if self.is_lipschitz() {
            return self;
        }
        let one = BigInt::from(1);
        let minus_one = BigInt::from(-1);
        for sa in [&one, &minus_one] {
            for sb in [&one, &minus_one] {
                for sc in [&one, &minus_one] {
                    for sd in [&one, &minus_one] {
                        let unit = HurwitzInt {
                            dbl: [sa.clone(), sb.clone(), sc.clone(), sd.clone()],
                        };
                        let candidate = unit.prod(&self);
                        if candidate.is_lipschitz() {
                            return candidate;
                        }
                    }
                }
            }
        }
        unreachable!("every half-integer Hurwitz quaternion has an integer left associate");
    }
}

/// Nearest even integer to n / d, d > 0, as a doubled-representation
/// component of an integer quaternion.
fn nearest_even(n: &BigInt, d: &BigInt) -> BigInt {
    (n + d).div_floor(&(d * 2)) * 2
}

/// Nearest odd integer to n / d, d > 0.
fn nearest_odd(n: &BigInt, d: &BigInt) -> BigInt {
    n.div_floor(&(d * 2)) * 2 + 1
}
