//! The regularized incomplete beta function I_x(a, b)
//!
//! # References:
//! - <https://dlmf.nist.gov/8.17>
//! - <https://www.gnu.org/software/gsl/doc/html/specfunc.html#beta-functions>

use crate::beta::beta;
use crate::cont_frac;
use crate::traits::Gamma;

/// The regularized incomplete beta function
/// I_x(a, b) = 1/B(a, b) * ∫ t^(a-1) (1-t)^(b-1) dt over t in [0, x]
///
/// This is the cumulative distribution function of the beta distribution,
/// rising from I_0(a, b) = 0 to I_1(a, b) = 1. It is computed from the
/// continued fraction expansion of the integral, with the x^a (1-x)^b / B(a, b)
/// prefactor assembled in log space and the symmetry
/// I_x(a, b) = 1 - I_(1-x)(b, a) applied for x past (a+1)/(a+b+2) to stay on
/// the rapidly convergent side of the expansion.
///
/// The shape parameters are not validated: a or b outside (0, ∞) produces a
/// meaningless value (usually NaN) rather than an error, and a NaN in any
/// argument propagates. Use [checked_inc_beta] to screen arguments instead.
///
/// # Panics
/// Panics when x < 0 or x > 1.
///
/// # Examples
/// ```
/// # use num_beta::inc_beta;
/// assert_eq!(inc_beta(2.5, 2.5, 0.0), 0.0);
/// assert_eq!(inc_beta(2.5, 2.5, 1.0), 1.0);
/// ```
pub fn inc_beta<T: Gamma>(a: T, b: T, x: T) -> T {
    let one = T::one();
    let two = one + one;

    if x < T::zero() || x > one {
        panic!("inc_beta: x < 0 or x > 1");
    }
    if x == one {
        return one;
    }

    let ln_pre = -beta(a, b).ln() + a * x.ln() + b * (one - x).ln();

    if x < (a + one) / (a + b + two) {
        // apply the continued fraction directly
        ln_pre.exp() * cont_frac::evaluate(a, b, x) / a
    } else {
        // through the symmetry I_x(a, b) = 1 - I_(1-x)(b, a)
        one - ln_pre.exp() * cont_frac::evaluate(b, a, one - x) / b
    }
}

/// Domain checked variant of [inc_beta], returning None instead of panicking
/// or producing a meaningless value: requires finite arguments with a > 0,
/// b > 0 and x in [0, 1]
///
/// # Examples
/// ```
/// # use num_beta::checked_inc_beta;
/// assert_eq!(checked_inc_beta(2.0, 3.0, 1.5), None);
/// assert_eq!(checked_inc_beta(2.0, 3.0, 1.0), Some(1.0));
/// ```
pub fn checked_inc_beta<T: Gamma>(a: T, b: T, x: T) -> Option<T> {
    if !(a.is_finite() && b.is_finite() && x.is_finite()) {
        return None;
    }
    if a <= T::zero() || b <= T::zero() {
        return None;
    }
    if x < T::zero() || x > T::one() {
        return None;
    }
    Some(inc_beta(a, b, x))
}
