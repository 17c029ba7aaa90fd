//! Continued fraction evaluation for the regularized incomplete beta function
//!
//! The expansion in use is
//! I_x(a,b) = x^a (1-x)^b / (a B(a,b)) * K with K = 1/(1+ d1/(1+ d2/(1+ ...))),
//! evaluated with the modified Lentz algorithm. The first coefficient d1 is
//! folded into the initial denominator, the rest arrive in even/odd pairs.
//!
//! # References:
//! - <https://dlmf.nist.gov/8.17#v>
//! - <https://www.gnu.org/software/gsl/doc/html/specfunc.html#beta-functions>
//! - <http://numerical.recipes/> (sections 5.2 and 6.4)

use num_traits::Float;

/// Hard cap on the number of coefficient pairs folded into the fraction.
/// Arguments in the well conditioned range converge in far fewer pairs,
/// the cap only bounds runaway inputs and overrunning it is not reported.
const MAX_ITERATIONS: usize = 512;

/// Iterator of the even/odd coefficient pairs (d_2k, d_2k+1) for k = 1, 2, ...
/// of the incomplete beta fraction at fixed (a, b, x)
#[derive(Debug, Clone)]
pub struct Coefficients<T> {
    a: T,
    b: T,
    x: T,
    k: T, // pair index, advanced before producing
}

impl<T: Float> Coefficients<T> {
    pub fn new(a: T, b: T, x: T) -> Self {
        Coefficients { a, b, x, k: T::zero() }
    }
}

impl<T: Float> Iterator for Coefficients<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let one = T::one();
        let two = one + one;
        self.k = self.k + one;

        let (a, b, x, k) = (self.a, self.b, self.x, self.k);
        let even = k * (b - k) * x / (((a - one) + two * k) * (a + two * k));
        let odd = -(a + k) * (a + b + k) * x / ((a + two * k) * (a + two * k + one));
        Some((even, odd))
    }
}

/// Running state of a modified Lentz evaluation of a continued fraction
/// with unit partial denominators, 1/(d0 + c1/(1 + c2/(1 + ...)))
///
/// Convergent terms passing near zero are clamped to a cutoff of twice
/// the smallest positive normal, so the recurrence rescales instead of
/// overflowing to infinity.
#[derive(Debug, Clone, Copy)]
pub struct Lentz<T> {
    num: T,   // numerator convergent ratio C_k
    den: T,   // denominator convergent ratio D_k, stored inverted
    value: T, // fraction value after k coefficients
}

impl<T: Float> Lentz<T> {
    fn cutoff() -> T {
        let two = T::one() + T::one();
        two * T::min_positive_value()
    }

    fn clamped(term: T) -> T {
        if term.abs() < Self::cutoff() {
            Self::cutoff()
        } else {
            term
        }
    }

    /// create the state for the zeroth denominator d0, holding the value 1/d0
    pub fn new(den0: T) -> Self {
        let den = T::one() / Self::clamped(den0);
        Lentz { num: T::one(), den, value: den }
    }

    /// fold one coefficient into the fraction and return the correction
    /// factor applied to the value, which approaches 1 at convergence
    pub fn step(&mut self, coeff: T) -> T {
        let one = T::one();
        self.den = one / Self::clamped(one + coeff * self.den);
        self.num = Self::clamped(one + coeff / self.num);
        let delta = self.den * self.num;
        self.value = self.value * delta;
        delta
    }

    pub fn value(&self) -> T {
        self.value
    }
}

/// Evaluate the incomplete beta fraction K at (a, b, x). The result only
/// becomes I_x(a, b) after the caller applies the x^a (1-x)^b / (a B(a, b))
/// prefactor, and the expansion is only rapidly convergent for
/// x < (a+1)/(a+b+2); [crate::inc_beta] arranges both.
pub fn evaluate<T: Float>(a: T, b: T, x: T) -> T {
    let one = T::one();
    let eps = (one + one) * T::epsilon();

    let mut lentz = Lentz::new(one - (a + b) * x / (a + one));
    for (even, odd) in Coefficients::new(a, b, x).take(MAX_ITERATIONS) {
        lentz.step(even);
        let delta = lentz.step(odd);
        // convergence is tested after the odd half step only
        if (delta - one).abs() < eps {
            break;
        }
    }
    lentz.value()
}
