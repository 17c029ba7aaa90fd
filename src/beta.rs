use crate::traits::Gamma;

/// The complete beta function B(a, b) = Γ(a)Γ(b) / Γ(a+b)
///
/// All three gamma evaluations go through the [Gamma] trait, so the result
/// inherits its behavior outside the well defined domain: at the poles of
/// gamma (a, b or a+b a non-positive integer) and for arguments large enough
/// to overflow Γ(a+b) the result is an infinity or NaN rather than an error.
///
/// B(a, b) = B(b, a) holds exactly since only the product Γ(a)Γ(b) is commuted.
///
/// # Examples
/// ```
/// # use num_beta::beta;
/// assert_eq!(beta(1.0, 1.0), 1.0);
/// assert_eq!(beta(5.0, 1.0), 0.2); // B(a, 1) = 1/a
/// ```
#[inline]
pub fn beta<T: Gamma>(a: T, b: T) -> T {
    a.gamma() * b.gamma() / (a + b).gamma()
}
