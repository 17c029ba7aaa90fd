use num_traits::Float;

/// A floating point type with an associated gamma function Γ(x)
///
/// The beta functions in this crate call gamma through this trait and
/// inherit its accuracy and its pole behavior at non-positive integers.
pub trait Gamma: Float {
    /// The gamma function Γ(x)
    fn gamma(self) -> Self;
}

// TODO: switch to the inherent gamma methods once they stabilize,
//       see https://github.com/rust-lang/rust/issues/99842

macro_rules! impl_gamma_libm {
    ($T:ty, $tgamma:path) => {
        impl Gamma for $T {
            #[inline]
            fn gamma(self) -> $T {
                $tgamma(self)
            }
        }
    };
}
impl_gamma_libm!(f32, libm::tgammaf);
impl_gamma_libm!(f64, libm::tgamma);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gamma_test() {
        // qualified calls keep clear of the unstable inherent f64::gamma;
        // small integer arguments are served from an exact factorial table
        assert_eq!(Gamma::gamma(1f64), 1.0);
        assert_eq!(Gamma::gamma(5f64), 24.0);
        assert_eq!(Gamma::gamma(5f32), 24.0);
        assert_relative_eq!(Gamma::gamma(0.5f64), std::f64::consts::PI.sqrt(), max_relative = 1e-14);
    }
}
