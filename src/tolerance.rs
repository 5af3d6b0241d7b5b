//! Approximate comparison of elements, promoting across dimensions and grades like `==` does.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{KVector, MultiVector, EPSILON};

fn pairs(lhs: MultiVector, rhs: MultiVector) -> impl Iterator<Item = (f64, f64)> {
    let (lhs, rhs) = lhs.promote(&rhs);
    let len = lhs.dim().len();
    (0..len).map(move |i| (lhs[i], rhs[i]))
}

macro_rules! impl_approx {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl AbsDiffEq<$rhs> for $lhs {
                type Epsilon = f64;

                fn default_epsilon() -> f64 {
                    EPSILON
                }

                fn abs_diff_eq(&self, other: &$rhs, epsilon: f64) -> bool {
                    pairs(MultiVector::from(*self), MultiVector::from(*other))
                        .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
                }
            }

            impl RelativeEq<$rhs> for $lhs {
                fn default_max_relative() -> f64 {
                    EPSILON
                }

                fn relative_eq(&self, other: &$rhs, epsilon: f64, max_relative: f64) -> bool {
                    pairs(MultiVector::from(*self), MultiVector::from(*other))
                        .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
                }
            }

            impl UlpsEq<$rhs> for $lhs {
                fn default_max_ulps() -> u32 {
                    4
                }

                fn ulps_eq(&self, other: &$rhs, epsilon: f64, max_ulps: u32) -> bool {
                    pairs(MultiVector::from(*self), MultiVector::from(*other))
                        .all(|(a, b)| a.ulps_eq(&b, epsilon, max_ulps))
                }
            }
        )*
    };
}

impl_approx! {
    MultiVector, MultiVector;
    MultiVector, KVector;
    MultiVector, f64;
    KVector, KVector;
    KVector, MultiVector;
    KVector, f64;
    f64, MultiVector;
    f64, KVector;
}
