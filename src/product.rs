//! Products between graded elements and multivectors, all driven by the Cayley table of the
//! common dimension.

use std::ops::Mul;

use itertools::Itertools;

use crate::{Commutator, Dot, Geo, GradeProduct, KVector, MultiVector, Wedge};

/// Which terms of the geometric product to keep, by the grades of the two blades and of their
/// product.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Product {
    Geo,
    /// Grade `|lhs - rhs|`
    Dot,
    /// Grade `lhs + rhs`
    Wedge,
    /// Grade `k`
    Grade(u32),
}

impl Product {
    fn keeps(self, lhs: u32, rhs: u32, output: u32) -> bool {
        match self {
            Product::Geo => true,
            Product::Dot => output == lhs.abs_diff(rhs),
            Product::Wedge => output == lhs + rhs,
            Product::Grade(k) => output == k,
        }
    }

    pub(crate) fn apply(self, lhs: &MultiVector, rhs: &MultiVector) -> MultiVector {
        let (lhs, rhs) = lhs.promote(rhs);
        let layout = lhs.dim().layout();
        let mut output = MultiVector::zero(lhs.dim());
        let terms = output.coefficients_mut();
        let pairs = lhs
            .coefficients()
            .iter()
            .enumerate()
            .cartesian_product(rhs.coefficients().iter().enumerate());
        for ((i, a), (j, b)) in pairs {
            let (k, sign) = layout.product(i, j);
            if self.keeps(layout.grade(i), layout.grade(j), layout.grade(k)) {
                terms[k] += sign * a * b;
            }
        }
        output
    }
}

fn commutator(lhs: MultiVector, rhs: MultiVector) -> MultiVector {
    let lr = Product::Geo.apply(&lhs, &rhs);
    let rl = Product::Geo.apply(&rhs, &lhs);
    lr.minus(&rl).scale(0.5)
}

impl Dot for KVector {
    type Output = KVector;

    /// The grade `|g1 - g2|` part of the geometric product. Vector·bivector is the left
    /// contraction and bivector·vector the right contraction.
    fn dot(self, rhs: KVector) -> KVector {
        let grade = self.grade().abs_diff(rhs.grade());
        Product::Dot.apply(&self.into(), &rhs.into()).grade(grade)
    }
}

impl Wedge for KVector {
    type Output = KVector;

    /// The grade `g1 + g2` part of the geometric product, or the zero scalar when that grade
    /// exceeds the dimension.
    fn wedge(self, rhs: KVector) -> KVector {
        let grade = self.grade() + rhs.grade();
        Product::Wedge.apply(&self.into(), &rhs.into()).grade(grade)
    }
}

impl GradeProduct for KVector {
    type Output = KVector;

    fn grade_product(self, rhs: KVector, grade: u32) -> KVector {
        Product::Grade(grade)
            .apply(&self.into(), &rhs.into())
            .grade(grade)
    }
}

macro_rules! impl_multivector_products {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl Geo<$rhs> for $lhs {
                type Output = MultiVector;

                fn geo(self, rhs: $rhs) -> MultiVector {
                    Product::Geo.apply(&self.into(), &rhs.into())
                }
            }

            impl Mul<$rhs> for $lhs {
                type Output = MultiVector;

                fn mul(self, rhs: $rhs) -> MultiVector {
                    self.geo(rhs)
                }
            }

            impl Commutator<$rhs> for $lhs {
                type Output = MultiVector;

                fn commutator(self, rhs: $rhs) -> MultiVector {
                    commutator(self.into(), rhs.into())
                }
            }
        )*
    };
}

impl_multivector_products! {
    KVector, KVector;
    KVector, MultiVector;
    MultiVector, KVector;
    MultiVector, MultiVector;
}

macro_rules! impl_mixed_grade_products {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl Dot<$rhs> for $lhs {
                type Output = MultiVector;

                fn dot(self, rhs: $rhs) -> MultiVector {
                    Product::Dot.apply(&self.into(), &rhs.into())
                }
            }

            impl Wedge<$rhs> for $lhs {
                type Output = MultiVector;

                fn wedge(self, rhs: $rhs) -> MultiVector {
                    Product::Wedge.apply(&self.into(), &rhs.into())
                }
            }

            impl GradeProduct<$rhs> for $lhs {
                type Output = MultiVector;

                fn grade_product(self, rhs: $rhs, grade: u32) -> MultiVector {
                    Product::Grade(grade).apply(&self.into(), &rhs.into())
                }
            }
        )*
    };
}

impl_mixed_grade_products! {
    KVector, MultiVector;
    MultiVector, KVector;
    MultiVector, MultiVector;
}

impl Mul<f64> for MultiVector {
    type Output = MultiVector;

    fn mul(self, rhs: f64) -> MultiVector {
        self.scale(rhs)
    }
}

impl Mul<MultiVector> for f64 {
    type Output = MultiVector;

    fn mul(self, rhs: MultiVector) -> MultiVector {
        rhs.scale(self)
    }
}
