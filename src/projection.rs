//! Projection and reflection onto blades, and linear maps of vectors.

use crate::{Dot, GeoError, KVector, MultiVector, Result};

impl KVector {
    /// Orthogonal projection onto the subspace of the blade `onto`: `(X⌋A)·A⁻¹`.
    ///
    /// An element of higher grade than the blade projects to zero. Fails with `DivisionByZero`
    /// when the blade is zero.
    pub fn proj(&self, onto: KVector) -> Result<KVector> {
        let inverse = onto.inverse()?;
        if self.grade() > onto.grade() {
            let dim = self.dim().max(onto.dim());
            return Ok(KVector::zero_or_scalar(dim, self.grade()));
        }
        let contraction = self.dot(onto);
        Ok((contraction * inverse).grade(self.grade()))
    }

    /// Reflection in the subspace of the blade `onto`: components inside the subspace are kept
    /// and components orthogonal to it are negated.
    ///
    /// For a blade `A` of grade `k` each vector maps to `(-1)^(k+1)·A·v·A⁻¹`, and an element of
    /// grade `g` picks up that sign once per vector factor.
    pub fn reflect(&self, onto: KVector) -> Result<KVector> {
        let inverse = onto.inverse()?;
        let reflected = (onto * *self * inverse).grade(self.grade());
        let odd = (onto.grade() + 1) * self.grade() % 2 == 1;
        Ok(if odd { -reflected } else { reflected })
    }

    /// The linear map sending the i-th basis vector to `images[i]`, applied to this vector.
    ///
    /// Needs one image per basis vector of this vector's dimension, each of them a vector.
    pub fn linear_transform(&self, images: &[KVector]) -> Result<KVector> {
        self.expect_grade(1)?;
        let expected = self.dim().n() as usize;
        if images.len() != expected {
            return Err(GeoError::CoefficientCount {
                expected,
                found: images.len(),
            });
        }
        let mut output = MultiVector::zero(self.dim());
        for (coefficient, image) in self.coefficients().iter().zip(images) {
            image.expect_grade(1)?;
            output = output + image.scale(*coefficient);
        }
        Ok(output.grade(1))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ga_2d, ga_3d, ga_4d, Dim, GeoError, KVector};
    use approx::assert_abs_diff_eq;

    #[test]
    fn projection_onto_vector() {
        let v = ga_3d::vector(3., 4., 5.);
        assert_eq!(Ok(ga_3d::vector(3., 0., 0.)), v.proj(ga_3d::X.scale(2.)));
        let onto = ga_2d::vector(1., 1.);
        assert_abs_diff_eq!(
            ga_2d::vector(1.5, 1.5),
            ga_2d::vector(1., 2.).proj(onto).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn projection_onto_plane() {
        let v = ga_3d::vector(3., 4., 5.);
        assert_eq!(Ok(ga_3d::vector(3., 4., 0.)), v.proj(ga_3d::XY));
        let onto = ga_4d::ZXW.scale(3.);
        assert_abs_diff_eq!(
            ga_4d::vector(1., 0., 3., 4.),
            ga_4d::vector(1., 2., 3., 4.).proj(onto).unwrap(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn projection_of_higher_grade_is_zero() {
        assert_eq!(Ok(KVector::zero(Dim::Three, 2).unwrap()), ga_3d::XY.proj(ga_3d::X));
        assert_eq!(Ok(ga_3d::XY), ga_3d::XY.proj(ga_3d::I));
        assert_eq!(
            Err(GeoError::DivisionByZero),
            ga_3d::X.proj(KVector::zero(Dim::Three, 1).unwrap())
        );
    }

    #[test]
    fn reflection_in_line_and_plane() {
        let v = ga_3d::vector(3., 4., 5.);
        assert_eq!(Ok(ga_3d::vector(3., -4., -5.)), v.reflect(ga_3d::X));
        assert_eq!(Ok(ga_3d::vector(3., 4., -5.)), v.reflect(ga_3d::XY));
        assert_eq!(
            Ok(ga_4d::vector(1., 2., 3., -4.)),
            ga_4d::vector(1., 2., 3., 4.).reflect(ga_4d::XYZ)
        );
    }

    #[test]
    fn reflection_of_bivector() {
        // x stays in the line, y and z flip, so xy flips and yz stays
        assert_eq!(Ok(-ga_3d::XY), ga_3d::XY.reflect(ga_3d::X));
        assert_eq!(Ok(ga_3d::YZ), ga_3d::YZ.reflect(ga_3d::X));
    }

    #[test]
    fn linear_transforms() {
        let swap = [ga_2d::Y, ga_2d::X];
        assert_eq!(Ok(ga_2d::vector(2., 1.)), ga_2d::vector(1., 2.).linear_transform(&swap));

        let shear = [ga_3d::X, ga_3d::vector(1., 1., 0.), ga_3d::Z];
        let sheared = ga_3d::vector(1., 2., 3.).linear_transform(&shear);
        assert_eq!(Ok(ga_3d::vector(3., 2., 3.)), sheared);

        assert_eq!(
            Err(GeoError::CoefficientCount {
                expected: 3,
                found: 2
            }),
            ga_3d::X.linear_transform(&swap)
        );
        assert_eq!(
            Err(GeoError::GradeMismatch {
                expected: 1,
                found: 2
            }),
            ga_2d::X.linear_transform(&[ga_2d::I, ga_2d::X])
        );
    }
}
