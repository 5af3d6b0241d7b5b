//! Inverses, division and integer powers.

use tracing::debug;

use crate::{Dim, GeoError, KVector, MultiVector, Result};

impl KVector {
    /// `1/X = conj(X) / (X·conj(X))` for blades. A non-simple 4D bivector uses its closed form
    /// instead, and is singular when its two rotation angles are equal.
    pub fn inverse(&self) -> Result<KVector> {
        if !self.is_simple() {
            return self.bivector_inverse_4d();
        }
        let conj = self.conj();
        let denominator = (*self * conj).scalar_part();
        if denominator == 0.0 {
            debug!(grade = self.grade(), "inverse of a null element");
            return Err(GeoError::DivisionByZero);
        }
        Ok(conj.scale(1.0 / denominator))
    }

    /// `self · (1/rhs)`
    pub fn div<R: Into<MultiVector>>(&self, rhs: R) -> Result<MultiVector> {
        MultiVector::from(*self).div(rhs)
    }

    /// Repeated geometric product. Negative powers go through the inverse.
    pub fn powi(&self, n: i32) -> Result<MultiVector> {
        MultiVector::from(*self).powi(n)
    }
}

impl MultiVector {
    /// `1/X = conj(X)·M / (N·M)` with `N = X·conj(X)` and `M` the grade 3 and 4 parts of `N`
    /// negated. Up to dimension 4, `N·M` is a scalar.
    pub fn inverse(&self) -> Result<MultiVector> {
        let conj = self.conj();
        let norm = *self * conj;
        let complement = norm.map_grades(|k| match k.grade() {
            3 | 4 => -k,
            _ => k,
        });
        let denominator = (norm * complement).scalar_part();
        if denominator == 0.0 {
            debug!(multivector = ?self, "inverse of a singular multivector");
            return Err(GeoError::DivisionByZero);
        }
        Ok((conj * complement).scale(1.0 / denominator))
    }

    /// `self · (1/rhs)`, failing with `DivisionByZero` when `rhs` is not invertible.
    pub fn div<R: Into<MultiVector>>(&self, rhs: R) -> Result<MultiVector> {
        let rhs = rhs.into();
        let inverse = match rhs.as_kvector() {
            Some(k) => MultiVector::from(k.inverse()?),
            None => rhs.inverse()?,
        };
        Ok(*self * inverse)
    }

    /// Repeated geometric product by squaring. `powi(0)` is one, and negative powers go
    /// through the inverse.
    pub fn powi(&self, n: i32) -> Result<MultiVector> {
        let base = if n < 0 { self.inverse()? } else { *self };
        let mut exponent = n.unsigned_abs();
        let mut square = base;
        let mut output = MultiVector::from_scalar(Dim::One, 1.0);
        while exponent > 0 {
            if exponent & 1 == 1 {
                output = output * square;
            }
            square = square * square;
            exponent >>= 1;
        }
        Ok(output.to_dim(self.dim()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ga_1d, ga_2d, ga_3d, ga_4d, Dim, GeoError, KVector, MultiVector};
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_inverse() {
        let v = ga_3d::vector(2., 0., 0.);
        assert_eq!(Ok(ga_3d::vector(0.5, 0., 0.)), v.inverse());
        let v = ga_3d::vector(1., 2., 2.);
        assert_abs_diff_eq!(1.0, v * v.inverse().unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn blade_inverses() {
        assert_eq!(Ok(-ga_3d::XY), ga_3d::XY.inverse());
        assert_eq!(Ok(-ga_3d::I), ga_3d::I.inverse());
        assert_eq!(Ok(ga_4d::J), ga_4d::J.inverse());
        assert_eq!(Ok(KVector::scalar(0.25)), KVector::scalar(4.).inverse());
        assert_eq!(Ok(ga_1d::vector(0.5)), ga_1d::vector(2.).inverse());
    }

    #[test]
    fn zero_is_not_invertible() {
        assert_eq!(
            Err(GeoError::DivisionByZero),
            KVector::zero(Dim::Three, 2).unwrap().inverse()
        );
        assert_eq!(Err(GeoError::DivisionByZero), MultiVector::zero(Dim::Four).inverse());
    }

    #[test]
    fn non_simple_bivector_inverse() {
        let b = ga_4d::bivector(1., 2., 3., 4., 5., 6.);
        let inverse = b.inverse().unwrap();
        assert_abs_diff_eq!(1.0, b * inverse, epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, inverse * b, epsilon = 1e-12);

        let isoclinic = ga_4d::bivector(1., 0., 0., 0., 0., 1.);
        assert_eq!(Err(GeoError::DivisionByZero), isoclinic.inverse());
    }

    #[test]
    fn multivector_inverse_in_every_dimension() {
        let values = [
            ga_1d::multivector(2., 1.),
            ga_2d::multivector(1., 2., 3., 4.),
            ga_3d::multivector(1., 2., 3., 4., 5., 6., 7., 8.),
            ga_4d::multivector(
                5., 1., -2., 0.5, 1., 0.3, -1., 2., 0.7, -0.4, 1.1, 0.2, -0.6, 0.9, 1.5, 0.8,
            ),
        ];
        for value in values {
            let inverse = value.inverse().unwrap();
            assert_abs_diff_eq!(1.0, value * inverse, epsilon = 1e-12);
            assert_abs_diff_eq!(1.0, inverse * value, epsilon = 1e-12);
        }
    }

    #[test]
    fn null_multivector() {
        // (1 + x)(1 - x) = 0
        let null = 1.0 + ga_3d::X;
        assert_eq!(Err(GeoError::DivisionByZero), null.inverse());
    }

    #[test]
    fn division() {
        let a = ga_3d::vector(1., 0., 0.);
        let b = ga_3d::vector(0., 2., 0.);
        assert_eq!(Ok(MultiVector::from(ga_3d::XY.scale(0.5))), a.div(b));
        assert_eq!(Ok(MultiVector::from(ga_3d::X.scale(0.5))), a.div(2.0));
        assert_eq!(Err(GeoError::DivisionByZero), a.div(0.0));

        let mv = 2.0 + ga_3d::XY;
        assert_abs_diff_eq!(1.0, mv.div(mv).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn integer_powers() {
        let b = ga_3d::XY;
        assert_eq!(Ok(MultiVector::from(-1.0)), b.powi(2));
        assert_eq!(Ok(MultiVector::from(1.0)), b.powi(4));
        assert_eq!(Ok(MultiVector::from(-ga_3d::XY)), b.powi(3));
        assert_eq!(Ok(MultiVector::from(1.0)), b.powi(0));

        let v = ga_3d::vector(2., 0., 0.);
        assert_eq!(Ok(MultiVector::from(0.25)), v.powi(-2));
        assert_eq!(Err(GeoError::DivisionByZero), KVector::zero(Dim::Two, 1).unwrap().powi(-1));
    }
}
