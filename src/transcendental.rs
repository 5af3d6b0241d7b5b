//! Exponential, logarithm, real powers and hyperbolic functions.
//!
//! The exponential of a single grade has a closed form determined by the sign of the square of
//! its unit: vectors and quadvectors square to +1 and take hyperbolic functions, bivectors and
//! trivectors square to -1 and take circular ones.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::{Dim, GeoError, KVector, MultiVector, Result, EPSILON};

/// Sign of the square of a unit blade of the given grade.
fn unit_square(grade: u32) -> f64 {
    match grade % 4 {
        2 | 3 => -1.0,
        _ => 1.0,
    }
}

impl KVector {
    pub fn exp(&self) -> MultiVector {
        let dim = self.dim();
        if let Some(s) = self.as_scalar() {
            return MultiVector::from_scalar(dim, s.exp());
        }
        if self.dim() == Dim::Four && self.grade() == 2 {
            return self.bivector_exp_4d();
        }
        let norm2 = self.coefficient_norm2();
        if norm2 == 0.0 {
            return MultiVector::from_scalar(dim, 1.0);
        }
        let mag = norm2.sqrt();
        let (scalar, factor) = if unit_square(self.grade()) < 0.0 {
            (mag.cos(), mag.sin() / mag)
        } else {
            (mag.cosh(), mag.sinh() / mag)
        };
        MultiVector::from_scalar(dim, scalar) + self.scale(factor)
    }

    /// Principal logarithm, using the unit pseudoscalar of dimensions 2 and 3 as the basis of
    /// the branch where one is needed.
    pub fn ln(&self) -> Result<MultiVector> {
        self.ln_on_branch(None)
    }

    /// Logarithm on the branch given by `basis`, a unit element squaring to -1.
    ///
    /// A negative scalar `s` maps to `ln|s| + π·basis`. A vector or quadvector `V` maps to
    /// `ln|V| + 3π/2·basis + π/2·basis·V̂`, which needs `basis·V̂` to be a single grade squaring
    /// to -1 and commuting with `basis`.
    pub fn ln_with_basis(&self, basis: KVector) -> Result<MultiVector> {
        self.ln_on_branch(Some(basis))
    }

    fn ln_on_branch(&self, basis: Option<KVector>) -> Result<MultiVector> {
        if self.is_zero() {
            debug!(grade = self.grade(), "logarithm of zero");
            return Err(GeoError::UndefinedLogarithm("zero has no logarithm"));
        }
        let dim = self.dim();

        if let Some(s) = self.as_scalar() {
            if s > 0.0 {
                return Ok(MultiVector::from_scalar(dim, s.ln()));
            }
            let basis = basis
                .or_else(|| default_basis(dim))
                .ok_or(GeoError::UndefinedLogarithm(
                    "a negative scalar needs a basis squaring to -1",
                ))?;
            check_basis(&basis)?;
            return Ok(s.abs().ln() + basis.scale(PI));
        }

        let mag = self.mag()?;
        let unit = self.map(|c| c / mag);
        if unit_square(self.grade()) < 0.0 {
            return Ok(mag.ln() + unit.scale(FRAC_PI_2));
        }

        let basis = basis
            .or_else(|| (dim == Dim::Three).then_some(crate::ga_3d::I))
            .ok_or(GeoError::UndefinedLogarithm(
                "no default basis for the logarithm of a vector",
            ))?;
        check_basis(&basis)?;
        let turned = (basis * unit).as_kvector().ok_or(GeoError::UndefinedLogarithm(
            "basis times the unit element is not a single grade",
        ))?;
        if !commutes(&basis, &turned) || !squares_to_minus_one(&turned) {
            debug!(?basis, "logarithm basis does not turn the element");
            return Err(GeoError::UndefinedLogarithm(
                "basis times the unit element must commute with the basis and square to -1",
            ));
        }
        Ok(mag.ln() + basis.scale(3.0 * FRAC_PI_2) + turned.scale(FRAC_PI_2))
    }

    /// See [`MultiVector::powf`].
    pub fn powf(&self, x: f64) -> Result<MultiVector> {
        MultiVector::from(*self).powf(x)
    }

    /// See [`MultiVector::polar`].
    pub fn polar(&self) -> Result<(f64, MultiVector)> {
        MultiVector::from(*self).polar()
    }
}

fn default_basis(dim: Dim) -> Option<KVector> {
    match dim {
        Dim::Two => Some(crate::ga_2d::I),
        Dim::Three => Some(crate::ga_3d::I),
        Dim::One | Dim::Four => None,
    }
}

fn squares_to_minus_one(value: &KVector) -> bool {
    let square = *value * *value;
    (square + 1.0).coefficient_norm2() <= EPSILON
}

fn commutes(lhs: &KVector, rhs: &KVector) -> bool {
    (*lhs * *rhs - *rhs * *lhs).coefficient_norm2() <= EPSILON
}

fn check_basis(basis: &KVector) -> Result<()> {
    if squares_to_minus_one(basis) {
        Ok(())
    } else {
        debug!(?basis, "logarithm basis does not square to -1");
        Err(GeoError::UndefinedLogarithm("basis must square to -1"))
    }
}

impl MultiVector {
    /// The product of the exponentials of each grade, scalar first. Equal to the exponential
    /// series when the grades commute.
    pub fn exp(&self) -> MultiVector {
        self.grades()
            .map(|k| k.exp())
            .fold(MultiVector::from_scalar(self.dim(), 1.0), |acc, next| acc * next)
    }

    /// Principal logarithm. A single grade follows [`KVector::ln`]; a scalar plus one other
    /// grade uses the polar form.
    pub fn ln(&self) -> Result<MultiVector> {
        self.ln_on_branch(None)
    }

    /// Logarithm on the branch given by `basis`, see [`KVector::ln_with_basis`].
    pub fn ln_with_basis(&self, basis: KVector) -> Result<MultiVector> {
        self.ln_on_branch(Some(basis))
    }

    fn ln_on_branch(&self, basis: Option<KVector>) -> Result<MultiVector> {
        if let Some(k) = self.as_kvector() {
            return k.ln_on_branch(basis);
        }
        let a = self.scalar_part();
        let rest = (*self - a).as_kvector().ok_or(GeoError::UndefinedLogarithm(
            "more than one grade besides the scalar",
        ))?;

        let mag = rest.mag()?;
        let unit = rest.map(|c| c / mag);
        if unit_square(rest.grade()) < 0.0 {
            let radius = a.hypot(mag);
            return Ok(radius.ln() + unit.scale(mag.atan2(a)));
        }
        if a > mag {
            let radius = ((a - mag) * (a + mag)).sqrt();
            return Ok(radius.ln() + unit.scale((mag / a).atanh()));
        }
        debug!(a, mag, "logarithm outside the hyperbolic branch");
        Err(GeoError::UndefinedLogarithm(
            "scalar part must exceed the magnitude of a vector or quadvector",
        ))
    }

    /// Real power `exp(x·ln X)` on the principal branch. Integral exponents go through
    /// [`MultiVector::powi`] and need no logarithm.
    pub fn powf(&self, x: f64) -> Result<MultiVector> {
        if x.fract() == 0.0 && x.abs() <= f64::from(i32::MAX) {
            return self.powi(x as i32);
        }
        Ok(self.ln()?.scale(x).exp())
    }

    /// Modulus and argument, with `X = r·exp(arg)` and `r` positive.
    ///
    /// Defined wherever the principal logarithm is: the argument is the logarithm without its
    /// scalar part.
    pub fn polar(&self) -> Result<(f64, MultiVector)> {
        let ln = self.ln()?;
        let log_modulus = ln.scalar_part();
        Ok((log_modulus.exp(), ln - log_modulus))
    }

    pub fn cosh(&self) -> MultiVector {
        (self.exp() + (-*self).exp()).scale(0.5)
    }

    pub fn sinh(&self) -> MultiVector {
        (self.exp() - (-*self).exp()).scale(0.5)
    }

    /// `sinh · cosh⁻¹`, failing where the hyperbolic cosine is not invertible.
    pub fn tanh(&self) -> Result<MultiVector> {
        Ok(self.sinh() * self.cosh().inverse()?)
    }
}
