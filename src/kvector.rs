use std::fmt;
use std::ops::{Index, Mul, Neg};

use tracing::debug;

use crate::error::{GeoError, Result};
use crate::{Dim, MultiVector};

/// Largest number of coefficients in one grade (the bivectors of dimension 4)
pub(crate) const MAX_GRADE_LEN: usize = 6;

const GRADE_NAMES: [&str; 5] = ["Scalar", "Vector", "BiVector", "TriVector", "QuadVector"];

/// A homogeneous element of one grade in one dimension: the coefficients of its blades in
/// storage order.
///
/// Values are immutable once built. Unused trailing coefficients are always zero.
#[derive(Copy, Clone)]
pub struct KVector {
    dim: Dim,
    grade: u32,
    coefficients: [f64; MAX_GRADE_LEN],
}

impl KVector {
    pub(crate) const fn from_raw(dim: Dim, grade: u32, coefficients: [f64; MAX_GRADE_LEN]) -> Self {
        Self {
            dim,
            grade,
            coefficients,
        }
    }

    /// Builds an element from its coefficients in storage order.
    pub fn new(dim: Dim, grade: u32, coefficients: &[f64]) -> Result<Self> {
        let mut output = Self::zero(dim, grade)?;
        let expected = dim.grade_len(grade);
        if coefficients.len() != expected {
            return Err(GeoError::CoefficientCount {
                expected,
                found: coefficients.len(),
            });
        }
        output.coefficients[..expected].copy_from_slice(coefficients);
        Ok(output)
    }

    pub fn zero(dim: Dim, grade: u32) -> Result<Self> {
        if !dim.contains_grade(grade) {
            return Err(GeoError::InvalidGrade { grade, dim });
        }
        Ok(Self::from_raw(dim, grade, [0.0; MAX_GRADE_LEN]))
    }

    /// Every coefficient NaN.
    pub fn nan(dim: Dim, grade: u32) -> Result<Self> {
        let zero = Self::zero(dim, grade)?;
        Ok(zero.map(|_| f64::NAN))
    }

    /// A grade-0 element. Scalars are dimension-polymorphic: they promote to any peer's dimension.
    pub const fn scalar(value: f64) -> Self {
        let mut coefficients = [0.0; MAX_GRADE_LEN];
        coefficients[0] = value;
        Self::from_raw(Dim::One, 0, coefficients)
    }

    /// Zero of a grade known to exist in `dim`, or the zero scalar otherwise.
    pub(crate) fn zero_or_scalar(dim: Dim, grade: u32) -> Self {
        Self::zero(dim, grade).unwrap_or(Self::scalar(0.0))
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.dim.grade_len(self.grade)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coefficient of a named blade such as `"zx"`. `None` when the blade is not of this grade
    /// in this dimension.
    pub fn get(&self, field: &str) -> Option<f64> {
        let slot = self.dim.layout().slot_of(field)?;
        let offset = self.dim.grade_offset(self.grade);
        (offset..offset + self.len())
            .contains(&slot)
            .then(|| self.coefficients[slot - offset])
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients().iter().all(|c| *c == 0.0)
    }

    /// The value of a grade-0 element, `None` for higher grades.
    pub fn as_scalar(&self) -> Option<f64> {
        (self.grade == 0).then_some(self.coefficients[0])
    }

    pub(crate) fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let mut output = *self;
        for c in output.coefficients[..self.len()].iter_mut() {
            *c = f(*c);
        }
        output
    }

    fn zip<F: Fn(f64, f64) -> f64>(&self, rhs: &Self, f: F) -> Self {
        let mut output = *self;
        for (c, r) in output.coefficients.iter_mut().zip(rhs.coefficients) {
            *c = f(*c, r);
        }
        output
    }

    /// Zero-pads into a larger dimension or truncates into a smaller one. Truncation discards
    /// the components that do not exist in the target and is therefore lossy.
    pub fn to_dim(&self, dim: Dim) -> Result<Self> {
        if dim == self.dim {
            return Ok(*self);
        }
        let mut output = Self::zero(dim, self.grade)?;
        let (source, target) = (self.dim.layout(), dim.layout());
        let source_offset = self.dim.grade_offset(self.grade);
        let target_offset = dim.grade_offset(self.grade);
        for (i, value) in self.coefficients().iter().enumerate() {
            if let Some((slot, sign)) = source.map_slot(source_offset + i, target) {
                output.coefficients[slot - target_offset] = sign * value;
            }
        }
        Ok(output)
    }

    pub fn to_1d(&self) -> Result<Self> {
        self.to_dim(Dim::One)
    }

    pub fn to_2d(&self) -> Result<Self> {
        self.to_dim(Dim::Two)
    }

    pub fn to_3d(&self) -> Result<Self> {
        self.to_dim(Dim::Three)
    }

    pub fn to_4d(&self) -> Result<Self> {
        self.to_dim(Dim::Four)
    }

    /// Both operands in the larger of their dimensions.
    pub(crate) fn promote(&self, rhs: &Self) -> (Self, Self) {
        let dim = self.dim.max(rhs.dim);
        (self.promote_to(dim), rhs.promote_to(dim))
    }

    /// Zero-padding never fails: the grade exists in every larger dimension.
    pub(crate) fn promote_to(&self, dim: Dim) -> Self {
        if dim <= self.dim {
            return *self;
        }
        self.to_dim(dim).unwrap_or(*self)
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.map(|c| c * factor)
    }

    pub fn div_scalar(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            debug!(grade = self.grade, "scalar division by zero");
            return Err(GeoError::DivisionByZero);
        }
        Ok(self.map(|c| c / divisor))
    }

    /// Componentwise sum with a peer of the same grade.
    pub fn plus(&self, rhs: &Self) -> Result<Self> {
        self.same_grade(rhs, |a, b| a + b)
    }

    pub fn minus(&self, rhs: &Self) -> Result<Self> {
        self.same_grade(rhs, |a, b| a - b)
    }

    fn same_grade<F: Fn(f64, f64) -> f64>(&self, rhs: &Self, f: F) -> Result<Self> {
        match (self.grade, rhs.grade) {
            (0, 0) => Ok(Self::scalar(f(self.coefficients[0], rhs.coefficients[0]))),
            (l, r) if l == r => {
                let (lhs, rhs) = self.promote(rhs);
                Ok(lhs.zip(&rhs, f))
            }
            (expected, found) => Err(GeoError::GradeMismatch { expected, found }),
        }
    }

    /// Requires the element to be of the given grade.
    pub(crate) fn expect_grade(&self, expected: u32) -> Result<()> {
        if self.grade == expected {
            Ok(())
        } else {
            Err(GeoError::GradeMismatch {
                expected,
                found: self.grade,
            })
        }
    }

    fn with_sign(&self, negative: bool) -> Self {
        if negative {
            -*self
        } else {
            *self
        }
    }

    /// Reverses the factors of each blade: negates grades 2 and 3.
    pub fn rev(&self) -> Self {
        self.with_sign(matches!(self.grade % 4, 2 | 3))
    }

    /// Negates odd grades.
    pub fn grade_involution(&self) -> Self {
        self.with_sign(self.grade % 2 == 1)
    }

    /// Clifford conjugate: negates grades 1 and 2.
    pub fn conj(&self) -> Self {
        self.with_sign(matches!(self.grade % 4, 1 | 2))
    }

    /// Sum of squared coefficients, regardless of simplicity.
    pub fn coefficient_norm2(&self) -> f64 {
        self.coefficients().iter().map(|c| c * c).sum()
    }

    /// Squared magnitude. Undefined for non-simple bivectors.
    pub fn sqr_mag(&self) -> Result<f64> {
        if !self.is_simple() {
            debug!(bivector = ?self, "magnitude of a non-simple bivector");
            return Err(GeoError::UndefinedMagnitude);
        }
        Ok(self.coefficient_norm2())
    }

    pub fn mag(&self) -> Result<f64> {
        self.sqr_mag().map(f64::sqrt)
    }

    /// The unit element in the same direction.
    ///
    /// A non-simple bivector has no magnitude; its norm is the sum of the unit directions of its
    /// spatial and temporal parts, which is not itself of unit magnitude.
    pub fn norm(&self) -> Result<Self> {
        if self.is_zero() {
            debug!(grade = self.grade, "normalizing the zero element");
            return Err(GeoError::DivisionByZero);
        }
        if !self.is_simple() {
            let (spatial, temporal) = self.decompose();
            let spatial = spatial.unit_or_zero();
            let temporal = temporal.unit_or_zero();
            return Ok(spatial.zip(&temporal, |a, b| a + b));
        }
        let mag = self.coefficient_norm2().sqrt();
        Ok(self.map(|c| c / mag))
    }

    fn unit_or_zero(&self) -> Self {
        let norm2 = self.coefficient_norm2();
        if norm2 == 0.0 {
            *self
        } else {
            let mag = norm2.sqrt();
            self.map(|c| c / mag)
        }
    }
}

impl Neg for KVector {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl Mul<f64> for KVector {
    type Output = KVector;

    fn mul(self, rhs: f64) -> KVector {
        self.scale(rhs)
    }
}

impl Mul<KVector> for f64 {
    type Output = KVector;

    fn mul(self, rhs: KVector) -> KVector {
        rhs.scale(self)
    }
}

impl Index<usize> for KVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coefficients()[index]
    }
}

impl From<f64> for KVector {
    fn from(value: f64) -> Self {
        KVector::scalar(value)
    }
}

impl fmt::Debug for KVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grade == 0 {
            return f.debug_tuple("Scalar").field(&self.coefficients[0]).finish();
        }
        let name = format!("{}{}D", GRADE_NAMES[self.grade as usize], self.dim.n());
        let layout = self.dim.layout();
        let offset = self.dim.grade_offset(self.grade);
        let mut output = f.debug_struct(&name);
        for (i, value) in self.coefficients().iter().enumerate() {
            output.field(layout.field(offset + i), value);
        }
        output.finish()
    }
}

impl PartialEq for KVector {
    fn eq(&self, other: &Self) -> bool {
        MultiVector::from(*self) == MultiVector::from(*other)
    }
}

impl PartialEq<MultiVector> for KVector {
    fn eq(&self, other: &MultiVector) -> bool {
        MultiVector::from(*self) == *other
    }
}

impl PartialEq<f64> for KVector {
    fn eq(&self, other: &f64) -> bool {
        MultiVector::from(*self) == MultiVector::from(*other)
    }
}

impl PartialEq<KVector> for f64 {
    fn eq(&self, other: &KVector) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ga_2d, ga_3d, ga_4d};

    #[test]
    fn new_checks_grade_and_length() {
        assert!(KVector::new(Dim::Three, 2, &[1., 2., 3.]).is_ok());
        assert_eq!(
            Err(GeoError::InvalidGrade {
                grade: 3,
                dim: Dim::Two
            }),
            KVector::new(Dim::Two, 3, &[1.])
        );
        assert_eq!(
            Err(GeoError::CoefficientCount {
                expected: 6,
                found: 3
            }),
            KVector::new(Dim::Four, 2, &[1., 2., 3.])
        );
    }

    #[test]
    fn named_access() {
        let b = ga_3d::bivector(1., 2., 3.);
        assert_eq!(Some(3.), b.get("zx"));
        assert_eq!(None, b.get("x"));
        assert_eq!(2., b[1]);
        assert_eq!(Some(5.), ga_4d::trivector(2., 3., 4., 5.).get("zxw"));
    }

    #[test]
    fn cross_dimension_equality() {
        assert_eq!(ga_2d::vector(1., 2.), ga_3d::vector(1., 2., 0.));
        assert_ne!(ga_3d::vector(1., 2., 0.), ga_3d::vector(1., 2., 0.0001));
        assert_eq!(ga_3d::bivector(4., 0., 0.), ga_2d::bivector(4.));
        assert_ne!(ga_3d::bivector(4., 0., 1.), ga_2d::bivector(4.));
    }

    #[test]
    fn zero_elements_equal_zero() {
        assert_eq!(KVector::zero(Dim::Four, 3).unwrap(), 0.0);
        assert_eq!(0.0, KVector::zero(Dim::Two, 1).unwrap());
        assert_ne!(ga_2d::X, 0.0);
        assert_eq!(KVector::zero(Dim::Two, 1).unwrap(), KVector::zero(Dim::Four, 2).unwrap());
    }

    #[test]
    fn coercion_pads_and_truncates() {
        let v = ga_2d::vector(1., 2.);
        assert_eq!(ga_4d::vector(1., 2., 0., 0.), v.to_4d().unwrap());
        assert_eq!(Dim::Four, v.to_4d().unwrap().dim());

        let w = ga_4d::vector(1., 2., 3., 4.);
        assert_eq!(ga_2d::vector(1., 2.), w.to_2d().unwrap());
        assert_ne!(w, w.to_2d().unwrap());

        let b = ga_4d::bivector(1., 2., 3., 4., 5., 6.);
        assert_eq!(ga_3d::bivector(1., 2., 3.), b.to_3d().unwrap());
        assert!(b.to_1d().is_err());
    }

    #[test]
    fn plus_requires_same_grade() {
        let sum = ga_2d::vector(1., 2.).plus(&ga_3d::vector(0., 0., 3.)).unwrap();
        assert_eq!(ga_3d::vector(1., 2., 3.), sum);
        assert_eq!(
            Err(GeoError::GradeMismatch {
                expected: 1,
                found: 2
            }),
            ga_3d::X.plus(&ga_3d::XY)
        );
        let diff = ga_3d::XY.minus(&ga_3d::YZ).unwrap();
        assert_eq!(ga_3d::bivector(1., -1., 0.), diff);
    }

    #[test]
    fn scalar_division() {
        let v = ga_3d::vector(2., 4., 6.);
        assert_eq!(ga_3d::vector(1., 2., 3.), v.div_scalar(2.).unwrap());
        assert_eq!(Err(GeoError::DivisionByZero), v.div_scalar(0.));
        assert_eq!(ga_3d::vector(4., 8., 12.), 2. * v);
    }

    #[test]
    fn involutions_by_grade() {
        let b = ga_3d::bivector(1., 2., 3.);
        assert_eq!(-b, b.rev());
        assert_eq!(b, b.grade_involution());
        assert_eq!(-b, b.conj());

        assert_eq!(ga_3d::I, ga_3d::I.conj());
        assert_eq!(-ga_3d::I, ga_3d::I.rev());
        assert_eq!(-ga_3d::X, ga_3d::X.conj());
        assert_eq!(ga_4d::J, ga_4d::J.conj());
    }

    #[test]
    fn magnitudes() {
        let v = ga_3d::vector(2., 3., 6.);
        assert_eq!(Ok(49.), v.sqr_mag());
        assert_eq!(Ok(7.), v.mag());
        assert!((v.norm().unwrap().mag().unwrap() - 1.).abs() < 1e-12);
        assert_eq!(Err(GeoError::DivisionByZero), KVector::zero(Dim::Two, 1).unwrap().norm());
    }

    #[test]
    fn non_simple_bivector_norm_sums_unit_parts() {
        let b = ga_4d::bivector(3., 0., 0., 0., 0., 4.);
        assert_eq!(Err(GeoError::UndefinedMagnitude), b.mag());
        assert_eq!(ga_4d::XY + ga_4d::WZ, b.norm().unwrap());
    }

    #[test]
    fn nan_constant() {
        let nan = KVector::nan(Dim::Three, 2).unwrap();
        assert!(nan.coefficients().iter().all(|c| c.is_nan()));
        assert_ne!(nan, nan);
        assert!(KVector::nan(Dim::One, 2).is_err());
    }

    #[test]
    fn debug_names_fields() {
        let text = format!("{:?}", ga_3d::bivector(1., 2., 3.));
        assert_eq!("BiVector3D { xy: 1.0, yz: 2.0, zx: 3.0 }", text);
        assert_eq!("Scalar(2.5)", format!("{:?}", KVector::scalar(2.5)));
    }
}
