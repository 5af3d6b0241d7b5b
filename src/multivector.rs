use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Index, Neg, Sub};

use tracing::debug;

use crate::error::{GeoError, Result};
use crate::kvector::MAX_GRADE_LEN;
use crate::{Dim, KVector};

/// Number of blades in dimension 4
pub(crate) const MAX_LEN: usize = 16;

/// A sum of elements of every grade in one dimension, stored grade-major.
///
/// Coefficients past `dim.len()` are always zero.
#[derive(Copy, Clone)]
pub struct MultiVector {
    dim: Dim,
    coefficients: [f64; MAX_LEN],
}

impl MultiVector {
    pub(crate) const fn from_raw(dim: Dim, coefficients: [f64; MAX_LEN]) -> Self {
        Self { dim, coefficients }
    }

    /// Builds a multivector from all `dim.len()` coefficients in storage order, scalar first.
    pub fn new(dim: Dim, coefficients: &[f64]) -> Result<Self> {
        if coefficients.len() != dim.len() {
            return Err(GeoError::CoefficientCount {
                expected: dim.len(),
                found: coefficients.len(),
            });
        }
        let mut output = Self::zero(dim);
        output.coefficients[..dim.len()].copy_from_slice(coefficients);
        Ok(output)
    }

    pub const fn zero(dim: Dim) -> Self {
        Self::from_raw(dim, [0.0; MAX_LEN])
    }

    /// A scalar declared in a specific dimension.
    pub const fn from_scalar(dim: Dim, value: f64) -> Self {
        let mut coefficients = [0.0; MAX_LEN];
        coefficients[0] = value;
        Self::from_raw(dim, coefficients)
    }

    pub fn nan(dim: Dim) -> Self {
        Self::zero(dim).map(|_| f64::NAN)
    }

    /// Recomposes a multivector from grade parts. Parts of the same grade are summed and
    /// every part is promoted to the largest dimension present.
    pub fn from_grades<I: IntoIterator<Item = KVector>>(parts: I) -> Self {
        parts.into_iter().map(MultiVector::from).sum()
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..self.dim.len()]
    }

    pub(crate) fn coefficients_mut(&mut self) -> &mut [f64] {
        let len = self.dim.len();
        &mut self.coefficients[..len]
    }

    pub fn scalar_part(&self) -> f64 {
        self.coefficients[0]
    }

    /// The grade-`grade` part. Grades above the dimension are the zero scalar.
    pub fn grade(&self, grade: u32) -> KVector {
        if !self.dim.contains_grade(grade) {
            return KVector::scalar(0.0);
        }
        let offset = self.dim.grade_offset(grade);
        let len = self.dim.grade_len(grade);
        let mut coefficients = [0.0; MAX_GRADE_LEN];
        coefficients[..len].copy_from_slice(&self.coefficients[offset..offset + len]);
        KVector::from_raw(self.dim, grade, coefficients)
    }

    /// Every grade part from 0 to the dimension.
    pub fn grades(&self) -> impl Iterator<Item = KVector> + '_ {
        (0..=self.dim.n()).map(|g| self.grade(g))
    }

    /// The grades with at least one nonzero coefficient.
    pub fn nonzero_grades(&self) -> impl Iterator<Item = u32> + '_ {
        (0..=self.dim.n()).filter(|g| !self.grade(*g).is_zero())
    }

    /// The single grade this multivector occupies, if it has at most one nonzero grade.
    /// Zero collapses to the scalar.
    pub fn as_kvector(&self) -> Option<KVector> {
        let mut grades = self.nonzero_grades();
        match (grades.next(), grades.next()) {
            (None, _) => Some(KVector::scalar(0.0)),
            (Some(grade), None) => Some(self.grade(grade)),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients().iter().all(|c| *c == 0.0)
    }

    pub(crate) fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let mut output = *self;
        for c in output.coefficients_mut() {
            *c = f(*c);
        }
        output
    }

    /// Zero-pads into a larger dimension or truncates into a smaller one (lossy).
    pub fn to_dim(&self, dim: Dim) -> Self {
        if dim == self.dim {
            return *self;
        }
        let (source, target) = (self.dim.layout(), dim.layout());
        let mut output = Self::zero(dim);
        for (slot, value) in self.coefficients().iter().enumerate() {
            if let Some((target_slot, sign)) = source.map_slot(slot, target) {
                output.coefficients[target_slot] = sign * value;
            }
        }
        output
    }

    pub fn to_1d(&self) -> Self {
        self.to_dim(Dim::One)
    }

    pub fn to_2d(&self) -> Self {
        self.to_dim(Dim::Two)
    }

    pub fn to_3d(&self) -> Self {
        self.to_dim(Dim::Three)
    }

    pub fn to_4d(&self) -> Self {
        self.to_dim(Dim::Four)
    }

    /// Both operands in the larger of their dimensions.
    pub(crate) fn promote(&self, rhs: &Self) -> (Self, Self) {
        let dim = self.dim.max(rhs.dim);
        (self.to_dim(dim), rhs.to_dim(dim))
    }

    fn zip<F: Fn(f64, f64) -> f64>(&self, rhs: &Self, f: F) -> Self {
        let (mut lhs, rhs) = self.promote(rhs);
        for (l, r) in lhs.coefficients.iter_mut().zip(rhs.coefficients) {
            *l = f(*l, r);
        }
        lhs
    }

    pub fn plus(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }

    pub fn minus(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.map(|c| c * factor)
    }

    pub fn div_scalar(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            debug!("scalar division by zero");
            return Err(GeoError::DivisionByZero);
        }
        Ok(self.map(|c| c / divisor))
    }

    pub(crate) fn map_grades<F: Fn(KVector) -> KVector>(&self, f: F) -> Self {
        let mut output = *self;
        for grade in 0..=self.dim.n() {
            let part = f(self.grade(grade));
            let offset = self.dim.grade_offset(grade);
            output.coefficients[offset..offset + part.len()].copy_from_slice(part.coefficients());
        }
        output
    }

    /// Signs `+ + - - +` by grade.
    pub fn rev(&self) -> Self {
        self.map_grades(|k| k.rev())
    }

    /// Signs `+ - + - +` by grade.
    pub fn grade_involution(&self) -> Self {
        self.map_grades(|k| k.grade_involution())
    }

    /// Clifford conjugate, signs `+ - - + +` by grade. In 3D this negates exactly the vector
    /// and bivector parts.
    pub fn conj(&self) -> Self {
        self.map_grades(|k| k.conj())
    }

    /// Normalizes every grade independently. The scalar maps to its sign, zero grades stay zero
    /// and a non-simple bivector follows [`KVector::norm`].
    pub fn norm(&self) -> Self {
        self.map_grades(|k| match k.as_scalar() {
            Some(s) if s == 0.0 => k,
            Some(s) => KVector::scalar(s.signum()),
            None => k.norm().unwrap_or(k),
        })
    }

    /// Sum of squared coefficients across all grades.
    pub fn coefficient_norm2(&self) -> f64 {
        self.coefficients().iter().map(|c| c * c).sum()
    }
}

impl Index<usize> for MultiVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coefficients()[index]
    }
}

impl From<KVector> for MultiVector {
    fn from(value: KVector) -> Self {
        let dim = value.dim();
        let mut output = Self::zero(dim);
        let offset = dim.grade_offset(value.grade());
        output.coefficients[offset..offset + value.len()].copy_from_slice(value.coefficients());
        output
    }
}

impl From<f64> for MultiVector {
    /// A scalar in dimension 1, which promotes to any peer's dimension.
    fn from(value: f64) -> Self {
        Self::from_scalar(Dim::One, value)
    }
}

impl Neg for MultiVector {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

macro_rules! impl_sum_ops {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl Add<$rhs> for $lhs {
                type Output = MultiVector;

                fn add(self, rhs: $rhs) -> MultiVector {
                    MultiVector::from(self).plus(&MultiVector::from(rhs))
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = MultiVector;

                fn sub(self, rhs: $rhs) -> MultiVector {
                    MultiVector::from(self).minus(&MultiVector::from(rhs))
                }
            }
        )*
    };
}

impl_sum_ops! {
    MultiVector, MultiVector;
    MultiVector, KVector;
    MultiVector, f64;
    KVector, MultiVector;
    KVector, KVector;
    KVector, f64;
    f64, MultiVector;
    f64, KVector;
}

impl Sum for MultiVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MultiVector::zero(Dim::One), |acc, next| acc.plus(&next))
    }
}

impl num_traits::Zero for MultiVector {
    /// The zero scalar of dimension 1, equal to zero in every dimension.
    fn zero() -> Self {
        MultiVector::zero(Dim::One)
    }

    fn is_zero(&self) -> bool {
        MultiVector::is_zero(self)
    }
}

impl num_traits::One for MultiVector {
    fn one() -> Self {
        MultiVector::from(1.0)
    }
}

impl PartialEq for MultiVector {
    /// Exact comparison after promoting both sides to the larger dimension.
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.promote(other);
        lhs.coefficients() == rhs.coefficients()
    }
}

impl PartialEq<KVector> for MultiVector {
    fn eq(&self, other: &KVector) -> bool {
        *self == MultiVector::from(*other)
    }
}

impl PartialEq<f64> for MultiVector {
    fn eq(&self, other: &f64) -> bool {
        *self == MultiVector::from(*other)
    }
}

impl PartialEq<MultiVector> for f64 {
    fn eq(&self, other: &MultiVector) -> bool {
        other == self
    }
}

impl fmt::Debug for MultiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("MultiVector{}D", self.dim.n());
        let layout = self.dim.layout();
        let mut output = f.debug_struct(&name);
        for (slot, value) in self.coefficients().iter().enumerate() {
            output.field(layout.field(slot), value);
        }
        output.finish()
    }
}
