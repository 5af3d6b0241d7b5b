//! Random elements with coefficients uniform in `[-1, 1)`.

use rand::distributions::Distribution;
use rand::Rng;

use crate::kvector::MAX_GRADE_LEN;
use crate::multivector::MAX_LEN;
use crate::{Dim, GeoError, KVector, MultiVector, Result};

/// Samples elements of one grade in one dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KVectorSampler {
    dim: Dim,
    grade: u32,
}

impl KVectorSampler {
    pub fn new(dim: Dim, grade: u32) -> Result<Self> {
        if !dim.contains_grade(grade) {
            return Err(GeoError::InvalidGrade { grade, dim });
        }
        Ok(Self { dim, grade })
    }
}

impl Distribution<KVector> for KVectorSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> KVector {
        let mut coefficients = [0.0; MAX_GRADE_LEN];
        for c in coefficients.iter_mut().take(self.dim.grade_len(self.grade)) {
            *c = rng.gen_range(-1.0..1.0);
        }
        KVector::from_raw(self.dim, self.grade, coefficients)
    }
}

/// Samples multivectors of one dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MultiVectorSampler {
    dim: Dim,
}

impl MultiVectorSampler {
    pub fn new(dim: Dim) -> Self {
        Self { dim }
    }
}

impl Distribution<MultiVector> for MultiVectorSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MultiVector {
        let mut coefficients = [0.0; MAX_LEN];
        for c in coefficients.iter_mut().take(self.dim.len()) {
            *c = rng.gen_range(-1.0..1.0);
        }
        MultiVector::from_raw(self.dim, coefficients)
    }
}
