use tracing::debug;

use crate::{ga_3d, Dim, Dot, GeoError, KVector, MultiVector, Result, Sandwich, Wedge, EPSILON};

/// A rotation by an angle in a plane, applied as `left · X · right`.
///
/// `left = exp(-θ/2·P̂)` and `right = exp(θ/2·P̂)`. A positive angle in the `xy` plane turns `x`
/// towards `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotor {
    left: MultiVector,
    right: MultiVector,
}

impl Rotor {
    /// Fails with `GradeMismatch` when `plane` is not a bivector and with `DivisionByZero` when
    /// it is zero.
    ///
    /// A 4D bivector with two invariant planes turns by `angle` in each of them.
    pub fn new(angle: f64, plane: KVector) -> Result<Self> {
        plane.expect_grade(2)?;
        let unit = unit_plane(plane)?;
        Ok(Self {
            left: unit.scale(-angle / 2.0).exp(),
            right: unit.scale(angle / 2.0).exp(),
        })
    }

    /// Rotation by the magnitude of `plane`, in `plane`: `left = exp(-P/2)`, `right = exp(P/2)`.
    ///
    /// A 4D bivector with two invariant planes turns each by its own angle.
    pub fn from_plane(plane: KVector) -> Result<Self> {
        plane.expect_grade(2)?;
        if plane.is_zero() {
            debug!("rotation in the zero plane");
            return Err(GeoError::DivisionByZero);
        }
        Ok(Self {
            left: plane.scale(-0.5).exp(),
            right: plane.scale(0.5).exp(),
        })
    }

    pub fn left(&self) -> MultiVector {
        self.left
    }

    pub fn right(&self) -> MultiVector {
        self.right
    }

    /// The inverse rotation.
    pub fn rev(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Rotates a single grade. Bivectors are split into wedges of vectors which are rotated and
    /// wedged back together.
    pub fn rotate(&self, value: KVector) -> KVector {
        if value.grade() != 2 {
            return self.sandwich(MultiVector::from(value)).grade(value.grade());
        }
        let dim = value.dim().max(self.left.dim());
        value
            .bivector_pairs()
            .into_iter()
            .map(|(a, b)| MultiVector::from(self.rotate(a).wedge(self.rotate(b))))
            .fold(MultiVector::zero(dim), |acc, next| acc + next)
            .grade(2)
    }
}

/// The bivector with unit angle in each invariant plane of `plane`.
///
/// A single plane is scaled by its coefficient norm, even when the spatial and temporal parts
/// overlap, so it turns by exactly the requested angle.
fn unit_plane(plane: KVector) -> Result<KVector> {
    if plane.is_zero() {
        debug!("rotation in the zero plane");
        return Err(GeoError::DivisionByZero);
    }
    if plane.dim() != Dim::Four {
        return plane.norm();
    }
    let (a, q) = plane.bivector_invariants();
    if q.abs() <= EPSILON * a {
        return Ok(plane.scale(1.0 / a.sqrt()));
    }
    let (first, second) = plane.orthogonal_decomposition()?;
    let first = first.scale(1.0 / first.coefficient_norm2().sqrt());
    let second = second.scale(1.0 / second.coefficient_norm2().sqrt());
    first.plus(&second)
}

impl Sandwich<MultiVector> for Rotor {
    type Output = MultiVector;

    fn sandwich(&self, value: MultiVector) -> MultiVector {
        self.left * value * self.right
    }
}

impl Sandwich<KVector> for Rotor {
    type Output = KVector;

    fn sandwich(&self, value: KVector) -> KVector {
        self.rotate(value)
    }
}

impl KVector {
    /// Rotates by `angle` in `plane`, see [`Rotor::new`].
    pub fn rotate(&self, angle: f64, plane: KVector) -> Result<KVector> {
        Ok(Rotor::new(angle, plane)?.rotate(*self))
    }

    /// Rotates by the magnitude of `plane`, in `plane`.
    pub fn rotate_plane(&self, plane: KVector) -> Result<KVector> {
        Ok(Rotor::from_plane(plane)?.rotate(*self))
    }

    /// Applies the rotation that turns the direction of `from` into the direction of `to`.
    ///
    /// `from` and `to` are both vectors, or both bivectors of at most three dimensions, which
    /// are turned through their normals. Parallel directions leave the element unchanged.
    /// Antiparallel ones fail with `DivisionByZero`, as the plane of the half turn is not
    /// determined.
    pub fn rotate_from_to(&self, from: KVector, to: KVector) -> Result<KVector> {
        if from.grade() == 2 {
            to.expect_grade(2)?;
            return self.rotate_from_to(plane_normal(from)?, plane_normal(to)?);
        }
        from.expect_grade(1)?;
        to.expect_grade(1)?;
        let from = from.norm()?;
        let to = to.norm()?;
        let plane = from.wedge(to);
        let cos = from.dot(to).as_scalar().unwrap_or(0.0).clamp(-1.0, 1.0);
        if plane.is_zero() {
            if cos > 0.0 {
                return Ok(*self);
            }
            debug!("rotation between antiparallel vectors");
            return Err(GeoError::DivisionByZero);
        }
        self.rotate(cos.acos(), plane)
    }

    /// Pairs of vectors whose wedges sum to this bivector, one pair per simple part.
    ///
    /// Fails with `GradeMismatch` for elements that are not bivectors. The zero bivector has no
    /// pairs.
    pub fn vector_decomposition(&self) -> Result<Vec<(KVector, KVector)>> {
        self.expect_grade(2)?;
        Ok(self.bivector_pairs())
    }

    fn bivector_pairs(&self) -> Vec<(KVector, KVector)> {
        if self.is_zero() {
            return Vec::new();
        }
        let c = self.coefficients();
        let pairs = match self.dim() {
            Dim::One => Vec::new(),
            Dim::Two => vec![(crate::ga_2d::vector(c[0], 0.), crate::ga_2d::Y)],
            Dim::Three => {
                let (xy, yz, zx) = (c[0], c[1], c[2]);
                let pair = if xy != 0.0 {
                    (
                        crate::ga_3d::vector(xy, 0., -yz),
                        crate::ga_3d::vector(0., 1., -zx / xy),
                    )
                } else {
                    (crate::ga_3d::vector(-zx, yz, 0.), crate::ga_3d::Z)
                };
                vec![pair]
            }
            Dim::Four => {
                let (spatial, temporal) = self.decompose();
                [spatial, temporal]
                    .into_iter()
                    .filter(|part| !part.is_zero())
                    .map(|part| part.largest_basis_contraction())
                    .collect()
            }
        };
        pairs
    }
}

/// `P·I` in three dimensions, the vector normal to a plane.
fn plane_normal(plane: KVector) -> Result<KVector> {
    if plane.dim() == Dim::Four {
        debug!("bivectors in four dimensions have no normal vector");
        return Err(GeoError::UndefinedNormal { dim: Dim::Four });
    }
    Ok((plane.promote_to(Dim::Three) * ga_3d::I).grade(1))
}
