//! Splitting 4D bivectors into simple parts.
//!
//! In four dimensions a bivector is in general the sum of two rotations in orthogonal planes.
//! Most operations on bivectors (magnitude, exp, rotation) are only closed-form on a single plane,
//! so they factor through one of the splits here.

use tracing::{debug, trace};

use crate::{ga_4d, Dim, Dot, GeoError, KVector, MultiVector, Result, Wedge, EPSILON};

/// Slots of a 4D bivector, in storage order.
const XY: usize = 0;
const YZ: usize = 1;
const ZX: usize = 2;
const WX: usize = 3;
const WY: usize = 4;
const WZ: usize = 5;

impl KVector {
    fn is_4d_bivector(&self) -> bool {
        self.dim() == Dim::Four && self.grade() == 2
    }

    /// A bivector is simple when it is the wedge of two vectors. Every element other than a 4D
    /// bivector is simple.
    ///
    /// The test is conservative: no spatial plane may share the bivector with its orthogonal
    /// complement, so `xy·wz`, `yz·wx` and `zx·wy` must all be zero.
    pub fn is_simple(&self) -> bool {
        if !self.is_4d_bivector() {
            return true;
        }
        let c = self.coefficients();
        c[XY] * c[WZ] == 0.0 && c[YZ] * c[WX] == 0.0 && c[ZX] * c[WY] == 0.0
    }

    /// Splits a 4D bivector into its spatial part (`xy`, `yz`, `zx`) and its temporal part
    /// (`wx`, `wy`, `wz`). The parts sum back exactly and each is simple.
    ///
    /// Any other element is its own spatial part, with a zero temporal part.
    pub fn decompose(&self) -> (KVector, KVector) {
        if !self.is_4d_bivector() {
            return (*self, self.scale(0.0));
        }
        let c = self.coefficients();
        let mut spatial = [0.0; 6];
        let mut temporal = [0.0; 6];
        spatial[..WX].copy_from_slice(&c[..WX]);
        temporal[WX..].copy_from_slice(&c[WX..]);
        (
            KVector::from_raw(Dim::Four, 2, spatial),
            KVector::from_raw(Dim::Four, 2, temporal),
        )
    }

    /// Sum of squared coefficients and the pseudoscalar coefficient of `B∧B`.
    ///
    /// Together these determine the two rotation angles: `a = θ1² + θ2²` and `q = ±2·θ1·θ2`.
    pub(crate) fn bivector_invariants(&self) -> (f64, f64) {
        let a = self.coefficient_norm2();
        let q = self.wedge(*self).coefficients().first().copied().unwrap_or(0.0);
        (a, q)
    }

    /// Splits a bivector into two simple, mutually orthogonal and commuting bivectors that sum to
    /// it, one per invariant plane. A bivector that is already a single plane comes back
    /// with a zero second part.
    pub fn orthogonal_decomposition(&self) -> Result<(KVector, KVector)> {
        self.expect_grade(2)?;
        Ok(self.invariant_planes())
    }

    fn invariant_planes(&self) -> (KVector, KVector) {
        if !self.is_4d_bivector() || self.is_zero() {
            return (*self, self.scale(0.0));
        }

        let (a, q) = self.bivector_invariants();
        if q.abs() <= EPSILON * a {
            trace!(a, q, "single plane");
            return (*self, self.scale(0.0));
        }

        let first = if (a * a - q * q).abs() <= EPSILON * a * a {
            // every vector lies in an invariant plane, so any basis vector picks one out
            trace!(a, q, "isoclinic");
            self.plane_through_basis_vector()
        } else {
            trace!(a, q, "two planes");
            let (major, minor) = plane_angles(a, q);
            (*self * major - self.dual_4d() * minor)
                .grade(2)
                .scale(major / (major * major - minor * minor))
        };
        let second = (*self - first).grade(2);
        (first, second)
    }

    /// `B·J`, the bivector of the orthogonal complement planes.
    fn dual_4d(&self) -> KVector {
        (*self * ga_4d::J).grade(2)
    }

    /// `a∧(a⌋B)/|a|²` for the basis contraction `a` of [`largest_basis_contraction`]: the part
    /// of the bivector in the plane through `a`, exact when that plane is invariant.
    ///
    /// [`largest_basis_contraction`]: KVector::largest_basis_contraction
    fn plane_through_basis_vector(&self) -> KVector {
        let (vector, contraction) = self.largest_basis_contraction();
        vector.wedge(contraction)
    }

    /// The pair `(a, a⌋B / |a|²)` where `a` is the contraction of a basis vector onto this
    /// bivector with the largest magnitude. For a simple bivector the pair wedges back to it.
    pub(crate) fn largest_basis_contraction(&self) -> (KVector, KVector) {
        let dim = self.dim();
        let best = (0..dim.n() as usize)
            .map(|i| {
                let mut coefficients = [0.0; 6];
                coefficients[i] = 1.0;
                let contraction = KVector::from_raw(dim, 1, coefficients).dot(*self);
                let norm2 = contraction.coefficient_norm2();
                (contraction, norm2)
            })
            .max_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1));

        match best {
            Some((a, norm2)) if norm2 > 0.0 => (a, a.dot(*self).scale(1.0 / norm2)),
            _ => {
                let zero = KVector::zero_or_scalar(dim, 1);
                (zero, zero)
            }
        }
    }

    /// `exp` of a 4D bivector, using the closed forms for one plane and for two planes of equal
    /// angle and the product of the per-plane exponentials otherwise.
    pub(crate) fn bivector_exp_4d(&self) -> MultiVector {
        if self.is_zero() {
            return MultiVector::from_scalar(Dim::Four, 1.0);
        }
        let (a, q) = self.bivector_invariants();
        if q.abs() <= EPSILON * a {
            trace!(a, q, "exp of a single plane");
            return simple_exp(self);
        }
        if (a * a - q * q).abs() <= EPSILON * a * a {
            trace!(a, q, "exp of an isoclinic bivector");
            let theta = (a / 2.0).sqrt();
            let sin = theta.sin();
            let cos = theta.cos();
            let plane = self.scale((2.0 * theta).sin() / (2.0 * theta));
            let pseudoscalar = ga_4d::J.scale(q / a * sin * sin);
            return cos * cos + plane + pseudoscalar;
        }
        let (first, second) = self.invariant_planes();
        simple_exp(&first) * simple_exp(&second)
    }

    /// The closed-form inverse of a 4D bivector: `-(a·B + q·B·J) / (a² - q²)`.
    ///
    /// Singular exactly when the two rotation angles are equal in magnitude.
    pub(crate) fn bivector_inverse_4d(&self) -> Result<KVector> {
        let (a, q) = self.bivector_invariants();
        let denominator = a * a - q * q;
        if denominator == 0.0 {
            debug!(a, q, "inverse of a singular bivector");
            return Err(GeoError::DivisionByZero);
        }
        let numerator = (*self * a + self.dual_4d() * q).grade(2);
        Ok(numerator.scale(-1.0 / denominator))
    }
}

/// Rotation angles of the two invariant planes, larger first, from `a = θ1² + θ2²` and
/// `q = ±2·θ1·θ2`.
fn plane_angles(a: f64, q: f64) -> (f64, f64) {
    let difference = (a - q).max(0.0).sqrt();
    let sum = (a + q).max(0.0).sqrt();
    ((difference + sum) / 2.0, (difference - sum) / 2.0)
}

/// `cos|B| + sin|B|·B̂` for a bivector known to lie in one plane, from its raw coefficients.
pub(crate) fn simple_exp(bivector: &KVector) -> MultiVector {
    let norm2 = bivector.coefficient_norm2();
    if norm2 == 0.0 {
        return MultiVector::from_scalar(bivector.dim(), 1.0);
    }
    let angle = norm2.sqrt();
    MultiVector::from_scalar(bivector.dim(), angle.cos()) + bivector.scale(angle.sin() / angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ga_2d, ga_3d, Commutator, Geo};
    use approx::assert_abs_diff_eq;

    #[test]
    fn simplicity() {
        assert!(ga_3d::bivector(1., 2., 3.).is_simple());
        assert!(ga_2d::I.is_simple());
        assert!(ga_4d::vector(1., 2., 3., 4.).is_simple());
        assert!(ga_4d::bivector(1., 2., 3., 0., 0., 0.).is_simple());
        assert!(ga_4d::bivector(1., 0., 0., 4., 0., 0.).is_simple());
        assert!(!ga_4d::bivector(1., 0., 0., 0., 0., 1.).is_simple());
        assert!(!ga_4d::bivector(0., 1., 0., 1., 0., 0.).is_simple());
    }

    #[test]
    fn spatial_and_temporal_parts_resum_exactly() {
        let b = ga_4d::bivector(1., 0., 0., 0., 0., 1.);
        let (spatial, temporal) = b.decompose();
        assert_eq!(ga_4d::XY, spatial);
        assert_eq!(ga_4d::WZ, temporal);
        assert_eq!(b, spatial.plus(&temporal).unwrap());
        assert!(spatial.is_simple() && temporal.is_simple());

        let b = ga_4d::bivector(0.1, -2., 3.5, 7., 1e-3, 9.);
        let (spatial, temporal) = b.decompose();
        assert_eq!(b, spatial.plus(&temporal).unwrap());
    }

    #[test]
    fn invariants_of_two_planes() {
        // e12 + 2e34, with e34 stored as -wz
        let b = ga_4d::bivector(1., 0., 0., 0., 0., -2.);
        assert_eq!((5., 4.), b.bivector_invariants());
        assert_eq!((2., -1.), plane_angles(5., 4.));
    }

    #[test]
    fn orthogonal_decomposition_finds_invariant_planes() {
        let b = ga_4d::bivector(1., 0., 0., 0., 0., -2.);
        let (major, minor) = b.orthogonal_decomposition().unwrap();
        assert_abs_diff_eq!(ga_4d::bivector(0., 0., 0., 0., 0., -2.), major, epsilon = 1e-12);
        assert_abs_diff_eq!(ga_4d::XY, minor, epsilon = 1e-12);
    }

    #[test]
    fn orthogonal_parts_commute() {
        let b = ga_4d::bivector(1., 2., 3., 4., 5., 6.);
        let (major, minor) = b.orthogonal_decomposition().unwrap();
        assert_abs_diff_eq!(b, major + minor, epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, major.commutator(minor), epsilon = 1e-9);
        assert_abs_diff_eq!(0.0, major.wedge(major), epsilon = 1e-9);
        assert_abs_diff_eq!(0.0, minor.wedge(minor), epsilon = 1e-9);
    }

    #[test]
    fn isoclinic_decomposition() {
        let b = ga_4d::bivector(1., 0., 0., 0., 0., 1.);
        let (first, second) = b.orthogonal_decomposition().unwrap();
        assert_abs_diff_eq!(b, first + second, epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, first.wedge(first), epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, first.geo(second).grade(2), epsilon = 1e-12);
    }

    #[test]
    fn decomposition_of_single_plane() {
        let b = ga_3d::bivector(1., 2., 3.);
        assert_eq!(Ok((b, KVector::zero(Dim::Three, 2).unwrap())), b.orthogonal_decomposition());
        assert_eq!(
            Err(GeoError::GradeMismatch {
                expected: 2,
                found: 1
            }),
            ga_3d::X.orthogonal_decomposition()
        );
    }

    #[test]
    fn basis_contraction_rewedges() {
        // 3yz + 2wy = y∧(3z - 2w)
        let b = ga_4d::bivector(0., 3., 0., 0., 2., 0.);
        let (a, c) = b.largest_basis_contraction();
        assert_abs_diff_eq!(b, a.wedge(c), epsilon = 1e-12);
    }

    #[test]
    fn closed_form_inverse() {
        let b = ga_4d::bivector(1., 0., 0., 0., 0., -2.);
        let inverse = b.bivector_inverse_4d().unwrap();
        assert_abs_diff_eq!(1.0, b * inverse, epsilon = 1e-12);

        let isoclinic = ga_4d::bivector(1., 0., 0., 0., 0., 1.);
        assert_eq!(Err(GeoError::DivisionByZero), isoclinic.bivector_inverse_4d());
    }

    #[test]
    fn isoclinic_exp_matches_product_of_planes() {
        let b = ga_4d::bivector(0.3, 0., 0., 0., 0., 0.3);
        let expected = simple_exp(&ga_4d::XY.scale(0.3)) * simple_exp(&ga_4d::WZ.scale(0.3));
        assert_abs_diff_eq!(expected, b.bivector_exp_4d(), epsilon = 1e-12);
    }

    #[test]
    fn general_exp_matches_product_of_planes() {
        let b = ga_4d::bivector(1., 0., 0., 0., 0., -2.);
        let expected = simple_exp(&ga_4d::XY) * simple_exp(&ga_4d::WZ.scale(-2.));
        assert_abs_diff_eq!(expected, b.bivector_exp_4d(), epsilon = 1e-12);
    }
}
