use approx::assert_abs_diff_eq;
use geoalg::ga_3d::*;
use geoalg::{Dot, GeoError, KVector, MultiVector, Rotor, Sandwich, Wedge};
use std::f64::consts::FRAC_PI_2;

#[test]
fn vector_inv() {
    let v = vector(2., 3., 5.);
    assert_eq!(v.inverse().unwrap(), MultiVector::from(1.).div(v).unwrap());
    let expected = vector(2. / 38., 3. / 38., 5. / 38.);
    assert_abs_diff_eq!(expected, v.inverse().unwrap(), epsilon = 1e-16);
}

#[test]
fn cross_dimension_equality() {
    assert_eq!(geoalg::ga_2d::vector(1., 2.), vector(1., 2., 0.));
    assert_ne!(vector(1., 2., 0.), vector(1., 2., 0.0001));
    assert_eq!(XY, X * Y);
    assert_eq!(0.0, X.dot(Y));
}

#[test]
fn pseudoscalar_dual() {
    assert_eq!(YZ, X * I);
    assert_eq!(ZX, Y * I);
    assert_eq!(XY, Z * I);
    assert_eq!(-1.0, I * I);
}

#[test]
fn change_of_basis() {
    let b = vector(2., 3., 5.);

    let a1 = vector(1., 0., 0.);
    let a2 = vector(1., 1., 0.);
    let a3 = vector(1., 1., 1.);
    let a123 = a1.wedge(a2).wedge(a3);

    let alpha = |v: KVector| v.div(a123).unwrap().scalar_part();
    let alpha_1 = alpha(b.wedge(a2).wedge(a3));
    let alpha_2 = alpha(a1.wedge(b).wedge(a3));
    let alpha_3 = alpha(a1.wedge(a2).wedge(b));

    assert_eq!((-1., -2., 5.), (alpha_1, alpha_2, alpha_3));
    assert_eq!(b, a1.scale(alpha_1) + a2.scale(alpha_2) + a3.scale(alpha_3));
}

#[test]
fn wedge_is_dual_of_cross() {
    let a = vector(1., -2., 3.);
    let b = vector(4., 0., -1.);
    assert_eq!(a.wedge(b), I * cross(a, b).unwrap());
}

#[test]
fn contraction_of_vector_onto_plane() {
    // x⌋xy = y, y⌋xy = -x
    assert_eq!(Y, X.dot(XY));
    assert_eq!(-X, Y.dot(XY));
    assert_eq!(X, XY.dot(Y));
    assert_eq!(0.0, Z.dot(XY));
}

#[test]
fn rotor_turns_x_to_y() {
    let rotor = Rotor::new(FRAC_PI_2, XY).unwrap();
    assert_abs_diff_eq!(Y, rotor.sandwich(X), epsilon = 1e-15);
    assert_abs_diff_eq!(-X, rotor.sandwich(Y), epsilon = 1e-15);
    assert_abs_diff_eq!(Z, rotor.sandwich(Z), epsilon = 1e-15);
    assert_abs_diff_eq!(I, rotor.sandwich(I), epsilon = 1e-15);
}

#[test]
fn log_of_rotor_recovers_bivector() {
    let b = bivector(0.3, -0.2, 0.5);
    let rotor = b.exp();
    assert_abs_diff_eq!(b, rotor.ln().unwrap(), epsilon = 1e-14);
    assert_abs_diff_eq!(1.0, rotor * rotor.rev(), epsilon = 1e-15);
}

#[test]
fn log_of_negative_scalar_turns_through_pseudoscalar() {
    let ln = KVector::scalar(-1.).to_3d().unwrap().ln().unwrap();
    assert_abs_diff_eq!(MultiVector::from(I.scale(std::f64::consts::PI)), ln, epsilon = 1e-15);
    assert_abs_diff_eq!(-1.0, ln.exp(), epsilon = 1e-15);
}

#[test]
fn projection_and_rejection_sum_to_vector() {
    let v = vector(2., -1., 4.);
    let plane = bivector(1., 1., 0.);
    let parallel = v.proj(plane).unwrap();
    let rejected = (v - parallel).as_kvector().unwrap();
    assert_abs_diff_eq!(vector(-1., -1., 1.), parallel, epsilon = 1e-14);
    assert_abs_diff_eq!(vector(3., 0., 3.), rejected, epsilon = 1e-14);
    assert_abs_diff_eq!(0.0, rejected.dot(plane), epsilon = 1e-14);
    assert_abs_diff_eq!(0.0, parallel.wedge(plane), epsilon = 1e-14);
}

#[test]
fn division_by_zero() {
    let zero = vector(0., 0., 0.);
    assert_eq!(Err(GeoError::DivisionByZero), zero.inverse());
    assert_eq!(Err(GeoError::DivisionByZero), X.div(zero));
}
