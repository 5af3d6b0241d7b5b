use approx::{abs_diff_eq, assert_abs_diff_eq};
use geoalg::ga_4d::*;
use geoalg::{GeoError, Rotor, Sandwich, Wedge};
use rand::{thread_rng, Rng};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn pseudoscalar_duals() {
    assert_eq!(YZW, X * J);
    assert_eq!(1.0, J * J);
    assert_eq!(J, XY.wedge(-WZ));
}

#[test]
fn simple_and_non_simple_bivectors() {
    assert!(XY.plus(&ZX).unwrap().is_simple());
    assert!(!XY.plus(&WZ).unwrap().is_simple());
    assert_eq!(Err(GeoError::UndefinedMagnitude), XY.plus(&WZ).unwrap().mag());
    assert_eq!(Ok(2f64.sqrt()), XY.plus(&WX).unwrap().mag());
}

#[test]
fn invariant_planes_of_double_rotation() {
    // e12 + 2e34, with e34 stored as -wz
    let b = XY - WZ.scale(2.);
    let b = b.as_kvector().unwrap();
    let (first, second) = b.orthogonal_decomposition().unwrap();
    for expected in [XY, WZ.scale(-2.)] {
        assert!(
            [first, second]
                .iter()
                .any(|part| abs_diff_eq!(*part, expected, epsilon = 1e-14)),
            "{expected:?} not in {first:?}, {second:?}"
        );
    }
}

#[test]
fn exp_of_isoclinic_bivector() {
    let t = 0.4;
    let b = (XY - WZ).as_kvector().unwrap().scale(t);
    let expected = XY.scale(t).exp() * WZ.scale(-t).exp();
    assert_abs_diff_eq!(expected, b.exp(), epsilon = 1e-15);
}

#[test]
fn inverse_of_non_simple_bivector() {
    let b = bivector(1., -2., 0.5, 3., 0.25, -1.);
    assert!(!b.is_simple());
    assert_abs_diff_eq!(1.0, b * b.inverse().unwrap(), epsilon = 1e-14);
    assert_abs_diff_eq!(1.0, b.inverse().unwrap() * b, epsilon = 1e-14);

    let isoclinic = (XY - WZ).as_kvector().unwrap();
    assert_eq!(Err(GeoError::DivisionByZero), isoclinic.inverse());
}

#[test]
fn double_rotation_turns_both_planes() {
    // x towards y and z towards w
    let rotor = Rotor::new(FRAC_PI_2, (XY - WZ).as_kvector().unwrap()).unwrap();
    assert_abs_diff_eq!(Y, rotor.sandwich(X), epsilon = 1e-14);
    assert_abs_diff_eq!(W, rotor.sandwich(Z), epsilon = 1e-14);
    assert_abs_diff_eq!(-Z, rotor.sandwich(W), epsilon = 1e-14);
}

#[test]
fn log_of_quadvector_needs_a_plane() {
    assert!(J.scale(2.).ln().is_err());
    let ln = J.scale(2.).ln_with_basis(XY).unwrap();
    assert_abs_diff_eq!(J.scale(2.), ln.exp(), epsilon = 1e-12);
}

#[test]
fn lower_dimensions_promote() {
    let planar = geoalg::ga_2d::vector(1., 2.);
    assert_eq!(vector(1., 2., 3., 0.) + W, planar + vector(0., 0., 3., 1.));
    assert_eq!(XY.scale(2.), planar.wedge(X).scale(-1.));
}

#[test]
fn full_turn_in_any_plane_is_identity() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let mut coefficient = || rng.gen_range(-1.0..1.0);
        let plane = bivector(
            coefficient(),
            coefficient(),
            coefficient(),
            coefficient(),
            coefficient(),
            coefficient(),
        );
        let v = vector(coefficient(), coefficient(), coefficient(), coefficient());
        assert_abs_diff_eq!(v, v.rotate(2. * PI, plane).unwrap(), epsilon = 1e-12);
        let half = v.rotate(PI, plane).unwrap();
        assert_abs_diff_eq!(-v, half, epsilon = 1e-12);
    }
}
