mod support;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sdgeom::{
    GeometryError, Point3, Vector3, Xyz,
    float_types::{FRAC_PI_2, PI, Real},
};

use crate::support::{approx_eq, vector_approx_eq};

fn sample() -> Vector3 {
    Vector3::new(11.0, 23.0, 2.0)
}

#[test]
fn magnitude_of_sample() {
    assert!(approx_eq(sample().magnitude(), 25.573423705088842, 1e-9));
}

#[test]
fn unit_of_sample() {
    let u = sample().unit().unwrap();
    assert!(vector_approx_eq(
        u,
        [0.4301340378531763, 0.8993711700566414, 0.07820618870057751],
        1e-9
    ));
    assert_relative_eq!(u.magnitude(), 1.0, epsilon = 1e-12);
}

#[test]
fn gram_schmidt_is_exact_for_integers() {
    let r = Vector3::gram_schmidt(&sample(), &Vector3::new(2.0, 5.0, 6.0));
    assert_eq!(r, Vector3::new(-1637.0, -3422.0, -292.0));
}

#[test]
fn gram_schmidt_with_unit_basis_removes_parallel_part() {
    let v1 = sample().unit().unwrap();
    let r = Vector3::gram_schmidt(&v1, &Vector3::new(2.0, 5.0, 6.0));
    assert_abs_diff_eq!(r.dot(&v1), 0.0, epsilon = 1e-12);
}

#[test]
fn cross_is_orthogonal_and_anticommutative() {
    let a = sample();
    let b = Vector3::new(2.0, 5.0, 6.0);
    let c = a.cross(&b);
    assert_eq!(a.dot(&c), 0.0);
    assert_eq!(b.dot(&c), 0.0);
    assert_eq!(c, -b.cross(&a));
    assert!(a.is_orthogonal(&c));
}

#[test]
fn angle_between_axes() {
    assert_relative_eq!(
        Vector3::angle(&Vector3::unit_x(), &Vector3::unit_y()).unwrap(),
        FRAC_PI_2
    );
    assert_relative_eq!(
        Vector3::angle(&Vector3::unit_x(), &-Vector3::unit_x()).unwrap(),
        PI
    );
    // rounding noise must not push acos out of its domain
    let v = Vector3::new(0.1, 0.2, 0.3);
    assert_eq!(Vector3::angle(&v, &(v * 3.0)).map(|a| a.is_nan()), Ok(false));
    assert_eq!(
        Vector3::angle(&Vector3::zeros(), &v),
        Err(GeometryError::DivisionByZero)
    );
}

#[test]
fn parallel_predicates() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    assert!(a.is_parallel(&(a * -2.0)));
    assert!(!a.is_parallel(&Vector3::new(1.0, 2.0, 3.0 + 1e-6)));
    assert!(a.is_parallel_within(&Vector3::new(1.0, 2.0, 3.0 + 1e-12), 1e-9));
    assert!(a.is_nearly_parallel(&Vector3::new(1.0, 2.0, 3.0 + 1e-12)));
}

#[test]
fn project_onto_axis() {
    let p = Vector3::new(3.0, 4.0, 5.0).project(&Vector3::new(0.0, 0.0, 2.0)).unwrap();
    assert_eq!(p, Vector3::new(0.0, 0.0, 5.0));
    assert_eq!(
        Vector3::unit_x().project(&Vector3::zeros()),
        Err(GeometryError::DivisionByZero)
    );
}

#[test]
fn triangular_area_and_coplanarity() {
    assert_eq!(Vector3::triangular_area(&Vector3::unit_x(), &Vector3::unit_y()), 0.5);
    let (a, b) = (Vector3::new(1.0, 2.0, 0.0), Vector3::new(-3.0, 1.0, 0.0));
    assert!(Vector3::coplanar(&a, &b, &(a + b)));
    assert!(!Vector3::coplanar(&a, &b, &Vector3::unit_z()));
    assert_eq!(Vector3::triple_product(&Vector3::unit_x(), &Vector3::unit_y(), &Vector3::unit_z()), 1.0);
}

#[test]
fn amplitude_and_checked_div() {
    let v = Vector3::new(0.0, 3.0, 4.0);
    assert_relative_eq!(v.amplitude(10.0).unwrap(), Vector3::new(0.0, 6.0, 8.0));
    assert_eq!(v.checked_div(2.0), Ok(Vector3::new(0.0, 1.5, 2.0)));
    assert_eq!(v.checked_div(0.0), Err(GeometryError::DivisionByZero));
}

#[test]
fn display_and_parse_round_trip() {
    let v = Vector3::new(1.5, -0.1, 1e-7);
    let text = v.to_string();
    assert_eq!(text, "{1.5, -0.1, 0.0000001}");
    assert_eq!(text.parse::<Vector3>(), Ok(v));
    assert_eq!("1, 2, 3".parse::<Vector3>(), Ok(Vector3::new(1.0, 2.0, 3.0)));
}

#[test]
fn parse_rejects_malformed_input() {
    for bad in ["{1, 2}", "{1, 2, 3, 4}", "{a, b, c}", ""] {
        assert_eq!(
            bad.parse::<Vector3>(),
            Err(GeometryError::Format(bad.to_string())),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn equals_rounded_after_renormalizing() {
    let u = sample().unit().unwrap();
    assert!(u.unit().unwrap().equals_rounded(&u, 10));
    assert!(Vector3::new(1.00004, 2.0, 3.0).equals_rounded(&Vector3::new(1.0, 2.0, 3.0), 4));
    assert!(!Vector3::new(1.0004, 2.0, 3.0).equals_rounded(&Vector3::new(1.0, 2.0, 3.0), 4));
}

#[test]
fn slices_and_arrays() {
    let values: [Real; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
    assert_eq!(Vector3::from_slice_at(&values, 2), Ok(Vector3::new(2.0, 3.0, 4.0)));
    assert_eq!(
        Vector3::from_slice_at(&values, 3),
        Err(GeometryError::ArrayTooShort { len: 5, start: 3 })
    );
    assert_eq!(
        Vector3::from_slice(&[1.0, 2.0]),
        Err(GeometryError::ArrayTooShort { len: 2, start: 0 })
    );
    let a: [Real; 3] = Vector3::new(7.0, 8.0, 9.0).into();
    assert_eq!(a, [7.0, 8.0, 9.0]);
}

#[test]
fn vector_point_conversion() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let p: Point3 = v.into();
    assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(Vector3::from(p), v);
    assert!(v.is_finite());
    assert!(!Vector3::new(Real::NAN, 0.0, 0.0).is_finite());
}
