mod support;

use approx::assert_relative_eq;
use sdgeom::{GeometryError, Line3, Matrix, Plane, Point3, Vector3};

use crate::support::{assert_orthonormal_frame, vector_approx_eq};

fn three_point_plane() -> Plane {
    Plane::from_points(
        Point3::new(0.5, 0.5, 1.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    )
    .unwrap()
}

#[test]
fn plane_from_three_points() {
    let plane = three_point_plane();
    assert_eq!(plane.origin(), Vector3::new(0.5, 0.5, 1.0));
    assert!(vector_approx_eq(
        plane.x_axis(),
        [0.4082482904638631, -0.4082482904638631, -0.8164965809277261],
        1e-9
    ));
    assert!(vector_approx_eq(
        plane.y_axis(),
        [-0.7071067811865476, -0.7071067811865476, 0.0],
        1e-9
    ));
    assert!(vector_approx_eq(
        plane.z_axis(),
        [0.5773502691896258, -0.5773502691896258, 0.5773502691896254],
        1e-9
    ));
    assert_orthonormal_frame(&plane);
}

#[test]
fn three_point_plane_contains_its_points() {
    let plane = three_point_plane();
    for p in [
        Point3::new(0.5, 0.5, 1.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ] {
        assert!(plane.evaluate(&p).abs() < 1e-12);
        assert!(plane.contains_point_within(&p, 1e-12).unwrap());
    }
}

#[test]
fn collinear_points_are_degenerate() {
    let result = Plane::from_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
    );
    assert!(matches!(result, Err(GeometryError::Degenerate(_))));
}

#[test]
fn origin_and_axes_keeps_x_direction() {
    let plane = Plane::from_origin_and_axes(
        Point3::new(1.0, 2.0, 3.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
    )
    .unwrap();
    assert_relative_eq!(plane.x_axis(), Vector3::unit_x());
    assert_relative_eq!(plane.y_axis(), Vector3::unit_y());
    // z = y × x, opposite to the normal the coefficients carry
    assert_relative_eq!(plane.z_axis(), Vector3::new(0.0, 0.0, -1.0));
    // unnormalized normal: (2, 0, 0) × (1, 1, 0)
    assert_eq!(plane.coefficients(), [0.0, 0.0, 2.0, -6.0]);
    assert_orthonormal_frame(&plane);
}

#[test]
fn point_normal_frame() {
    let plane = Plane::from_point_normal(Point3::origin(), Vector3::new(1.0, 1.0, 1.0)).unwrap();
    assert_orthonormal_frame(&plane);
    assert!(vector_approx_eq(
        plane.z_axis(),
        [0.5773502691896258, 0.5773502691896258, 0.5773502691896258],
        1e-12
    ));
    assert_eq!(plane.coefficients(), [1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn point_normal_parallel_to_global_x_is_degenerate() {
    for normal in [Vector3::unit_x(), Vector3::new(-3.0, 0.0, 0.0), Vector3::zeros()] {
        assert!(matches!(
            Plane::from_point_normal(Point3::origin(), normal),
            Err(GeometryError::Degenerate(_))
        ));
    }
}

#[test]
fn line_frame_with_x_along_line() {
    let line = Line3::new(Point3::new(1.0, 1.0, 0.0), Point3::new(5.0, 4.0, 0.0));
    let plane = Plane::from_line(&line, Vector3::unit_z(), true).unwrap();
    assert_eq!(plane.origin(), Vector3::new(1.0, 1.0, 0.0));
    assert_relative_eq!(plane.x_axis(), Vector3::new(0.8, 0.6, 0.0));
    assert_relative_eq!(plane.y_axis(), Vector3::unit_z());
    assert_relative_eq!(plane.z_axis(), Vector3::new(0.6, -0.8, 0.0));
    assert_orthonormal_frame(&plane);
    assert_relative_eq!(plane.z_axis(), plane.x_axis().cross(&plane.y_axis()));
}

#[test]
fn line_frame_with_z_along_line() {
    let line = Line3::new(Point3::new(1.0, 1.0, 0.0), Point3::new(5.0, 4.0, 0.0));
    let along = Plane::from_line(&line, Vector3::unit_z(), true).unwrap();
    let plane = Plane::from_line(&line, Vector3::unit_z(), false).unwrap();
    assert_eq!(plane.x_axis(), along.y_axis());
    assert_eq!(plane.y_axis(), along.z_axis());
    assert_eq!(plane.z_axis(), along.x_axis());
    assert_orthonormal_frame(&plane);
    // the line's start lies on the plane normal to it
    assert!(plane.evaluate(&line.start).abs() < 1e-12);
}

#[test]
fn line_frame_orientation_parallel_to_line_falls_back() {
    // horizontal member, hint along the member: oriented to global z instead
    let line = Line3::new(Point3::origin(), Point3::new(3.0, 0.0, 0.0));
    let plane = Plane::from_line(&line, Vector3::new(-2.0, 0.0, 0.0), true).unwrap();
    assert_orthonormal_frame(&plane);
    assert_relative_eq!(plane.y_axis(), Vector3::unit_z());
    assert_relative_eq!(plane.z_axis(), Vector3::new(0.0, -1.0, 0.0));

    // vertical member, hint along the member: oriented to −global x
    let column = Line3::new(Point3::origin(), Point3::new(0.0, 0.0, 3.0));
    let plane = Plane::from_line(&column, Vector3::unit_z(), true).unwrap();
    assert_orthonormal_frame(&plane);
    assert_relative_eq!(plane.y_axis(), Vector3::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(plane.z_axis(), Vector3::new(0.0, -1.0, 0.0));
}

#[test]
fn zero_length_line_frame_is_degenerate() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert!(matches!(
        Plane::from_line(&Line3::new(p, p), Vector3::unit_z(), true),
        Err(GeometryError::Degenerate(_))
    ));
}

#[test]
fn global_planes() {
    assert_eq!(Plane::default(), Plane::xy());
    let yz = Plane::yz();
    assert_eq!(
        yz.to_array(),
        [Vector3::zeros(), Vector3::unit_y(), Vector3::unit_z(), Vector3::unit_x()]
    );
    assert_eq!(yz.coefficients(), [1.0, 0.0, 0.0, 0.0]);
    let xz = Plane::xz();
    assert_eq!(xz.y_axis(), Vector3::unit_z());
    assert_eq!(xz.z_axis(), Vector3::new(0.0, -1.0, 0.0));
    for plane in [Plane::xy(), yz, xz] {
        assert_orthonormal_frame(&plane);
    }
}

#[test]
fn rotation_matrix_rows_are_axes() {
    let plane = three_point_plane();
    let r = plane.to_rotation_matrix();
    assert_eq!(r.shape(), (3, 3));
    assert_eq!(r.to_rows()[0], plane.x_axis().to_array().to_vec());
    assert_eq!(r.to_rows()[2], plane.z_axis().to_array().to_vec());

    // orthonormal rows: R·Rᵀ = I
    let product = r.try_mul(&r.transpose()).unwrap();
    let identity = Matrix::identity(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(
                product.get(i, j).unwrap(),
                identity.get(i, j).unwrap(),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn distances_and_projection() {
    let plane = Plane::from_points(
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    )
    .unwrap();
    let p = Point3::new(2.0, -3.0, 4.0);
    assert_relative_eq!(plane.signed_distance_to_point(&p).unwrap(), 3.0);
    assert_relative_eq!(
        plane.signed_distance_to_point(&Point3::new(0.0, 0.0, -1.0)).unwrap(),
        -2.0
    );
    assert_relative_eq!(plane.distance_to_point(&Point3::new(0.0, 0.0, -1.0)).unwrap(), 2.0);
    assert_relative_eq!(plane.project_point(&p).unwrap(), Point3::new(2.0, -3.0, 1.0));
}

#[test]
fn zero_normal_plane_has_no_distance() {
    let plane = Plane::from_axes(Vector3::zeros(), Vector3::unit_x(), Vector3::unit_y(), Vector3::zeros());
    assert_eq!(
        plane.signed_distance_to_point(&Point3::origin()),
        Err(GeometryError::DivisionByZero)
    );
}

#[test]
fn string_forms() {
    let plane = Plane::from_axes(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::unit_x(),
        Vector3::unit_y(),
        Vector3::unit_z(),
    );
    assert_eq!(
        plane.to_string(),
        "< O{1, 2, 3}, X{1, 0, 0}, Y{0, 1, 0}, Z{0, 0, 1}>"
    );
    assert_eq!(
        plane.to_string_array(),
        ["{1, 2, 3}", "{1, 0, 0}", "{0, 1, 0}", "{0, 0, 1}"].map(String::from)
    );
    assert_eq!(plane.d(), -3.0);
}

#[test]
fn line_frame_orientation_along_oblique_member_falls_back() {
    let start = Point3::new(1.0, 2.0, 3.0);
    let directions = [
        Vector3::new(-4.0, -3.0, 0.0),
        Vector3::new(-4.0, -2.0, 2.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(3.0, -1.0, 4.0),
        Vector3::new(0.3, -0.7, 0.2),
    ];
    for direction in directions {
        let along = direction.unit().unwrap();
        // global z with its component along the member removed
        let expected_y = (Vector3::unit_z() - along * along.z).unit().unwrap();
        for k in [1.0, -2.0, 0.3, 7.0] {
            let line = Line3::from_point_and_vector(start, direction);
            let plane = Plane::from_line(&line, direction * k, true)
                .unwrap_or_else(|e| panic!("{} with hint ×{}: {}", direction, k, e));
            assert_orthonormal_frame(&plane);
            assert!(vector_approx_eq(plane.x_axis(), along.to_array(), 1e-12));
            assert!(
                vector_approx_eq(plane.y_axis(), expected_y.to_array(), 1e-9),
                "{} with hint ×{}: y = {}",
                direction,
                k,
                plane.y_axis()
            );

            let plane = Plane::from_line(&line, direction * k, false).unwrap();
            assert_orthonormal_frame(&plane);
            assert!(vector_approx_eq(plane.z_axis(), along.to_array(), 1e-12));
        }
    }
}

#[test]
fn line_frame_nearly_vertical_member_falls_back_to_negative_x() {
    let column = Line3::new(Point3::origin(), Point3::new(1e-12, 0.0, 1.0));
    let plane = Plane::from_line(&column, Vector3::new(0.0, 0.0, 5.0), true).unwrap();
    assert_orthonormal_frame(&plane);
    assert!(vector_approx_eq(plane.y_axis(), [-1.0, 0.0, 0.0], 1e-9));
}

#[test]
fn line_frame_with_zero_orientation_falls_back() {
    let line = Line3::new(Point3::origin(), Point3::new(2.0, 1.0, 0.0));
    let plane = Plane::from_line(&line, Vector3::zeros(), true).unwrap();
    assert_orthonormal_frame(&plane);
    assert_relative_eq!(plane.y_axis(), Vector3::unit_z());
}

#[test]
fn collinear_decimal_points_are_degenerate() {
    let p1 = Point3::new(0.1, 0.2, 0.3);
    for d in [
        Vector3::new(0.1, 0.7, 0.3),
        Vector3::new(-0.3, 0.1, 0.7),
        Vector3::new(0.01, 0.02, 0.03),
    ] {
        for (s, t) in [(1.0, 2.0), (0.3, 0.7), (-1.1, 2.9)] {
            let result = Plane::from_points(p1, p1 + d * s, p1 + d * t);
            assert!(
                matches!(result, Err(GeometryError::Degenerate(_))),
                "d = {}, s = {}, t = {}: {:?}",
                d,
                s,
                t,
                result
            );
        }
        assert!(matches!(
            Plane::from_origin_and_axes(p1, d * 0.1, d * 0.3),
            Err(GeometryError::Degenerate(_))
        ));
    }
}

#[test]
fn point_normal_nearly_along_global_x_is_degenerate() {
    let normal = Vector3::new(0.7, 1e-17, 0.0);
    assert!(matches!(
        Plane::from_point_normal(Point3::new(0.1, 0.2, 0.3), normal),
        Err(GeometryError::Degenerate(_))
    ));
}

#[test]
fn signed_distance_follows_coefficients_not_z_axis() {
    // (a, b, c) = (0, 0, 1) while z = y × x = −Z
    let plane = Plane::from_points(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
    .unwrap();
    assert_relative_eq!(plane.z_axis(), Vector3::new(0.0, 0.0, -1.0));
    let above = Point3::new(0.0, 0.0, 2.0);
    assert_relative_eq!(plane.signed_distance_to_point(&above).unwrap(), 2.0);
    assert_relative_eq!(plane.project_point(&above).unwrap(), Point3::origin());
}
