//! Demonstrate vector formatting and a plane framed by three points

use sdgeom::{GeometryError, Line3, Plane, Point3, Vector3};

fn main() -> Result<(), GeometryError> {
    let vector = Vector3::new(1.0, 1.0, 0.0);
    println!("{}", vector);

    let plane = Plane::from_points(
        Point3::new(0.5, 0.5, 1.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    )?;
    println!("{}", plane);
    println!("{:?}", plane.coefficients());
    println!("{}", plane.to_rotation_matrix());

    // A beam frame: x along the member, y as close to global z as possible
    let member = Line3::new(Point3::origin(), Point3::new(4.0, 3.0, 0.0));
    let frame = Plane::from_line(&member, Vector3::unit_z(), true)?;
    println!("{}", frame);

    Ok(())
}
