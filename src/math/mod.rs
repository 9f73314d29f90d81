/// 3D point type. Grids lie in the XZ plane with Y up.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Unit vector pointing up, away from the ground plane.
#[must_use]
pub fn up() -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
}
