//! Pinhole camera and its orthonormal basis.

use lumen_math::{Point3, Vector3};

/// Pinhole camera: look-from, look-at, up direction and vertical field of
/// view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub look_from: Point3,
    pub look_at: Point3,
    pub up: Vector3,
    pub fov_deg: f64,
}

impl Camera {
    /// Create a new camera.
    pub fn new(look_from: Point3, look_at: Point3, up: Vector3, fov_deg: f64) -> Self {
        Self {
            look_from,
            look_at,
            up,
            fov_deg,
        }
    }

    /// Derive the camera basis.
    pub fn basis(&self) -> OrthonormalBasis {
        OrthonormalBasis::from_camera(self)
    }
}

/// Right-handed camera basis: `u` right, `v` up, `w` backward (from the
/// scene toward the camera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    pub u: Vector3,
    pub v: Vector3,
    pub w: Vector3,
}

impl OrthonormalBasis {
    /// Build the basis from a camera.
    ///
    /// `w = normalize(look_from - look_at)`, `u = normalize(up × w)`,
    /// `v = normalize(w × u)`. Nothing is guarded: an up vector parallel to
    /// `w`, or `look_from == look_at`, yields zero or NaN axes that flow
    /// into the render unchanged.
    pub fn from_camera(camera: &Camera) -> Self {
        let w = Vector3::between(camera.look_at, camera.look_from).normalized();
        let u = camera.up.cross(w).normalized();
        let v = w.cross(u).normalized();
        Self { u, v, w }
    }

    /// True if any axis is not unit length (zero, NaN or infinite).
    pub fn is_degenerate(&self) -> bool {
        !(is_unit(self.u) && is_unit(self.v) && is_unit(self.w))
    }
}

fn is_unit(v: Vector3) -> bool {
    (v.length() - 1.0).abs() <= 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_camera() -> Camera {
        Camera::new(
            Point3::ORIGIN,
            Point3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
        )
    }

    #[test]
    fn test_basis_looking_down_negative_z() {
        let basis = default_camera().basis();

        assert_eq!(basis.w, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(basis.u, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(basis.v, Vector3::new(0.0, 1.0, 0.0));
        assert!(!basis.is_degenerate());
    }

    #[test]
    fn test_basis_is_orthonormal_and_right_handed() {
        let camera = Camera::new(
            Point3::new(3.0, 2.0, 5.0),
            Point3::new(-1.0, 0.5, 0.0),
            Vector3::new(0.2, 1.0, 0.1),
            45.0,
        );
        let b = camera.basis();

        assert!(b.u.dot(b.v).abs() < 1e-12);
        assert!(b.u.dot(b.w).abs() < 1e-12);
        assert!(b.v.dot(b.w).abs() < 1e-12);
        assert_eq!(b.u.cross(b.v), b.w);
        // w points from the target back toward the camera
        assert!(b.w.dot(camera.look_from - camera.look_at) > 0.0);
    }

    #[test]
    fn test_parallel_up_is_degenerate() {
        let camera = Camera::new(
            Point3::ORIGIN,
            Point3::new(0.0, -5.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
        );
        let basis = camera.basis();

        assert!(basis.is_degenerate());
        assert_eq!(basis.u, Vector3::ZERO);
    }
}
