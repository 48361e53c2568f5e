use std::ops::{Add, Sub};

use glam::DVec3;

use crate::float_eq::impl_tolerant_vec3;
use crate::Vector3;

/// A position in 3D space.
///
/// Points are translated by vectors; the difference of two points is a
/// vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point3(DVec3);

impl_tolerant_vec3!(Point3);

impl Point3 {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Point3 = Point3(DVec3::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point3) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, rhs: Vector3) -> Point3 {
        Self(self.0 + rhs.as_dvec3())
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Point3 {
        Self(self.0 - rhs.as_dvec3())
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    /// The vector from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::from(self.0 - rhs.0)
    }
}
