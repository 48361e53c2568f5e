use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

use crate::float_eq::impl_tolerant_vec3;
use crate::Point3;

/// A free direction in 3D space.
///
/// Immutable: every operation returns a new value. Equality is tolerant
/// (see [`crate::float_eq`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3(DVec3);

impl_tolerant_vec3!(Vector3);

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3(DVec3::ZERO);

    /// Create a new vector.
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

    /// The underlying glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// The vector going from `from` to `to` (`to - from`).
    #[inline]
    pub fn between(from: Point3, to: Point3) -> Self {
        to - from
    }

    /// Component-wise (Schur) product.
    #[inline]
    pub fn schur(&self, other: Vector3) -> Vector3 {
        Self(self.0 * other.0)
    }

    #[inline]
    pub fn dot(&self, other: Vector3) -> f64 {
        self.0.dot(other.0)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Self(self.0.cross(other.0))
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns the zero vector when the length is exactly zero. Any other
    /// degenerate input (infinite or NaN components) propagates as NaN.
    pub fn normalized(&self) -> Vector3 {
        let len = self.length();
        if len == 0.0 {
            return Vector3::ZERO;
        }
        *self * (1.0 / len)
    }

    /// Translate `p` by this vector.
    #[inline]
    pub fn add_to(&self, p: Point3) -> Point3 {
        p + *self
    }

    /// Translate `p` by the opposite of this vector.
    #[inline]
    pub fn subtract_from(&self, p: Point3) -> Point3 {
        p - *self
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}
