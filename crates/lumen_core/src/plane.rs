//! Infinite plane primitive.

use lumen_math::{Point3, Ray, Vector3};

use crate::hittable::{Hittable, HIT_EPSILON};
use crate::{Intersection, Material};

/// An infinite plane through `point` with the given (not necessarily unit)
/// normal.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
    material: Material,
}

impl Plane {
    pub fn new(point: Point3, normal: Vector3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let denom = ray.direction().dot(self.normal);

        // Ray is parallel to the plane
        if denom.abs() < HIT_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t < HIT_EPSILON {
            return None;
        }

        // Reported normal keeps the declared orientation
        Some(Intersection::new(
            t,
            ray.at(t),
            self.normal.normalized(),
            self,
        ))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
