//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use lumen_math::{Point3, Ray, Vector3};

use crate::hittable::{Hittable, HIT_EPSILON};
use crate::{Intersection, Material};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    /// Face normal `(b - a) × (c - a)`, unit length; never flipped per ray
    normal: Vector3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices. Counter-clockwise winding
    /// (seen from the front) gives a normal toward the viewer.
    pub fn new(a: Point3, b: Point3, c: Point3, material: Material) -> Self {
        let normal = (b - a).cross(c - a).normalized();
        Self {
            a,
            b,
            c,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction().cross(edge2);
        let det = edge1.dot(h);

        // Ray is parallel to the triangle plane
        if det.abs() < HIT_EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let s = ray.origin() - self.a;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if t < HIT_EPSILON {
            return None;
        }

        Some(Intersection::new(t, ray.at(t), self.normal, self))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
