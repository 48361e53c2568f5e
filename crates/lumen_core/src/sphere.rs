//! Sphere primitive.

use lumen_math::{Point3, Ray};

use crate::hittable::{Hittable, HIT_EPSILON};
use crate::{Intersection, Material};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius is expected to be positive.
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let oc = ray.origin() - self.center;
        let direction = ray.direction();

        let a = direction.dot(direction);
        let b = 2.0 * oc.dot(direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let inv_2a = 1.0 / (2.0 * a);
        let near = (-b - sqrtd) * inv_2a;
        let far = (-b + sqrtd) * inv_2a;

        // Nearest root in front of the origin
        let t = [near, far]
            .into_iter()
            .filter(|&t| t > HIT_EPSILON)
            .reduce(f64::min)?;

        let position = ray.at(t);
        let normal = (position - self.center).normalized();
        Some(Intersection::new(t, position, normal, self))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lumen_math::Vector3;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-9);
        assert_eq!(hit.position, Point3::new(0.0, 0.0, -4.0));
        assert_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_oblique_hit_lies_on_surface() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.1, 0.15, -1.0));

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert_abs_diff_eq!(hit.position.distance(sphere.center()), sphere.radius(), epsilon = 1e-9);
        assert_eq!(hit.normal, (hit.position - sphere.center()).normalized());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_ray_from_inside_hits_far_side() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::new(1.0, 0.0, 0.0));

        let hit = sphere.intersect(&ray).expect("ray from the center exits the sphere");
        assert_abs_diff_eq!(hit.t, 1.0, epsilon = 1e-9);
        // Outward normal, not flipped toward the ray
        assert_eq!(hit.normal, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_unit_direction_scales_t() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -2.0));

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert_abs_diff_eq!(hit.t, 2.0, epsilon = 1e-9);
        assert_eq!(hit.position, Point3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn test_hit_from_surface_is_not_self_intersection() {
        let sphere = unit_sphere_ahead();
        // Starting on the near surface, pointing away
        let ray = Ray::new(Point3::new(0.0, 0.0, -4.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersect(&ray).is_none());
    }
}
