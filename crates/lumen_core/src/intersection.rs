//! Intersection record and local illumination terms.

use lumen_math::{Color3, Point3, Vector3};

use crate::{Hittable, Light};

/// Record of a ray-shape intersection.
///
/// Produced fresh for every query; `shape` borrows the surface that was hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Ray parameter of the hit (> 0)
    pub t: f64,
    /// World-space hit position
    pub position: Point3,
    /// Unit surface normal as reported by the shape
    pub normal: Vector3,
    /// Shape that was hit
    pub shape: &'a dyn Hittable,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, position: Point3, normal: Vector3, shape: &'a dyn Hittable) -> Self {
        Self {
            t,
            position,
            normal,
            shape,
        }
    }

    /// Lambertian diffuse term: `light ⊙ diffuse · (N·L)`, zero when the
    /// light is behind the surface.
    pub fn lambert(&self, light: &Light) -> Color3 {
        let to_light = light.sample(self.position).direction;

        let cos_theta = to_light.dot(self.normal);
        if cos_theta <= 0.0 {
            return Color3::BLACK;
        }

        light.color().schur(self.shape.material().diffuse) * cos_theta
    }

    /// Blinn-Phong specular term: `light ⊙ specular · max(0, N·H)^shininess`.
    ///
    /// `eye_dir` is the unit vector from the hit toward the viewer. Zero when
    /// the light is behind the surface or the shininess is not positive.
    pub fn blinn_phong(&self, light: &Light, eye_dir: Vector3) -> Color3 {
        let material = self.shape.material();
        let to_light = light.sample(self.position).direction;

        let cos_nl = to_light.dot(self.normal);
        if cos_nl <= 0.0 || material.shininess <= 0.0 {
            return Color3::BLACK;
        }

        let halfway = (to_light + eye_dir).normalized();
        let cos_nh = halfway.dot(self.normal).max(0.0);

        light.color().schur(material.specular) * cos_nh.powf(material.shininess)
    }
}
