//! Primary ray generation and per-pixel colour.

use lumen_core::{OrthonormalBasis, Scene};
use lumen_math::{Color3, Ray, Vector3};

/// Casts one primary ray per pixel into a scene.
///
/// Pixel `(0, 0)` is the bottom-left corner of the image plane.
pub struct RayTracer<'a> {
    scene: &'a Scene,
    basis: OrthonormalBasis,
    pixel_width: f64,
    pixel_height: f64,
}

impl<'a> RayTracer<'a> {
    /// Bind a scene and precompute the camera basis and pixel size.
    ///
    /// `pixel_height = 2 tan(fov / 2) / H` and
    /// `pixel_width = pixel_height * H / W`.
    pub fn new(scene: &'a Scene) -> Self {
        let width = f64::from(scene.width);
        let height = f64::from(scene.height);
        let fov = scene.camera.fov_deg.to_radians();

        let pixel_height = 2.0 * (fov / 2.0).tan() / height;
        let pixel_width = pixel_height * height / width;

        Self {
            scene,
            basis: scene.camera.basis(),
            pixel_width,
            pixel_height,
        }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Normalized ray from the camera through the center of pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let a = self.pixel_width * (f64::from(x) - f64::from(self.scene.width) / 2.0 + 0.5);
        let b = self.pixel_height * (f64::from(y) - f64::from(self.scene.height) / 2.0 + 0.5);

        let direction: Vector3 = (self.basis.u * a + self.basis.v * b - self.basis.w).normalized();
        Ray::new(self.scene.camera.look_from, direction)
    }

    /// Shaded colour of the closest hit through pixel `(x, y)`, or the
    /// ambient colour when the ray escapes.
    pub fn pixel_color(&self, x: u32, y: u32) -> Color3 {
        let ray = self.primary_ray(x, y);
        match self.scene.find_closest_intersection(&ray) {
            Some(hit) => self.scene.shade(&hit, &ray),
            None => self.scene.ambient,
        }
    }
}
