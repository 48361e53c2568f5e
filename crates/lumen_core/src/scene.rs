//! Scene aggregate: camera, image settings, lights and shapes.
//!
//! The scene is built once (normally by the scene-file parser) and is only
//! read while rendering. Closest-hit search and shadow tests are brute-force
//! linear scans over the shape list.

use lumen_math::{Color3, Interval, Ray};

use crate::hittable::HIT_EPSILON;
use crate::{Camera, Hittable, Intersection, Light};

/// Output path used when the scene description does not name one.
pub const DEFAULT_OUTPUT: &str = "output.png";

/// A complete scene ready to render.
#[derive(Debug)]
pub struct Scene {
    /// Image width in pixels (> 0)
    pub width: u32,

    /// Image height in pixels (> 0)
    pub height: u32,

    /// Output image path
    pub output: String,

    pub camera: Camera,

    /// Ambient term added to every shaded hit; also the colour of camera rays
    /// that hit nothing
    pub ambient: Color3,

    lights: Vec<Light>,
    shapes: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create an empty scene with a black ambient and the default output path.
    pub fn new(width: u32, height: u32, camera: Camera) -> Self {
        Self {
            width,
            height,
            output: DEFAULT_OUTPUT.to_string(),
            camera,
            ambient: Color3::BLACK,
            lights: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the ambient colour.
    pub fn with_ambient(mut self, ambient: Color3) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a light. Lights are shaded in insertion order.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a shape.
    pub fn add_shape(&mut self, shape: Box<dyn Hittable>) {
        self.shapes.push(shape);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn shapes(&self) -> &[Box<dyn Hittable>] {
        &self.shapes
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Nearest hit of `ray` over all shapes, or `None` if every shape misses.
    pub fn find_closest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.intersect(ray))
            .min_by(|a, b| a.t.total_cmp(&b.t))
    }

    /// True if any shape blocks the path from `hit` to `light`.
    ///
    /// The shadow ray starts `HIT_EPSILON` above the surface along the normal
    /// and only hits strictly inside `(ε, distance - ε)` count. Every shape is
    /// tested, including the one that was hit.
    pub fn is_shadowed(&self, hit: &Intersection<'_>, light: &Light) -> bool {
        let sample = light.sample(hit.position);
        let shadow_ray = Ray::new(hit.position + hit.normal * HIT_EPSILON, sample.direction);
        let blocking = Interval::new(HIT_EPSILON, sample.distance - HIT_EPSILON);

        self.shapes.iter().any(|shape| {
            shape
                .intersect(&shadow_ray)
                .is_some_and(|occluder| blocking.surrounds(occluder.t))
        })
    }

    /// Colour seen along `ray` at `hit`: ambient plus the diffuse and
    /// specular terms of every light that is not in shadow.
    pub fn shade(&self, hit: &Intersection<'_>, ray: &Ray) -> Color3 {
        let eye_dir = (-ray.direction()).normalized();

        self.lights
            .iter()
            .filter(|light| !self.is_shadowed(hit, light))
            .fold(self.ambient, |color, light| {
                color + hit.lambert(light) + hit.blinn_phong(light, eye_dir)
            })
    }
}
