//! Point and directional lights.

use lumen_math::{Color3, Point3, Vector3};

/// Direction and distance from a surface point toward a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Unit vector from the surface point toward the light.
    pub direction: Vector3,
    /// Distance to the light along `direction` (infinite for directional lights).
    pub distance: f64,
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Infinitely distant source; `direction` is the way the light travels.
    Directional { direction: Vector3, color: Color3 },
    /// Source at a world position.
    Point { position: Point3, color: Color3 },
}

impl Light {
    pub fn directional(direction: Vector3, color: Color3) -> Self {
        Light::Directional { direction, color }
    }

    pub fn point(position: Point3, color: Color3) -> Self {
        Light::Point { position, color }
    }

    /// Emitted color.
    pub fn color(&self) -> Color3 {
        match self {
            Light::Directional { color, .. } | Light::Point { color, .. } => *color,
        }
    }

    /// Direction toward the light and shadow-ray extent as seen from `from`.
    ///
    /// Diffuse, specular and shadow computations all go through this, so
    /// they agree on how each light kind is oriented.
    pub fn sample(&self, from: Point3) -> LightSample {
        match self {
            Light::Directional { direction, .. } => LightSample {
                direction: (-*direction).normalized(),
                distance: f64::INFINITY,
            },
            Light::Point { position, .. } => {
                let to_light = Vector3::between(from, *position);
                LightSample {
                    direction: to_light.normalized(),
                    distance: to_light.length(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_sample_points_against_travel() {
        let light = Light::directional(Vector3::new(0.0, -2.0, 0.0), Color3::WHITE);
        let sample = light.sample(Point3::new(5.0, 5.0, 5.0));

        assert_eq!(sample.direction, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(sample.distance, f64::INFINITY);
    }

    #[test]
    fn test_point_sample_distance() {
        let light = Light::point(Point3::new(0.0, 3.0, 4.0), Color3::new(0.5, 0.5, 0.5));
        let sample = light.sample(Point3::ORIGIN);

        assert_eq!(sample.direction, Vector3::new(0.0, 0.6, 0.8));
        assert_eq!(sample.distance, 5.0);
        assert_eq!(light.color(), Color3::new(0.5, 0.5, 0.5));
    }
}
