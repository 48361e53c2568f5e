//! Surface material for local illumination.

use lumen_math::Color3;

/// Blinn-Phong material: diffuse and specular reflectance plus the
/// specular exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color3,
    pub specular: Color3,
    /// Specular exponent; zero or negative disables the specular term.
    pub shininess: f64,
}

impl Material {
    pub fn new(diffuse: Color3, specular: Color3, shininess: f64) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }

    /// A purely diffuse material.
    pub fn diffuse(diffuse: Color3) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }
}

impl Default for Material {
    /// Black, non-specular.
    fn default() -> Self {
        Self {
            diffuse: Color3::BLACK,
            specular: Color3::BLACK,
            shininess: 0.0,
        }
    }
}
