//! Clamped RGB radiance.

use std::ops::{Add, Mul};

use glam::DVec3;

use crate::float_eq::impl_tolerant_vec3;

/// An RGB color with every channel in [0, 1].
///
/// Construction and every arithmetic result clamp each channel, so the
/// invariant holds for all values of this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color3(DVec3);

impl_tolerant_vec3!(Color3);

impl Color3 {
    pub const BLACK: Color3 = Color3(DVec3::ZERO);
    pub const WHITE: Color3 = Color3(DVec3::ONE);

    /// Create a new color, clamping each channel to [0, 1].
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(clamp01(r), clamp01(g), clamp01(b)))
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Component-wise (Schur) product.
    #[inline]
    pub fn schur(&self, other: Color3) -> Color3 {
        Self::new(
            self.r() * other.r(),
            self.g() * other.g(),
            self.b() * other.b(),
        )
    }

    /// Pack into a 24-bit `0xRRGGBB` integer.
    pub fn to_rgb(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Convert each channel to an 8-bit value, `round(c * 255)`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.r()),
            channel_to_u8(self.g()),
            channel_to_u8(self.b()),
        ]
    }
}

/// Clamp to [0, 1]. NaN is passed through untouched.
#[inline]
fn clamp01(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

#[inline]
fn channel_to_u8(c: f64) -> u8 {
    // Masked to 8 bits; NaN converts to 0
    ((c * 255.0).round() as i64 & 0xff) as u8
}

impl Add for Color3 {
    type Output = Color3;

    #[inline]
    fn add(self, rhs: Color3) -> Color3 {
        Self::new(self.r() + rhs.r(), self.g() + rhs.g(), self.b() + rhs.b())
    }
}

impl Mul<f64> for Color3 {
    type Output = Color3;

    #[inline]
    fn mul(self, rhs: f64) -> Color3 {
        Self::new(self.r() * rhs, self.g() * rhs, self.b() * rhs)
    }
}
