//! Hittable trait for ray-shape intersection.

use std::fmt;

use lumen_math::Ray;

use crate::{Intersection, Material};

/// Minimum accepted hit distance.
///
/// Rejects hits at the ray origin, which keeps shadow rays from
/// re-hitting the surface they start on.
pub const HIT_EPSILON: f64 = 1e-6;

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync + fmt::Debug {
    /// Closest hit of `ray` with this shape at a distance greater than
    /// [`HIT_EPSILON`], or `None`.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Material the shape was created with.
    fn material(&self) -> &Material;
}
