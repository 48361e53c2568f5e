//! Lumen math - double-precision algebra for the ray tracer.
//!
//! Separate value types for directions ([`Vector3`]), positions ([`Point3`])
//! and radiance ([`Color3`]) are built on `glam::DVec3`. All three compare
//! with a tolerance rather than bitwise.

pub mod float_eq;
mod vector;
mod point;
mod color;
mod ray;
mod interval;

pub use vector::Vector3;
pub use point::Point3;
pub use color::Color3;
pub use ray::Ray;
pub use interval::Interval;

// Re-export glam for convenience
pub use glam::DVec3;
