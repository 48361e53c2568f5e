//! Lumen Core - scene model, shading and scene files.
//!
//! This crate provides:
//!
//! - **Camera**: look-from/look-at pinhole camera and its orthonormal basis
//! - **Shapes**: `Sphere`, `Plane` and `Triangle` behind the `Hittable` trait
//! - **Shading**: Lambert diffuse and Blinn-Phong specular with hard shadows
//! - **Scene files**: parsing and loading the text scene format
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("{}x{}, {} shapes", scene.width, scene.height, scene.shape_count());
//! ```

pub mod camera;
pub mod hittable;
pub mod intersection;
pub mod light;
pub mod material;
pub mod plane;
pub mod scene;
pub mod scene_file;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use camera::{Camera, OrthonormalBasis};
pub use hittable::{Hittable, HIT_EPSILON};
pub use intersection::Intersection;
pub use light::{Light, LightSample};
pub use material::Material;
pub use plane::Plane;
pub use scene::{Scene, DEFAULT_OUTPUT};
pub use scene_file::{load_scene, parse_scene, LoadError, ParseError};
pub use sphere::Sphere;
pub use triangle::Triangle;
