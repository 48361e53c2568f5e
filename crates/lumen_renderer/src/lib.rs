//! Lumen Renderer - one primary ray per pixel.
//!
//! Builds primary rays from a scene's camera, shades the closest hit with
//! the scene's local illumination and writes the result as PNG.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//! use lumen_renderer::{render, RayTracer};
//!
//! let scene = load_scene("scene.txt")?;
//! let image = render(&RayTracer::new(&scene));
//! image.save(&scene.output)?;
//! ```

mod renderer;
mod tracer;

pub use renderer::{render, ImageBuffer, RenderError, RenderResult};
pub use tracer::RayTracer;
