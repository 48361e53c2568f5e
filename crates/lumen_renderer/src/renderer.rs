//! Sequential pixel loop and image output.

use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, Rgb, RgbImage};
use lumen_math::Color3;
use thiserror::Error;

use crate::RayTracer;

/// Errors that can occur while writing a rendered image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render output.
pub type RenderResult<T> = Result<T, RenderError>;

/// Simple image buffer for storing render output.
///
/// Row-major with row 0 at the top of the image.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color3::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color3 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color3) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb8_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(self.get(x, y).to_rgb8()))
    }

    /// Write the image as PNG, creating missing parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.to_rgb8_image().save_with_format(path, ImageFormat::Png)?;
        log::info!("Image written: {}", path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Tracer row 0 is the bottom of the image, so tracer pixel `(x, y)` is
/// stored at image row `height - 1 - y`.
pub fn render(tracer: &RayTracer<'_>) -> ImageBuffer {
    let scene = tracer.scene();
    let (width, height) = (scene.width, scene.height);
    log::info!("Rendering {}x{}", width, height);

    let start = Instant::now();
    let mut image = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set(x, height - 1 - y, tracer.pixel_color(x, y));
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
