//! Text scene description format.
//!
//! A scene file is a sequence of `keyword arg...` lines. See [`parser`] for
//! the keyword list.
//!
//! # Example
//!
//! ```text
//! size 640 480
//! output spheres.png
//! camera 0 0 5  0 0 0  0 1 0  45
//! ambient 0.1 0.1 0.1
//! point 4 4 4  0.8 0.8 0.8
//! diffuse 0.7 0.2 0.2
//! sphere 0 0 0 1
//! ```

mod loader;
pub mod parser;

pub use loader::*;
pub use parser::{parse_scene, ParseError, ParseResult, SceneParser};
