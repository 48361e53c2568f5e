//! Line-oriented scene description parser.
//!
//! Each non-empty line that does not start with `#` is a keyword followed by
//! whitespace-separated arguments. Keywords are case-insensitive.
//!
//! # Supported Syntax
//!
//! - `size w h`
//! - `output path`
//! - `camera fx fy fz ax ay az ux uy uz fov`
//! - `ambient r g b`, `diffuse r g b`, `specular r g b`, `shininess s`
//! - `directional dx dy dz r g b`, `point px py pz r g b`
//! - `sphere cx cy cz radius`, `plane px py pz nx ny nz`
//! - `maxverts n`, `vertex x y z`, `tri i j k`
//!
//! Material keywords set the "current" material, which is copied into every
//! shape created afterwards.

use lumen_math::{Color3, DVec3, Point3, Vector3};
use thiserror::Error;

use crate::{Camera, Hittable, Light, Material, Plane, Scene, Sphere, Triangle, DEFAULT_OUTPUT};

/// Slack allowed when checking that ambient + diffuse stays within 1.
const MATERIAL_SUM_TOLERANCE: f64 = 1e-12;

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: unknown keyword `{keyword}`")]
    UnknownKeyword { line: usize, keyword: String },

    #[error("line {line}: `{keyword}` expects {expected} argument(s), found {found}")]
    ArgumentCount {
        line: usize,
        keyword: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: {message}")]
    Invalid { line: usize, message: String },

    #[error("missing required `{0}` directive")]
    MissingDirective(&'static str),
}

impl ParseError {
    /// 1-based line the error was found on, if it is tied to a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnknownKeyword { line, .. }
            | ParseError::ArgumentCount { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::Invalid { line, .. } => Some(*line),
            ParseError::MissingDirective(_) => None,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// One tokenized line: the lower-cased keyword and its arguments.
struct Directive<'a> {
    line: usize,
    keyword: String,
    args: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    /// Tokenize a trimmed, non-empty line.
    fn tokenize(line: usize, text: &'a str) -> Self {
        let mut tokens = text.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_lowercase();
        Self {
            line,
            keyword,
            args: tokens.collect(),
        }
    }

    fn expect_args(&self, expected: usize) -> ParseResult<()> {
        if self.args.len() != expected {
            return Err(ParseError::ArgumentCount {
                line: self.line,
                keyword: self.keyword.clone(),
                expected,
                found: self.args.len(),
            });
        }
        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> ParseError {
        ParseError::Invalid {
            line: self.line,
            message: message.into(),
        }
    }

    fn number_error(&self, token: &str) -> ParseError {
        ParseError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
        }
    }

    fn float(&self, i: usize) -> ParseResult<f64> {
        let token = self.args[i];
        token.parse::<f64>().map_err(|_| self.number_error(token))
    }

    fn int(&self, i: usize) -> ParseResult<i64> {
        let token = self.args[i];
        token.parse::<i64>().map_err(|_| self.number_error(token))
    }

    fn triple(&self, i: usize) -> ParseResult<(f64, f64, f64)> {
        Ok((self.float(i)?, self.float(i + 1)?, self.float(i + 2)?))
    }

    fn point(&self, i: usize) -> ParseResult<Point3> {
        let (x, y, z) = self.triple(i)?;
        Ok(Point3::new(x, y, z))
    }

    fn vector(&self, i: usize) -> ParseResult<Vector3> {
        let (x, y, z) = self.triple(i)?;
        Ok(Vector3::new(x, y, z))
    }

    /// Colour arguments are clamped to [0, 1] on construction.
    fn color(&self, i: usize) -> ParseResult<Color3> {
        let (r, g, b) = self.triple(i)?;
        Ok(Color3::new(r, g, b))
    }
}

/// Scene description parser.
///
/// Holds the running state of one parse: the current material, the vertex
/// buffer, the light colour budget and the scene parts seen so far.
pub struct SceneParser {
    size: Option<(u32, u32)>,
    camera: Option<Camera>,
    output: String,
    ambient: Color3,
    material: Material,
    max_verts: Option<usize>,
    vertices: Vec<Point3>,
    light_sum: DVec3,
    lights: Vec<Light>,
    shapes: Vec<Box<dyn Hittable>>,
}

impl Default for SceneParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneParser {
    /// Create a parser with an empty scene and a black, non-specular
    /// current material.
    pub fn new() -> Self {
        Self {
            size: None,
            camera: None,
            output: DEFAULT_OUTPUT.to_string(),
            ambient: Color3::BLACK,
            material: Material::default(),
            max_verts: None,
            vertices: Vec::new(),
            light_sum: DVec3::ZERO,
            lights: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Parse the full description and build the scene.
    pub fn parse(mut self, content: &str) -> ParseResult<Scene> {
        for (index, raw) in content.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            self.parse_directive(&Directive::tokenize(index + 1, text))?;
        }
        self.finish()
    }

    fn parse_directive(&mut self, d: &Directive<'_>) -> ParseResult<()> {
        match d.keyword.as_str() {
            "size" => {
                d.expect_args(2)?;
                let (w, h) = (d.int(0)?, d.int(1)?);
                if w <= 0 || h <= 0 {
                    return Err(d.invalid("size must be > 0"));
                }
                let width = u32::try_from(w).map_err(|_| d.invalid("width is too large"))?;
                let height = u32::try_from(h).map_err(|_| d.invalid("height is too large"))?;
                self.size = Some((width, height));
            }
            "output" => {
                d.expect_args(1)?;
                self.output = d.args[0].to_string();
            }
            "camera" => {
                d.expect_args(10)?;
                let camera = Camera::new(d.point(0)?, d.point(3)?, d.vector(6)?, d.float(9)?);
                if camera.basis().is_degenerate() {
                    log::warn!(
                        "line {}: camera basis is degenerate (up parallel to view direction or look_from == look_at)",
                        d.line
                    );
                }
                self.camera = Some(camera);
            }
            "ambient" => {
                d.expect_args(3)?;
                self.ambient = d.color(0)?;
                self.check_ambient_plus_diffuse(d)?;
            }
            "diffuse" => {
                d.expect_args(3)?;
                self.material.diffuse = d.color(0)?;
                self.check_ambient_plus_diffuse(d)?;
            }
            "specular" => {
                d.expect_args(3)?;
                self.material.specular = d.color(0)?;
            }
            "shininess" => {
                d.expect_args(1)?;
                self.material.shininess = d.float(0)?;
            }
            "directional" => {
                d.expect_args(6)?;
                let light = Light::directional(d.vector(0)?, d.color(3)?);
                self.add_light(d, light)?;
            }
            "point" => {
                d.expect_args(6)?;
                let light = Light::point(d.point(0)?, d.color(3)?);
                self.add_light(d, light)?;
            }
            "sphere" => {
                d.expect_args(4)?;
                let center = d.point(0)?;
                let radius = d.float(3)?;
                if radius.is_nan() || radius <= 0.0 {
                    return Err(d.invalid("sphere radius must be > 0"));
                }
                log::debug!("line {}: sphere at {} radius {}", d.line, center, radius);
                self.shapes
                    .push(Box::new(Sphere::new(center, radius, self.material)));
            }
            "plane" => {
                d.expect_args(6)?;
                let point = d.point(0)?;
                let normal = d.vector(3)?;
                log::debug!("line {}: plane through {} normal {}", d.line, point, normal);
                self.shapes
                    .push(Box::new(Plane::new(point, normal, self.material)));
            }
            "maxverts" => {
                d.expect_args(1)?;
                let n = d.int(0)?;
                let n = usize::try_from(n).map_err(|_| d.invalid("maxverts must be >= 0"))?;
                self.max_verts = Some(n);
            }
            "vertex" => {
                d.expect_args(3)?;
                let vertex = d.point(0)?;
                let max_verts = self
                    .max_verts
                    .ok_or_else(|| d.invalid("maxverts must be declared before vertex"))?;
                if self.vertices.len() >= max_verts {
                    return Err(d.invalid(format!(
                        "too many vertices (maxverts is {})",
                        max_verts
                    )));
                }
                self.vertices.push(vertex);
            }
            "tri" => {
                d.expect_args(3)?;
                let indices = [d.int(0)?, d.int(1)?, d.int(2)?];
                if self.max_verts.is_none() {
                    return Err(d.invalid("maxverts and vertex must be declared before tri"));
                }
                let [a, b, c] = self.vertices_at(d, indices)?;
                log::debug!("line {}: triangle {} {} {}", d.line, a, b, c);
                self.shapes
                    .push(Box::new(Triangle::new(a, b, c, self.material)));
            }
            _ => {
                return Err(ParseError::UnknownKeyword {
                    line: d.line,
                    keyword: d.keyword.clone(),
                })
            }
        }
        Ok(())
    }

    /// Ambient plus the current diffuse must not exceed 1 on any channel.
    fn check_ambient_plus_diffuse(&self, d: &Directive<'_>) -> ParseResult<()> {
        let (a, k) = (self.ambient, self.material.diffuse);
        let limit = 1.0 + MATERIAL_SUM_TOLERANCE;
        if a.r() + k.r() > limit || a.g() + k.g() > limit || a.b() + k.b() > limit {
            return Err(d.invalid("ambient + diffuse exceeds 1 on at least one channel"));
        }
        Ok(())
    }

    /// Record a light, keeping the running sum of light colours within 1.
    fn add_light(&mut self, d: &Directive<'_>, light: Light) -> ParseResult<()> {
        let color = light.color();
        self.light_sum += DVec3::new(color.r(), color.g(), color.b());
        if self.light_sum.cmpgt(DVec3::ONE).any() {
            return Err(d.invalid("sum of light colours exceeds 1 on at least one channel"));
        }
        log::debug!("line {}: {:?}", d.line, light);
        self.lights.push(light);
        Ok(())
    }

    /// Look up three previously declared vertices.
    fn vertices_at(&self, d: &Directive<'_>, indices: [i64; 3]) -> ParseResult<[Point3; 3]> {
        if indices.iter().any(|&i| i < 0) {
            return Err(d.invalid("triangle indices must be >= 0"));
        }
        let count = self.vertices.len();
        let lookup = |i: i64| {
            usize::try_from(i)
                .ok()
                .and_then(|i| self.vertices.get(i).copied())
                .ok_or_else(|| {
                    d.invalid(format!(
                        "triangle index {} out of range ({} vertices declared)",
                        i, count
                    ))
                })
        };
        Ok([lookup(indices[0])?, lookup(indices[1])?, lookup(indices[2])?])
    }

    /// Check required directives and assemble the scene.
    fn finish(self) -> ParseResult<Scene> {
        let (width, height) = self.size.ok_or(ParseError::MissingDirective("size"))?;
        let camera = self.camera.ok_or(ParseError::MissingDirective("camera"))?;

        let mut scene = Scene::new(width, height, camera)
            .with_output(self.output)
            .with_ambient(self.ambient);
        for light in self.lights {
            scene.add_light(light);
        }
        for shape in self.shapes {
            scene.add_shape(shape);
        }

        log::info!(
            "Parsed scene: {}x{}, {} light(s), {} shape(s)",
            scene.width,
            scene.height,
            scene.light_count(),
            scene.shape_count()
        );
        Ok(scene)
    }
}

/// Parse a scene description string.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new().parse(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lumen_math::Ray;

    const HEADER: &str = "size 2 2\ncamera 0 0 0 0 0 -1 0 1 0 60\n";

    fn with_header(body: &str) -> String {
        format!("{}{}", HEADER, body)
    }

    fn parse_err(src: &str) -> ParseError {
        parse_scene(src).expect_err("scene should be rejected")
    }

    #[test]
    fn test_parse_minimal_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let scene = parse_scene(HEADER).unwrap();

        assert_eq!(scene.width, 2);
        assert_eq!(scene.height, 2);
        assert_eq!(scene.camera.look_at, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(scene.camera.fov_deg, 60.0);
        assert_eq!(scene.output, "output.png");
        assert_eq!(scene.ambient, Color3::BLACK);
    }

    #[test]
    fn test_comments_blank_lines_and_case() {
        let src = "# a comment\n\n   \nSIZE 3 4\n  Camera 1 2 3 0 0 0 0 1 0 45  \nOutput out/render.png\n";
        let scene = parse_scene(src).unwrap();

        assert_eq!((scene.width, scene.height), (3, 4));
        assert_eq!(scene.camera.look_from, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.output, "out/render.png");
    }

    #[test]
    fn test_full_scene() {
        let src = with_header(
            "ambient 0.1 0.1 0.1
diffuse 0.5 0.4 0.3
specular 0.2 0.2 0.2
shininess 16
point 0 5 0 0.4 0.4 0.4
directional 0 -1 -1 0.5 0.5 0.5
sphere 0 0 -5 1
diffuse 0.9 0 0
plane 0 -1 0 0 1 0
maxverts 3
vertex -1 -1 -3
vertex 1 -1 -3
vertex 0 1 -3
tri 0 1 2
",
        );
        let scene = parse_scene(&src).unwrap();

        assert_eq!(scene.ambient, Color3::new(0.1, 0.1, 0.1));
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.shape_count(), 3);

        // Material snapshot at creation time
        let sphere = scene.shapes()[0].material();
        assert_eq!(sphere.diffuse, Color3::new(0.5, 0.4, 0.3));
        assert_eq!(sphere.specular, Color3::new(0.2, 0.2, 0.2));
        assert_eq!(sphere.shininess, 16.0);
        assert_eq!(scene.shapes()[1].material().diffuse, Color3::new(0.9, 0.0, 0.0));
        assert_eq!(scene.shapes()[2].material().shininess, 16.0);

        assert_eq!(
            scene.lights()[0],
            Light::point(Point3::new(0.0, 5.0, 0.0), Color3::new(0.4, 0.4, 0.4))
        );
    }

    #[test]
    fn test_triangle_from_vertex_buffer() {
        let src = with_header(
            "maxverts 4
vertex 5 5 5
vertex -1 -1 -5
vertex 1 -1 -5
vertex 0 1 -5
tri 1 2 3
",
        );
        let scene = parse_scene(&src).unwrap();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0));

        let hit = scene.find_closest_intersection(&ray).expect("ray should hit the triangle");
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-9);
        assert_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_missing_size_fails() {
        let err = parse_err("camera 0 0 0 0 0 -1 0 1 0 60\n");
        assert!(matches!(err, ParseError::MissingDirective("size")));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_missing_camera_fails() {
        let err = parse_err("size 2 2\n");
        assert!(matches!(err, ParseError::MissingDirective("camera")));
    }

    #[test]
    fn test_missing_size_reported_before_camera() {
        let err = parse_err("# nothing here\n");
        assert!(matches!(err, ParseError::MissingDirective("size")));
    }

    #[test]
    fn test_invalid_sphere_radius_fails() {
        let src = "size 1 1\ncamera 0 0 0 0 0 -1 0 1 0 60\nsphere 0 0 -5 -1\n";
        let err = parse_err(src);

        assert!(matches!(err, ParseError::Invalid { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: sphere radius must be > 0");
    }

    #[test]
    fn test_zero_radius_fails() {
        let err = parse_err(&with_header("sphere 0 0 -5 0\n"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_non_positive_size_fails() {
        let err = parse_err("size 0 5\ncamera 0 0 0 0 0 -1 0 1 0 60\n");
        assert!(matches!(err, ParseError::Invalid { line: 1, .. }));

        let err = parse_err("size 4 -2\n");
        assert!(matches!(err, ParseError::Invalid { line: 1, .. }));
    }

    #[test]
    fn test_unknown_keyword_fails() {
        let err = parse_err(&with_header("\ncone 0 0 0 1\n"));
        match err {
            ParseError::UnknownKeyword { line, keyword } => {
                assert_eq!(line, 4);
                assert_eq!(keyword, "cone");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_argument_count_fails() {
        let err = parse_err("size 2\n");
        assert!(matches!(
            err,
            ParseError::ArgumentCount {
                line: 1,
                expected: 2,
                found: 1,
                ..
            }
        ));

        let err = parse_err(&with_header("sphere 0 0 -5 1 2\n"));
        assert!(matches!(err, ParseError::ArgumentCount { found: 5, .. }));
    }

    #[test]
    fn test_non_numeric_argument_fails() {
        let err = parse_err(&with_header("point 0 five 0 1 1 1\n"));
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "five");
            }
            other => panic!("unexpected error: {other}"),
        }

        // Integers are required where counts and indices are expected
        let err = parse_err("size 2.5 2\n");
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_ambient_plus_diffuse_limit() {
        assert!(parse_scene(&with_header("ambient 0.2 0.2 0.2\ndiffuse 0.8 0.8 0.8\n")).is_ok());

        let err = parse_err(&with_header("ambient 0.2 0.2 0.2\ndiffuse 0.5 0.9 0.5\n"));
        assert_eq!(err.line(), Some(4));

        // Checked in both orders
        let err = parse_err(&with_header("diffuse 0.5 0.5 0.5\nambient 0.6 0 0\n"));
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_light_sum_limit() {
        let ok = with_header("point 0 1 0 0.5 0.2 0\ndirectional 0 -1 0 0.5 0.8 1\n");
        assert!(parse_scene(&ok).is_ok());

        let err = parse_err(&with_header(
            "point 0 1 0 0.5 0.2 0\ndirectional 0 -1 0 0.5 0.8 1\npoint 1 1 1 0 0.1 0\n",
        ));
        assert_eq!(err.line(), Some(5));
    }

    #[test]
    fn test_colours_clamped_before_validation() {
        // Out-of-range channels are clamped to 1, so a single light is accepted
        let scene = parse_scene(&with_header("point 0 1 0 2 2 2\n")).unwrap();
        assert_eq!(scene.lights()[0].color(), Color3::WHITE);
    }

    #[test]
    fn test_vertex_requires_maxverts() {
        let err = parse_err(&with_header("vertex 0 0 0\n"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_vertex_buffer_overflow() {
        let err = parse_err(&with_header("maxverts 1\nvertex 0 0 0\nvertex 1 0 0\n"));
        assert_eq!(err.line(), Some(5));

        let err = parse_err(&with_header("maxverts -1\n"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_tri_validation() {
        let err = parse_err(&with_header("tri 0 1 2\n"));
        assert_eq!(err.line(), Some(3));

        let err = parse_err(&with_header(
            "maxverts 3\nvertex 0 0 0\nvertex 1 0 0\ntri 0 1 2\n",
        ));
        assert_eq!(
            err.to_string(),
            "line 6: triangle index 2 out of range (2 vertices declared)"
        );

        let err = parse_err(&with_header(
            "maxverts 3\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\ntri 0 -1 2\n",
        ));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_first_error_aborts_parse() {
        // The second line's error is never reached
        let err = parse_err("size 1 1\nbogus\nsphere 0 0 0 -1\n");
        assert!(matches!(err, ParseError::UnknownKeyword { line: 2, .. }));
    }

    #[test]
    fn test_degenerate_camera_is_accepted() {
        let scene = parse_scene("size 1 1\ncamera 0 0 0 0 -1 0 0 1 0 60\n").unwrap();
        assert!(scene.camera.basis().is_degenerate());
    }
}
