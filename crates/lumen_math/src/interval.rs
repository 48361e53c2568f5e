/// An open range `(min, max)` of ray parameters.
///
/// Used to bound shadow rays: only hits strictly between the surface offset
/// and the light count as occluders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if `t` lies strictly between `min` and `max`.
    pub fn surrounds(&self, t: f64) -> bool {
        self.min < t && t < self.max
    }
}
