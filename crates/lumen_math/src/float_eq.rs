//! Tolerant floating-point comparison shared by the vector-like types.
//!
//! Equality of `Vector3`, `Point3` and `Color3` is not bitwise: two components
//! compare equal when they are within a mixed absolute/relative tolerance.
//! Hashing quantizes by the same tolerance, so values that agree to well
//! within it land in the same bucket.

/// Global absolute/relative tolerance.
pub const EPS: f64 = 1e-9;

/// Returns true if `a` and `b` are nearly equal.
///
/// The check is `|a - b| < max(EPS, (|a| + |b|) * EPS)`, with the magnitude
/// sum capped at `f64::MAX` so that huge values do not overflow to infinity.
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f64::MAX);
    diff < EPS.max(norm * EPS)
}

/// Quantize `v` by [`EPS`] for hashing.
#[inline]
pub fn hash_quantized(v: f64) -> i64 {
    // `as` saturates for out-of-range values and maps NaN to 0
    (v / EPS).round() as i64
}

/// Implements tolerant `PartialEq`/`Eq`, quantized `Hash` and a
/// `Name(x, y, z)` `Display` for a newtype over `glam::DVec3`.
///
/// The `Hash` impl does not fully uphold `a == b => hash(a) == hash(b)`.
/// Tolerant equality is not transitive, so two components that compare
/// equal but sit on opposite sides of a quantum boundary (for example
/// `0.49e-9` and `0.51e-9`) round to different buckets. Hashed lookups are
/// only reliable for values that agree to well within `EPS`.
macro_rules! impl_tolerant_vec3 {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::float_eq::nearly_equal(self.0.x, other.0.x)
                    && $crate::float_eq::nearly_equal(self.0.y, other.0.y)
                    && $crate::float_eq::nearly_equal(self.0.z, other.0.z)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::float_eq::hash_quantized(self.0.x), state);
                std::hash::Hash::hash(&$crate::float_eq::hash_quantized(self.0.y), state);
                std::hash::Hash::hash(&$crate::float_eq::hash_quantized(self.0.z), state);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}({:.9}, {:.9}, {:.9})",
                    stringify!($ty),
                    self.0.x,
                    self.0.y,
                    self.0.z
                )
            }
        }
    };
}

pub(crate) use impl_tolerant_vec3;
