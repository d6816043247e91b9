use std::fmt::Display;
use std::ops::Sub;

/// A point or vector in a 3D cartesian frame.
///
/// Serialized as a plain `[x, y, z]` array.
#[derive(Debug, PartialEq, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3D {
    /// The x-component of the vector.
    x: f64,
    /// The y-component of the vector.
    y: f64,
    /// The z-component of the vector.
    z: f64,
}

impl Vec3D {
    /// Creates a new vector with the given components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub const fn x(&self) -> f64 { self.x }
    pub const fn y(&self) -> f64 { self.y }
    pub const fn z(&self) -> f64 { self.z }

    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> f64 { (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt() }

    /// Computes the Euclidean distance between the current vector and another vector.
    pub fn euclid_distance(&self, other: &Self) -> f64 { (*self - *other).abs() }
}

impl From<[f64; 3]> for Vec3D {
    fn from(value: [f64; 3]) -> Self { Self::new(value[0], value[1], value[2]) }
}

impl From<Vec3D> for [f64; 3] {
    fn from(value: Vec3D) -> Self { [value.x, value.y, value.z] }
}

impl Sub for Vec3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Display for Vec3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}
