use super::elements::OrbitalElements;
use super::rotation::Matrix3;
use super::vec3d::Vec3D;
use std::f64::consts::TAU;

/// A closed orbit sampled at uniform true-anomaly steps, in km.
///
/// The samples span `[0, 2π]` with both ends included, so the first and the last point describe
/// the same position.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OrbitPath {
    points: Vec<Vec3D>,
}

impl OrbitPath {
    /// Number of samples per revolution.
    pub const NUM_POINTS: usize = 200;

    /// Samples one full revolution of the orbit described by `elements`.
    ///
    /// Each true anomaly θ yields the perifocal position `r(θ)·(cos θ, sin θ, 0)` with
    /// `r = a(1 - e²) / (1 + e·cos θ)`, rotated into the inertial frame.
    ///
    /// Only elliptic orbits (`e < 1`) give meaningful results; this is not checked.
    pub fn sample(elements: &OrbitalElements) -> Self {
        let rot = Matrix3::perifocal_to_inertial(
            elements.raan(),
            elements.arg_periapsis(),
            elements.inclination(),
        );
        let p = elements.semi_latus_rectum();
        let e = elements.eccentricity();
        let points = Self::true_anomalies()
            .map(|ta| {
                let (sin_ta, cos_ta) = ta.sin_cos();
                let r = p / (1.0 + e * cos_ta);
                rot * Vec3D::new(r * cos_ta, r * sin_ta, 0.0)
            })
            .collect();
        Self { points }
    }

    /// The sampled true anomalies in radians, evenly spaced over `[0, 2π]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn true_anomalies() -> impl Iterator<Item = f64> {
        let step = TAU / (Self::NUM_POINTS - 1) as f64;
        (0..Self::NUM_POINTS).map(move |i| {
            if i == Self::NUM_POINTS - 1 { TAU } else { i as f64 * step }
        })
    }

    pub fn points(&self) -> &[Vec3D] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Largest distance of any sample from the origin in km.
    pub fn max_radius(&self) -> f64 { self.points.iter().map(Vec3D::abs).fold(0.0, f64::max) }
}
