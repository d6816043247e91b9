use crate::http_handler::{
    http_handler_common::{ConversionError, NumericField},
    http_response::sbdb::SbdbResponse,
};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Kilometers per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

/// The orbital elements that must be present in a small-body database answer, named by their
/// SBDB keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredElement {
    /// Semi-major axis in AU.
    A,
    /// Eccentricity.
    E,
    /// Inclination in degrees.
    I,
    /// Longitude of the ascending node in degrees.
    Om,
    /// Argument of periapsis in degrees.
    W,
    /// Mean anomaly in degrees.
    Ma,
}

impl RequiredElement {
    pub fn key(self) -> &'static str { self.into() }
}

/// Classical keplerian elements of a heliocentric orbit.
///
/// Lengths are stored in kilometers and angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_periapsis: f64,
    /// Carried along as received. It is a mean anomaly, not a true anomaly, and the sampled
    /// orbit path does not depend on it.
    mean_anomaly: f64,
}

impl OrbitalElements {
    /// Creates a new set of elements from kilometers and radians.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        raan: f64,
        arg_periapsis: f64,
        mean_anomaly: f64,
    ) -> Self {
        Self { semi_major_axis, eccentricity, inclination, raan, arg_periapsis, mean_anomaly }
    }

    /// Creates a new set of elements from the units used by the small-body database: AU and
    /// degrees.
    pub fn from_au_deg(a_au: f64, e: f64, i_deg: f64, om_deg: f64, w_deg: f64, ma_deg: f64) -> Self {
        Self::new(
            a_au * AU_KM,
            e,
            i_deg.to_radians(),
            om_deg.to_radians(),
            w_deg.to_radians(),
            ma_deg.to_radians(),
        )
    }

    /// Reads the six required elements from a small-body database answer.
    ///
    /// # Errors
    /// - [`ElementsError::Incomplete`] if any required element is absent, empty or `null`. All
    ///   missing elements are reported at once.
    /// - [`ElementsError::Conversion`] if a present element is not a number.
    pub fn from_sbdb(response: &SbdbResponse) -> Result<Self, ElementsError> {
        Self::from_element_map(&response.element_map())
    }

    fn from_element_map(map: &HashMap<&str, &NumericField>) -> Result<Self, ElementsError> {
        let missing = RequiredElement::iter()
            .filter(|el| map.get(el.key()).is_none_or(|val| val.is_blank()))
            .collect_vec();
        if !missing.is_empty() {
            return Err(ElementsError::Incomplete(missing));
        }
        let value = |el: RequiredElement| -> Result<f64, ConversionError> {
            map.get(el.key())
                .ok_or(ConversionError { field: el.key(), value: String::new() })?
                .parse(el.key())
        };
        Ok(Self::from_au_deg(
            value(RequiredElement::A)?,
            value(RequiredElement::E)?,
            value(RequiredElement::I)?,
            value(RequiredElement::Om)?,
            value(RequiredElement::W)?,
            value(RequiredElement::Ma)?,
        ))
    }

    /// Semi-major axis in km.
    pub fn semi_major_axis(&self) -> f64 { self.semi_major_axis }
    pub fn eccentricity(&self) -> f64 { self.eccentricity }
    /// Inclination in radians.
    pub fn inclination(&self) -> f64 { self.inclination }
    /// Longitude of the ascending node in radians.
    pub fn raan(&self) -> f64 { self.raan }
    /// Argument of periapsis in radians.
    pub fn arg_periapsis(&self) -> f64 { self.arg_periapsis }
    /// Mean anomaly in radians.
    pub fn mean_anomaly(&self) -> f64 { self.mean_anomaly }

    /// Semi-latus rectum `a(1 - e²)` in km.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Closest distance to the central body in km.
    pub fn periapsis(&self) -> f64 { self.semi_major_axis * (1.0 - self.eccentricity) }

    /// Farthest distance from the central body in km.
    pub fn apoapsis(&self) -> f64 { self.semi_major_axis * (1.0 + self.eccentricity) }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} x {:.0} km x {:.2} deg orbit (e = {:.4})",
            self.periapsis(),
            self.apoapsis(),
            self.inclination.to_degrees(),
            self.eccentricity
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementsError {
    Incomplete(Vec<RequiredElement>),
    Conversion(ConversionError),
}

impl fmt::Display for ElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementsError::Incomplete(missing) => {
                write!(f, "missing orbital elements: {}", missing.iter().join(", "))
            }
            ElementsError::Conversion(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ElementsError {}

impl From<ConversionError> for ElementsError {
    fn from(value: ConversionError) -> Self { ElementsError::Conversion(value) }
}
