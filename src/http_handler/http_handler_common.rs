use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use std::collections::HashMap;
use std::fmt;

/// Unit key of the kilometer diameter estimate inside `estimated_diameter`.
pub const KILOMETERS: &str = "kilometers";

/// A feed entry describing one near-earth object and its close approaches.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct NearEarthObjectRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    neo_reference_id: Option<String>,
    name: String,
    #[serde(default)]
    estimated_diameter: Option<HashMap<String, DiameterRange>>,
    #[serde(default)]
    is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

impl NearEarthObjectRecord {
    pub fn id(&self) -> Option<&str> { self.id.as_deref() }
    pub fn neo_reference_id(&self) -> Option<&str> { self.neo_reference_id.as_deref() }
    pub fn name(&self) -> &str { &self.name }
    pub fn is_hazardous(&self) -> Option<bool> { self.is_potentially_hazardous_asteroid }
    pub fn close_approaches(&self) -> &[CloseApproach] { &self.close_approach_data }

    /// Diameter estimate for the given unit key, e.g. [`KILOMETERS`].
    pub fn diameter(&self, unit: &str) -> Option<&DiameterRange> {
        self.estimated_diameter.as_ref().and_then(|units| units.get(unit))
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy)]
pub struct DiameterRange {
    #[serde(default)]
    estimated_diameter_max: Option<f64>,
}

impl DiameterRange {
    pub fn max(&self) -> Option<f64> { self.estimated_diameter_max }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct CloseApproach {
    #[serde(default)]
    close_approach_date: Option<String>,
    #[serde(default)]
    orbiting_body: Option<String>,
    #[serde(default)]
    relative_velocity: Option<RelativeVelocity>,
}

impl CloseApproach {
    pub fn date(&self) -> Option<&str> { self.close_approach_date.as_deref() }
    pub fn orbiting_body(&self) -> Option<&str> { self.orbiting_body.as_deref() }
    pub fn km_per_second(&self) -> Option<&NumericField> {
        self.relative_velocity.as_ref().and_then(|v| v.kilometers_per_second.as_ref())
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct RelativeVelocity {
    #[serde(default)]
    kilometers_per_second: Option<NumericField>,
}

/// A numeric value as the NASA APIs transmit it: either a JSON number or a decimal string.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Whether the field carries no usable value: an empty string or the literal `null`.
    pub fn is_blank(&self) -> bool {
        match self {
            NumericField::Number(_) => false,
            NumericField::Text(text) => {
                let trimmed = text.trim();
                trimmed.is_empty() || trimmed == "null"
            }
        }
    }

    /// Converts the field into an `f64`.
    ///
    /// # Arguments
    /// * `field` – Name of the field, used for the error message.
    ///
    /// # Errors
    /// Returns a [`ConversionError`] if the text is not a finite decimal number.
    pub fn parse(&self, field: &'static str) -> Result<f64, ConversionError> {
        let parsed = match self {
            NumericField::Number(value) => Some(*value),
            NumericField::Text(text) => text.trim().parse::<f64>().ok(),
        };
        parsed.filter(|v| v.is_finite()).ok_or_else(|| ConversionError {
            field,
            value: self.to_string(),
        })
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Number(value) => write!(f, "{value}"),
            NumericField::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// A field was present but could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionError {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not convert {} value {} to a number", self.field, self.value)
    }
}

impl std::error::Error for ConversionError {}

#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::HTTPRequestError(err) => write!(f, "request failed: {err}"),
            HTTPError::HTTPResponseError(err) => write!(f, "response failed: {err}"),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}
