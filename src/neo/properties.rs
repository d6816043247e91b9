use crate::http_handler::http_handler_common::{
    ConversionError, KILOMETERS, NearEarthObjectRecord,
};

/// Physical properties of a near-earth object as reported by the feed.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectProperties {
    /// Upper bound of the estimated diameter in km.
    size_km: Option<f64>,
    /// Relative velocity at the first listed close approach in km/s.
    speed_km_s: Option<f64>,
}

impl ObjectProperties {
    pub fn new(size_km: Option<f64>, speed_km_s: Option<f64>) -> Self {
        Self { size_km, speed_km_s }
    }

    /// Extracts size and speed from a feed record. Missing data yields `None` for the
    /// respective property.
    ///
    /// # Errors
    /// Returns a [`ConversionError`] if the first close approach carries a velocity that is not
    /// a number.
    pub fn extract(record: &NearEarthObjectRecord) -> Result<Self, ConversionError> {
        let size_km = record.diameter(KILOMETERS).and_then(|range| range.max());
        let speed_km_s = record
            .close_approaches()
            .first()
            .and_then(|approach| approach.km_per_second())
            .map(|speed| speed.parse("kilometers_per_second"))
            .transpose()?;
        Ok(Self { size_km, speed_km_s })
    }

    pub fn size_km(&self) -> Option<f64> { self.size_km }
    pub fn speed_km_s(&self) -> Option<f64> { self.speed_km_s }
}
