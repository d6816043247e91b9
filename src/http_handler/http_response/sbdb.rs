use crate::http_handler::http_handler_common::NumericField;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::HashMap;

/// Body of a `/sbdb.api` answer. Only the parts needed to build orbital elements are read.
#[derive(serde::Deserialize, Debug, Default)]
pub struct SbdbResponse {
    #[serde(default)]
    object: Option<SbdbObject>,
    #[serde(default)]
    orbit: Option<SbdbOrbit>,
    /// Set by the service instead of `object`/`orbit` when the search string matched nothing.
    #[serde(default)]
    message: Option<String>,
}

#[derive(serde::Deserialize, Debug, Default)]
struct SbdbObject {
    #[serde(default)]
    fullname: Option<String>,
}

#[derive(serde::Deserialize, Debug, Default)]
struct SbdbOrbit {
    #[serde(default)]
    elements: Vec<SbdbElement>,
}

#[derive(serde::Deserialize, Debug)]
struct SbdbElement {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<NumericField>,
}

impl SerdeJSONBodyHTTPResponseType for SbdbResponse {}

impl SbdbResponse {
    pub fn full_name(&self) -> Option<&str> {
        self.object.as_ref().and_then(|o| o.fullname.as_deref())
    }

    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    /// Collects `orbit.elements` into a name to value map. Entries without a name or without a
    /// value are left out; later duplicates win.
    pub fn element_map(&self) -> HashMap<&str, &NumericField> {
        self.orbit
            .iter()
            .flat_map(|orbit| orbit.elements.iter())
            .filter_map(|el| Some((el.name.as_deref()?, el.value.as_ref()?)))
            .collect()
    }
}
