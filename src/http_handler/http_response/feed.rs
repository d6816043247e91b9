use crate::http_handler::http_handler_common::NearEarthObjectRecord;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::BTreeMap;

/// Body of a `/feed` answer. Objects are grouped by ISO calendar date, so iterating the map
/// visits the window in chronological order.
#[derive(serde::Deserialize, Debug)]
pub struct FeedResponse {
    #[serde(default)]
    element_count: usize,
    near_earth_objects: BTreeMap<String, Vec<NearEarthObjectRecord>>,
}

impl SerdeJSONBodyHTTPResponseType for FeedResponse {}

impl FeedResponse {
    /// Number of objects the service claims to have returned.
    pub fn element_count(&self) -> usize { self.element_count }
    pub fn objects_by_date(&self) -> &BTreeMap<String, Vec<NearEarthObjectRecord>> {
        &self.near_earth_objects
    }
    /// Number of records actually contained in the body.
    pub fn record_count(&self) -> usize { self.near_earth_objects.values().map(Vec::len).sum() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_hazard_flag_keeps_feed_readable() {
        let body = json!({
            "element_count": 2,
            "near_earth_objects": {
                "2025-01-01": [
                    { "id": "2465633", "name": "465633 (2009 JR5)", "is_potentially_hazardous_asteroid": true },
                    { "id": "3542519", "name": "(2010 PK9)", "is_potentially_hazardous_asteroid": null }
                ]
            }
        });
        let feed: FeedResponse = serde_json::from_value(body).unwrap();
        assert_eq!(feed.record_count(), 2);
        let records = &feed.objects_by_date()["2025-01-01"];
        assert_eq!(records[0].is_hazardous(), Some(true));
        assert_eq!(records[1].is_hazardous(), None);
        assert_eq!(records[1].name(), "(2010 PK9)");
    }

    #[test]
    fn test_records_without_optional_fields() {
        let body = json!({ "near_earth_objects": { "2025-01-02": [{ "name": "(2024 YR4)" }] } });
        let feed: FeedResponse = serde_json::from_value(body).unwrap();
        let record = &feed.objects_by_date()["2025-01-02"][0];
        assert_eq!(record.id(), None);
        assert_eq!(record.is_hazardous(), None);
        assert!(record.close_approaches().is_empty());
        assert_eq!(feed.element_count(), 0);
    }
}
