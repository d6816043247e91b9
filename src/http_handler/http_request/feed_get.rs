use super::feed::FeedResponse;
use super::request_common::HTTPRequestType;
use chrono::NaiveDate;

/// Request type for the `/feed` endpoint of the NEO web service.
#[derive(Debug)]
pub(crate) struct FeedRequest<'a> {
    /// First calendar day of the window.
    pub(crate) start_date: NaiveDate,
    /// Last calendar day of the window, inclusive.
    pub(crate) end_date: NaiveDate,
    pub(crate) api_key: &'a str,
}

impl HTTPRequestType for FeedRequest<'_> {
    type Response = FeedResponse;
    fn endpoint(&self) -> &'static str { "/feed" }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            ("api_key", self.api_key.to_string()),
        ]
    }
}
