use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::HTTPError,
    http_request::{
        feed_get::FeedRequest,
        request_common::{HTTPRequestType, RequestError},
        sbdb_get::SbdbRequest,
    },
    http_response::{feed::FeedResponse, sbdb::SbdbResponse},
};
use crate::pipeline::{DateWindow, ElementSource, FeedSource, PipelineConfig};
use std::sync::Arc;

/// Struct holding the remote services used by a pipeline run: the NEO feed and the small-body
/// database, each behind its own HTTP client.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client connected to the NEO feed service.
    feed: Arc<HTTPClient>,
    /// The HTTP client connected to the small-body database.
    sbdb: Arc<HTTPClient>,
    /// The key sent along with every feed request.
    api_key: Arc<str>,
}

impl Keychain {
    /// Creates a new `Keychain` from the service URLs, key and timeout in `config`.
    ///
    /// # Errors
    /// Returns a `RequestError` if one of the HTTP clients cannot be built.
    pub fn new(config: &PipelineConfig) -> Result<Self, RequestError> {
        Ok(Self {
            feed: Arc::new(HTTPClient::new(config.feed_url(), config.timeout())?),
            sbdb: Arc::new(HTTPClient::new(config.sbdb_url(), config.timeout())?),
            api_key: Arc::from(config.api_key()),
        })
    }
}

impl FeedSource for Keychain {
    async fn fetch_feed(&self, window: DateWindow) -> Result<FeedResponse, HTTPError> {
        FeedRequest { start_date: window.start(), end_date: window.end(), api_key: &*self.api_key }
            .send_request(&self.feed)
            .await
    }
}

impl ElementSource for Keychain {
    async fn lookup_elements(&self, sstr: &str) -> Result<SbdbResponse, HTTPError> {
        SbdbRequest { sstr }.send_request(&self.sbdb).await
    }
}
