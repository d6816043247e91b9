use super::http_request::request_common::RequestError;
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// One instance is used per remote service (NEO feed, small-body database).
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and optional request timeout.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"https://ssd-api.jpl.nasa.gov"`).
    /// * `timeout` – Upper bound for a single request including the body download. `None` keeps
    ///   the transport default of waiting indefinitely.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance, or a `RequestError` if the TLS backend could not be
    /// initialized.
    pub(crate) fn new(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<HTTPClient, RequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RequestError::ClientBuild(e.to_string()))?;
        Ok(HTTPClient { client, base_url: String::from(base_url.trim_end_matches('/')) })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
