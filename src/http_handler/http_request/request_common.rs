use super::super::http_client::HTTPClient;
use super::super::http_handler_common::HTTPError;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};
use std::fmt;

/// A GET request against one endpoint of an [`HTTPClient`]'s base URL.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str;
    /// Query parameters appended to the URL, in order.
    fn query_params(&self) -> Vec<(&'static str, String)>;

    /// Sends the request and reads the response.
    ///
    /// # Errors
    /// Returns an [`HTTPError`] if the URL is malformed, the transport fails, the server answers
    /// with a non-success status, or the body cannot be decoded.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let url = compose_url(client.url(), self.endpoint())?;
        let response = client
            .client()
            .get(url)
            .query(&self.query_params())
            .send()
            .await
            .map_err(ResponseError::from)?;
        Ok(<Self::Response as HTTPResponseType>::read_response(response).await?)
    }
}

/// Joins a base URL and an endpoint path into a request URL.
///
/// # Errors
/// Returns [`RequestError::InvalidUrl`] if the result is not a valid absolute URL.
pub(crate) fn compose_url(base: &str, endpoint: &str) -> Result<reqwest::Url, RequestError> {
    let raw = format!("{}{endpoint}", base.trim_end_matches('/'));
    reqwest::Url::parse(&raw).map_err(|_| RequestError::InvalidUrl(raw))
}

#[derive(Debug)]
pub enum RequestError {
    InvalidUrl(String),
    ClientBuild(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidUrl(url) => write!(f, "invalid request url {url}"),
            RequestError::ClientBuild(reason) => write!(f, "could not build http client: {reason}"),
        }
    }
}

impl std::error::Error for RequestError {}
