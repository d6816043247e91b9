use super::config::DateWindow;
use crate::http_handler::{
    http_handler_common::HTTPError,
    http_response::{feed::FeedResponse, sbdb::SbdbResponse},
};

/// Provides the near-earth objects of a date window.
pub(crate) trait FeedSource {
    async fn fetch_feed(&self, window: DateWindow) -> Result<FeedResponse, HTTPError>;
}

/// Provides orbital data for a small body, looked up by search string.
pub(crate) trait ElementSource {
    async fn lookup_elements(&self, sstr: &str) -> Result<SbdbResponse, HTTPError>;
}
