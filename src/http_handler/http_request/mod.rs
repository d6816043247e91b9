use super::http_response::{feed, sbdb};

pub mod feed_get;
pub mod request_common;
pub mod sbdb_get;
