pub mod feed;
pub mod response_common;
pub mod sbdb;
