use super::request_common::HTTPRequestType;
use super::sbdb::SbdbResponse;

/// Request type for the `/sbdb.api` endpoint of the JPL small-body database.
#[derive(Debug)]
pub(crate) struct SbdbRequest<'a> {
    /// Search string identifying the small body.
    pub(crate) sstr: &'a str,
}

impl HTTPRequestType for SbdbRequest<'_> {
    type Response = SbdbResponse;
    fn endpoint(&self) -> &'static str { "/sbdb.api" }
    fn query_params(&self) -> Vec<(&'static str, String)> { vec![("sstr", self.sstr.to_string())] }
}
