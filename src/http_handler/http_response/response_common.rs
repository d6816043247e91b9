use std::fmt;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for response types that are deserialized straight from the JSON body.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(ResponseError::InternalServer(status))
        } else if response.status().is_client_error() {
            let body = response.text().await.unwrap_or_default();
            Err(ResponseError::BadRequest(BadRequestReturn::from_body(status, &body)))
        } else {
            Err(ResponseError::Unknown(status))
        }
    }
}

/// Error payload of a 4xx answer.
///
/// The feed reports `{"error": {"code", "message"}}` or `{"code", "error_message"}`, the
/// small-body database `{"message"}`. Anything else is kept verbatim.
#[derive(Debug, serde::Deserialize, Default)]
pub struct BadRequestReturn {
    #[serde(skip)]
    status: u16,
    #[serde(default, alias = "error_message")]
    message: Option<String>,
    #[serde(default)]
    error: Option<BadRequestDetail>,
    #[serde(skip)]
    raw: String,
}

#[derive(Debug, serde::Deserialize)]
struct BadRequestDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl BadRequestReturn {
    fn from_body(status: u16, body: &str) -> Self {
        let mut parsed = serde_json::from_str::<BadRequestReturn>(body).unwrap_or_default();
        parsed.status = status;
        parsed.raw = body.trim().to_string();
        parsed
    }

    pub fn status(&self) -> u16 { self.status }

    /// The most specific human-readable reason the server gave.
    pub fn reason(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref().or(e.code.as_deref()))
            .or(self.message.as_deref())
            .unwrap_or(self.raw.as_str())
    }
}

#[derive(Debug)]
pub enum ResponseError {
    InternalServer(u16),
    BadRequest(BadRequestReturn),
    Decode(String),
    Timeout,
    NoConnection,
    Unknown(u16),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::InternalServer(status) => write!(f, "server error (status {status})"),
            ResponseError::BadRequest(ret) => {
                write!(f, "bad request (status {}): {}", ret.status(), ret.reason())
            }
            ResponseError::Decode(reason) => write!(f, "could not decode body: {reason}"),
            ResponseError::Timeout => write!(f, "request timed out"),
            ResponseError::NoConnection => write!(f, "no connection"),
            ResponseError::Unknown(status) => write!(f, "unexpected status {status}"),
        }
    }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Decode(value.to_string())
        } else if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if let Some(status) = value.status() {
            ResponseError::Unknown(status.as_u16())
        } else {
            ResponseError::Unknown(0)
        }
    }
}
