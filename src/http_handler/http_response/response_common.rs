use std::fmt::Display;
use strum_macros::Display;

/// Marker for bridge responses whose JSON body maps 1:1 onto the implementing struct.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

/// Decoding of a raw bridge reply into the typed response.
pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Passes successful replies through and turns every other status into a [`ResponseError`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_client_error() {
            // the bridge answers rejected commands with a `detail` message, but may omit it
            Err(ResponseError::BadRequest(response.json().await.unwrap_or_default()))
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer)
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(response: reqwest::Response) -> Result<T, ResponseError> {
        let checked = Self::check_status(response).await?;
        Ok(checked.json::<T>().await?)
    }
}

/// Error body returned by the bridge for rejected requests.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct BadRequestReturn {
    #[serde(default)]
    detail: String,
}

impl Display for BadRequestReturn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detail.is_empty() { write!(f, "bad request") } else { write!(f, "{}", self.detail) }
    }
}

/// Transport-level failure of a single bridge round trip.
#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    BadRequest(BadRequestReturn),
    NoConnection,
    Timeout,
    /// The reply arrived but did not match the expected schema.
    Decode,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        match value {
            e if e.is_timeout() => ResponseError::Timeout,
            e if e.is_connect() => ResponseError::NoConnection,
            e if e.is_decode() => ResponseError::Decode,
            e if e.is_builder() || e.is_request() => {
                ResponseError::BadRequest(BadRequestReturn::default())
            }
            e if e.is_redirect() || e.is_status() => ResponseError::InternalServer,
            _ => ResponseError::Unknown,
        }
    }
}
