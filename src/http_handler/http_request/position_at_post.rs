use super::position::PositionResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /orbit/position endpoint.
///
/// Asks the bridge to propagate the vessel's current orbit to `ut`. The position is returned
/// in the body-fixed frame of the orbited body.
#[derive(serde::Serialize, Debug)]
pub(crate) struct PositionAtRequest {
    /// Universal time to propagate to, in seconds.
    pub(crate) ut: f64,
}

impl JSONBodyHTTPRequestType for PositionAtRequest {
    type Body = PositionAtRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for PositionAtRequest {
    type Response = PositionResponse;
    fn endpoint(&self) -> &'static str { "/orbit/position" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
