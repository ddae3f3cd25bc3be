use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::vessel::VesselResponse;

/// Request type for the /vessel endpoint.
#[derive(Debug)]
pub(crate) struct VesselRequest {}

impl NoBodyHTTPRequestType for VesselRequest {}

impl HTTPRequestType for VesselRequest {
    type Response = VesselResponse;
    fn endpoint(&self) -> &'static str { "/vessel" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
