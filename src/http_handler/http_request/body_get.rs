use super::body::BodyResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /body endpoint.
#[derive(Debug)]
pub(crate) struct BodyRequest {}

impl NoBodyHTTPRequestType for BodyRequest {}

impl HTTPRequestType for BodyRequest {
    type Response = BodyResponse;
    fn endpoint(&self) -> &'static str { "/body" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
