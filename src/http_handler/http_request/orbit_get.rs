use super::orbit::OrbitResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /orbit endpoint.
#[derive(Debug)]
pub(crate) struct OrbitRequest {}

impl NoBodyHTTPRequestType for OrbitRequest {}

impl HTTPRequestType for OrbitRequest {
    type Response = OrbitResponse;
    fn endpoint(&self) -> &'static str { "/orbit" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
