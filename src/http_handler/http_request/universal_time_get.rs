use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::universal_time::UniversalTimeResponse;

#[derive(Debug)]
pub(crate) struct UniversalTimeRequest {}

impl NoBodyHTTPRequestType for UniversalTimeRequest {}

impl HTTPRequestType for UniversalTimeRequest {
    type Response = UniversalTimeResponse;
    fn endpoint(&self) -> &'static str { "/ut" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
