use super::lat_lon::LatLonResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::flight_control::common::vec3d::Vec3D;

/// Request type for the /body/lat_lon endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LatLonRequest {
    /// Position to convert.
    pub(crate) position: Vec3D,
    /// Reference frame `position` is expressed in.
    pub(crate) reference_frame: String,
}

impl JSONBodyHTTPRequestType for LatLonRequest {
    type Body = LatLonRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LatLonRequest {
    type Response = LatLonResponse;
    fn endpoint(&self) -> &'static str { "/body/lat_lon" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
