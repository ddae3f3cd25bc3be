use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::flight_control::common::vec3d::Vec3D;

/// Response type for the /orbit/position endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct PositionResponse {
    position: Vec3D,
}

impl SerdeJSONBodyHTTPResponseType for PositionResponse {}

impl PositionResponse {
    pub(crate) fn position(&self) -> Vec3D { self.position }
}
