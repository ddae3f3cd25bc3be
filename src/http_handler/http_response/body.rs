use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::flight_control::telemetry::BodySnapshot;

/// Response type for the /body endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct BodyResponse {
    name: String,
    equatorial_radius: f64,
    gravitational_parameter: f64,
    rotational_speed: f64,
    reference_frame: String,
}

impl SerdeJSONBodyHTTPResponseType for BodyResponse {}

impl BodyResponse {
    pub(crate) fn name(&self) -> &str { self.name.as_str() }
}

impl From<BodyResponse> for BodySnapshot {
    fn from(value: BodyResponse) -> Self {
        BodySnapshot {
            equatorial_radius: value.equatorial_radius,
            gravitational_parameter: value.gravitational_parameter,
            rotational_speed: value.rotational_speed,
            reference_frame: value.reference_frame,
        }
    }
}
