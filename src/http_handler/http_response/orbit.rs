use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::flight_control::telemetry::OrbitSnapshot;

/// Response type for the /orbit endpoint. Angles are in radians.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct OrbitResponse {
    semi_major_axis: f64,
    eccentricity: f64,
    true_anomaly: f64,
    mean_anomaly: f64,
    apoapsis_altitude: f64,
    epoch: f64,
}

impl SerdeJSONBodyHTTPResponseType for OrbitResponse {}

impl From<OrbitResponse> for OrbitSnapshot {
    fn from(value: OrbitResponse) -> Self {
        OrbitSnapshot {
            semi_major_axis: value.semi_major_axis,
            eccentricity: value.eccentricity,
            true_anomaly: value.true_anomaly,
            mean_anomaly: value.mean_anomaly,
            apoapsis_altitude: value.apoapsis_altitude,
            epoch: value.epoch,
        }
    }
}
