use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::flight_control::{common::vec3d::Vec3D, telemetry::VesselSnapshot};

/// Response type for the /vessel endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct VesselResponse {
    position: Vec3D,
    latitude: f64,
    longitude: f64,
    mean_altitude: f64,
    pitch: f64,
    heading: f64,
    roll: f64,
    mass: f64,
    thrust: f64,
    liquid_fuel: f64,
    liquid_fuel_max: f64,
}

impl SerdeJSONBodyHTTPResponseType for VesselResponse {}

impl VesselResponse {
    /// Remaining liquid fuel as a fraction; a vessel without tanks reads as empty.
    pub(crate) fn fuel_fraction(&self) -> f64 {
        if self.liquid_fuel_max > 0.0 { self.liquid_fuel / self.liquid_fuel_max } else { 0.0 }
    }
}

impl From<VesselResponse> for VesselSnapshot {
    fn from(value: VesselResponse) -> Self {
        VesselSnapshot {
            fuel_fraction: value.fuel_fraction(),
            position: value.position,
            latitude: value.latitude,
            longitude: value.longitude,
            mean_altitude: value.mean_altitude,
            pitch: value.pitch,
            heading: value.heading,
            roll: value.roll,
            mass: value.mass,
            thrust: value.thrust,
        }
    }
}
