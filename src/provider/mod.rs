//! The seam between guidance and the external vehicle/physics provider.
//!
//! Guidance only ever talks to the vehicle through [`VesselProvider`]; every call is a
//! blocking round trip from the point of view of the control loop.

mod http_provider;
#[cfg(test)]
pub(crate) mod mock;

use crate::flight_control::{
    common::vec3d::Vec3D,
    control_command::ControlCommand,
    telemetry::{BodySnapshot, OrbitSnapshot, VesselSnapshot},
};
use crate::http_handler::http_response::response_common::ResponseError;
use async_trait::async_trait;
use strum_macros::Display;

pub(crate) use http_provider::HTTPProvider;

/// Failed round trip to the provider. Fatal for the guidance loop.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ProviderError {
    NoConnection,
    Timeout,
    Rejected(String),
    Malformed,
    Unknown,
}

impl std::error::Error for ProviderError {}

impl From<ResponseError> for ProviderError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::NoConnection => ProviderError::NoConnection,
            ResponseError::Timeout => ProviderError::Timeout,
            ResponseError::BadRequest(detail) => ProviderError::Rejected(detail.to_string()),
            ResponseError::InternalServer => ProviderError::Rejected(String::from("internal server error")),
            ResponseError::Decode => ProviderError::Malformed,
            ResponseError::Unknown => ProviderError::Unknown,
        }
    }
}

/// Telemetry source and command sink for the active vessel.
#[async_trait]
pub trait VesselProvider: Send + Sync {
    async fn read_vessel_snapshot(&self) -> Result<VesselSnapshot, ProviderError>;
    async fn read_orbit_snapshot(&self) -> Result<OrbitSnapshot, ProviderError>;
    async fn read_body_snapshot(&self) -> Result<BodySnapshot, ProviderError>;
    /// Current universal time in seconds.
    async fn current_universal_time(&self) -> Result<f64, ProviderError>;
    /// Position at universal time `ut`, in the body-fixed frame.
    ///
    /// The bridge always propagates the vessel's live orbit; `orbit` only identifies the
    /// snapshot the caller derived `ut` from and is not sent.
    async fn propagate_position(&self, orbit: &OrbitSnapshot, ut: f64) -> Result<Vec3D, ProviderError>;
    /// Converts a body-fixed position into `(latitude, longitude)` in degrees.
    async fn position_to_lat_lon(
        &self,
        position: Vec3D,
        body: &BodySnapshot,
    ) -> Result<(f64, f64), ProviderError>;
    async fn send_control_command(&self, command: &ControlCommand) -> Result<(), ProviderError>;
    /// Fires the next stage. Not idempotent; callers must guard repeated invocation.
    async fn activate_next_stage(&self) -> Result<(), ProviderError>;
}
