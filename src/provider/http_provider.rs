use super::{ProviderError, VesselProvider};
use crate::event;
use crate::flight_control::{
    common::vec3d::Vec3D,
    control_command::ControlCommand,
    telemetry::{BodySnapshot, OrbitSnapshot, VesselSnapshot},
};
use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{
        body_get::BodyRequest,
        control_put::ControlRequest,
        lat_lon_post::LatLonRequest,
        orbit_get::OrbitRequest,
        position_at_post::PositionAtRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        stage_post::StageRequest,
        universal_time_get::UniversalTimeRequest,
        vessel_get::VesselRequest,
    },
};
use async_trait::async_trait;

/// [`VesselProvider`] backed by the REST bridge in front of the simulator.
#[derive(Debug)]
pub(crate) struct HTTPProvider {
    client: HTTPClient,
}

impl HTTPProvider {
    /// Creates a provider talking to the bridge at `base_url`.
    ///
    /// # Errors
    /// A [`ProviderError`] if the HTTP client cannot be constructed.
    pub(crate) fn new(base_url: &str) -> Result<Self, ProviderError> {
        Ok(Self { client: HTTPClient::new(base_url)? })
    }
}

#[async_trait]
impl VesselProvider for HTTPProvider {
    async fn read_vessel_snapshot(&self) -> Result<VesselSnapshot, ProviderError> {
        Ok(VesselRequest {}.send_request(&self.client).await?.into())
    }

    async fn read_orbit_snapshot(&self) -> Result<OrbitSnapshot, ProviderError> {
        Ok(OrbitRequest {}.send_request(&self.client).await?.into())
    }

    async fn read_body_snapshot(&self) -> Result<BodySnapshot, ProviderError> {
        let body = BodyRequest {}.send_request(&self.client).await?;
        event!("Body telemetry for {}", body.name());
        Ok(body.into())
    }

    async fn current_universal_time(&self) -> Result<f64, ProviderError> {
        Ok(UniversalTimeRequest {}.send_request(&self.client).await?.ut())
    }

    async fn propagate_position(&self, orbit: &OrbitSnapshot, ut: f64) -> Result<Vec3D, ProviderError> {
        event!("Propagating orbit (epoch {:.1}) to UT {ut:.1}", orbit.epoch);
        Ok(PositionAtRequest { ut }.send_request(&self.client).await?.position())
    }

    async fn position_to_lat_lon(
        &self,
        position: Vec3D,
        body: &BodySnapshot,
    ) -> Result<(f64, f64), ProviderError> {
        let req = LatLonRequest { position, reference_frame: body.reference_frame.clone() };
        let resp = req.send_request(&self.client).await?;
        Ok((resp.latitude(), resp.longitude()))
    }

    async fn send_control_command(&self, command: &ControlCommand) -> Result<(), ProviderError> {
        let resp = ControlRequest { command }.send_request(&self.client).await?;
        event!("Control command acknowledged: {}", resp.status());
        Ok(())
    }

    async fn activate_next_stage(&self) -> Result<(), ProviderError> {
        let resp = StageRequest {}.send_request(&self.client).await?;
        event!("Stage activated, now in stage {}", resp.current_stage());
        Ok(())
    }
}
