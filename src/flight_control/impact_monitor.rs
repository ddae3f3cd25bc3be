use super::{common::geo_math::GeoCoordinate, orbit::{ImpactPrediction, ImpactPredictor}};
use crate::provider::{ProviderError, VesselProvider};
use crate::{info, tlm};
use std::convert::Infallible;

/// Passive observer that reports the predicted impact point without commanding the vehicle.
pub struct ImpactMonitor<P: VesselProvider> {
    provider: P,
    launch_pad: GeoCoordinate,
}

impl<P: VesselProvider> ImpactMonitor<P> {
    const REPORT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

    pub fn new(provider: P, launch_pad: GeoCoordinate) -> Self { Self { provider, launch_pad } }

    /// Predicts the impact point and its great-circle distance from the launch pad.
    ///
    /// # Errors
    /// - A [`ProviderError`] if a telemetry read or propagation fails.
    pub async fn report(&self) -> Result<Option<(ImpactPrediction, f64)>, ProviderError> {
        let body = self.provider.read_body_snapshot().await?;
        let prediction = ImpactPredictor::predict_current(&self.provider, &body).await?;
        Ok(prediction.map(|p| {
            let distance = self.launch_pad.distance_to(&p.point(), body.equatorial_radius);
            (p, distance)
        }))
    }

    /// Logs a report once per second until the provider fails.
    ///
    /// # Errors
    /// - The first [`ProviderError`] of a report.
    pub async fn run(&self) -> Result<Infallible, ProviderError> {
        info!("Monitoring impact point, pad at {}", self.launch_pad);
        loop {
            match self.report().await? {
                Some((prediction, distance)) => tlm!(
                    "Impact at {} in {:.0} s, {distance:.0} m from pad",
                    prediction.point(),
                    prediction.time_to_impact()
                ),
                None => tlm!("No impact predicted"),
            }
            tokio::time::sleep(Self::REPORT_INTERVAL).await;
        }
    }
}
