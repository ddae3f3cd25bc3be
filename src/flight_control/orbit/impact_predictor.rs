use crate::flight_control::{
    common::{geo_math::GeoCoordinate, math::wrap_longitude},
    telemetry::{BodySnapshot, OrbitSnapshot},
};
use crate::provider::{ProviderError, VesselProvider};
use std::f64::consts::TAU;

/// Where and when the current unpowered trajectory meets the body's reference sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactPrediction {
    /// Body-fixed impact coordinate, longitude corrected for rotation during the fall.
    point: GeoCoordinate,
    /// Seconds from the prediction until impact.
    time_to_impact: f64,
    /// Universal time of impact.
    impact_ut: f64,
}

impl ImpactPrediction {
    pub fn point(&self) -> GeoCoordinate { self.point }
    pub fn time_to_impact(&self) -> f64 { self.time_to_impact }
    pub fn impact_ut(&self) -> f64 { self.impact_ut }
}

/// Closed-form Kepler impact-point predictor for suborbital arcs.
///
/// Atmospheric drag is ignored, so on bodies with an atmosphere the prediction overshoots.
pub struct ImpactPredictor {}

impl ImpactPredictor {
    /// Computes the time until the orbit next crosses the body's equatorial radius.
    ///
    /// # Arguments
    /// - `orbit`: The current Keplerian state.
    /// - `body`: The orbited body.
    ///
    /// # Returns
    /// - `Some(dt)`: Seconds until surface intersection, strictly positive.
    /// - `None`: If the trajectory is unbound, never rises above the surface, or never
    ///   intersects it.
    pub fn time_to_impact(orbit: &OrbitSnapshot, body: &BodySnapshot) -> Option<f64> {
        let e = orbit.eccentricity;
        let a = orbit.semi_major_axis;
        if e >= 1.0 || orbit.apoapsis_altitude < 0.0 {
            return None;
        }
        let cos_nu = (a * (1.0 - e * e) / body.equatorial_radius - 1.0) / e;
        if !cos_nu.is_finite() || cos_nu.abs() > 1.0 {
            return None;
        }
        let nu_impact = cos_nu.acos();
        let mean_motion = (body.gravitational_parameter / a.powi(3)).sqrt();

        [nu_impact, TAU - nu_impact]
            .into_iter()
            .map(|nu| {
                let m = Self::mean_anomaly_at(nu, e);
                (m - orbit.mean_anomaly + TAU).rem_euclid(TAU) / mean_motion
            })
            .filter(|dt| *dt > 0.0)
            .min_by(f64::total_cmp)
    }

    /// Mean anomaly corresponding to true anomaly `nu` on an ellipse of eccentricity `e`.
    fn mean_anomaly_at(nu: f64, e: f64) -> f64 {
        let cos_e = ((e + nu.cos()) / (1.0 + e * nu.cos())).clamp(-1.0, 1.0);
        let mut ecc_anomaly = cos_e.acos();
        if nu.sin() < 0.0 {
            ecc_anomaly = TAU - ecc_anomaly;
        }
        ecc_anomaly - e * ecc_anomaly.sin()
    }

    /// Shifts a body-fixed longitude back by the rotation of the body during `dt`.
    ///
    /// # Returns
    /// - The corrected longitude in `(-180, 180]`.
    pub fn correct_for_rotation(lon: f64, rotational_speed: f64, dt: f64) -> f64 {
        wrap_longitude(lon - rotational_speed * dt / TAU * 360.0)
    }

    /// Predicts the impact point of the current trajectory.
    ///
    /// The position at impact time is propagated and converted to latitude/longitude by the
    /// provider.
    ///
    /// # Returns
    /// - `Ok(None)` if no impact is possible, see [`ImpactPredictor::time_to_impact`].
    ///
    /// # Errors
    /// - A [`ProviderError`] if propagation or coordinate conversion fails.
    pub async fn predict<P: VesselProvider>(
        provider: &P,
        orbit: &OrbitSnapshot,
        body: &BodySnapshot,
        current_ut: f64,
    ) -> Result<Option<ImpactPrediction>, ProviderError> {
        let Some(dt) = Self::time_to_impact(orbit, body) else {
            return Ok(None);
        };
        let impact_ut = current_ut + dt;
        let position = provider.propagate_position(orbit, impact_ut).await?;
        let (lat, lon) = provider.position_to_lat_lon(position, body).await?;
        let corrected_lon = Self::correct_for_rotation(lon, body.rotational_speed, dt);
        Ok(Some(ImpactPrediction {
            point: GeoCoordinate::new(lat, corrected_lon),
            time_to_impact: dt,
            impact_ut,
        }))
    }

    /// Reads the current orbit and universal time and predicts the impact against `body`.
    ///
    /// # Errors
    /// - A [`ProviderError`] if any telemetry round trip fails.
    pub async fn predict_current<P: VesselProvider>(
        provider: &P,
        body: &BodySnapshot,
    ) -> Result<Option<ImpactPrediction>, ProviderError> {
        let orbit = provider.read_orbit_snapshot().await?;
        let ut = provider.current_universal_time().await?;
        Self::predict(provider, &orbit, body, ut).await
    }
}
