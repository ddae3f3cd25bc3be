//! Scripted in-memory provider for guidance tests.

use super::{ProviderError, VesselProvider};
use crate::flight_control::{
    common::vec3d::Vec3D,
    control_command::ControlCommand,
    telemetry::{BodySnapshot, OrbitSnapshot, VesselSnapshot},
};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

pub(crate) struct MockState {
    pub(crate) vessel: VesselSnapshot,
    pub(crate) orbit: OrbitSnapshot,
    pub(crate) body: BodySnapshot,
    pub(crate) ut: f64,
    /// Body-fixed coordinates returned for any propagated position.
    pub(crate) surface_lat_lon: (f64, f64),
    pub(crate) commands: Vec<ControlCommand>,
    pub(crate) stages_fired: usize,
    pub(crate) propagated_to: Vec<f64>,
    /// Number of calls answered before the connection drops.
    pub(crate) fail_after: Option<usize>,
    pub(crate) calls: usize,
}

pub(crate) struct MockProvider {
    state: Mutex<MockState>,
}

pub(crate) fn kerbin() -> BodySnapshot {
    BodySnapshot {
        equatorial_radius: 600_000.0,
        gravitational_parameter: 3.5316e12,
        rotational_speed: 2.908_882_086_6e-4,
        reference_frame: String::from("kerbin_fixed"),
    }
}

pub(crate) fn pad_vessel() -> VesselSnapshot {
    VesselSnapshot {
        position: Vec3D::new(159_780.0, -1_018.0, -578_410.0),
        latitude: -0.0972,
        longitude: -74.5577,
        mean_altitude: 74.0,
        pitch: 90.0,
        heading: 90.0,
        roll: 0.0,
        mass: 20_000.0,
        thrust: 0.0,
        fuel_fraction: 1.0,
    }
}

/// Suborbital arc with apoapsis ~70 km that intersects the surface.
pub(crate) fn suborbital_arc() -> OrbitSnapshot {
    OrbitSnapshot {
        semi_major_axis: 380_000.0,
        eccentricity: 0.75,
        true_anomaly: 2.5,
        mean_anomaly: 2.0,
        apoapsis_altitude: 65_000.0,
        epoch: 0.0,
    }
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                vessel: pad_vessel(),
                orbit: suborbital_arc(),
                body: kerbin(),
                ut: 0.0,
                surface_lat_lon: (-0.0972, -74.5577),
                commands: Vec::new(),
                stages_fired: 0,
                propagated_to: Vec::new(),
                fail_after: None,
                calls: 0,
            }),
        }
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Latest throttle written by any command.
    pub(crate) fn last_throttle(&self) -> Option<f64> {
        self.state().commands.iter().rev().find_map(ControlCommand::get_throttle)
    }

    /// Latest `(pitch, heading)` target written by any command.
    pub(crate) fn last_pitch_and_heading(&self) -> Option<(f64, f64)> {
        self.state()
            .commands
            .iter()
            .rev()
            .find_map(|c| c.get_target_pitch().zip(c.get_target_heading()))
    }

    fn round_trip(&self) -> Result<MutexGuard<'_, MockState>, ProviderError> {
        let mut state = self.state();
        state.calls += 1;
        match state.fail_after {
            Some(limit) if state.calls > limit => Err(ProviderError::NoConnection),
            _ => Ok(state),
        }
    }
}

#[async_trait]
impl VesselProvider for MockProvider {
    async fn read_vessel_snapshot(&self) -> Result<VesselSnapshot, ProviderError> {
        Ok(self.round_trip()?.vessel.clone())
    }

    async fn read_orbit_snapshot(&self) -> Result<OrbitSnapshot, ProviderError> {
        Ok(self.round_trip()?.orbit.clone())
    }

    async fn read_body_snapshot(&self) -> Result<BodySnapshot, ProviderError> {
        Ok(self.round_trip()?.body.clone())
    }

    async fn current_universal_time(&self) -> Result<f64, ProviderError> {
        Ok(self.round_trip()?.ut)
    }

    async fn propagate_position(&self, _orbit: &OrbitSnapshot, ut: f64) -> Result<Vec3D, ProviderError> {
        let mut state = self.round_trip()?;
        state.propagated_to.push(ut);
        Ok(Vec3D::new(0.0, 0.0, 600_000.0))
    }

    async fn position_to_lat_lon(
        &self,
        _position: Vec3D,
        _body: &BodySnapshot,
    ) -> Result<(f64, f64), ProviderError> {
        Ok(self.round_trip()?.surface_lat_lon)
    }

    async fn send_control_command(&self, command: &ControlCommand) -> Result<(), ProviderError> {
        self.round_trip()?.commands.push(command.clone());
        Ok(())
    }

    async fn activate_next_stage(&self) -> Result<(), ProviderError> {
        self.round_trip()?.stages_fired += 1;
        Ok(())
    }
}
