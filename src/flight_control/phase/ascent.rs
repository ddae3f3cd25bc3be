use super::PhaseContext;
use crate::flight_control::{control_command::ControlCommand, flight_phase::PhaseId};
use crate::provider::{ProviderError, VesselProvider};
use crate::{info, tlm};

/// Initial pitch of the ascent, also the starting point of the gravity turn.
const ASCENT_PITCH: f64 = 85.0;

/// Tips the vehicle from vertical onto the ascent heading.
pub(crate) struct PitchOver {}

impl PitchOver {
    const PITCH_TOLERANCE: f64 = 4.0;
    const HEADING_TOLERANCE: f64 = 8.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(ControlCommand::new().autopilot(true)).await?;
        Ok(Self {})
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let target_heading = ctx.config().inclination();
        ctx.command(ControlCommand::new().pitch_and_heading(ASCENT_PITCH, target_heading)).await?;

        let vessel = ctx.provider().read_vessel_snapshot().await?;
        if should_log {
            tlm!(
                "Pitch: {:.1}/{ASCENT_PITCH:.1} Heading: {:.1}/{target_heading:.1}",
                vessel.pitch,
                vessel.heading
            );
        }
        if (vessel.pitch - ASCENT_PITCH).abs() < Self::PITCH_TOLERANCE
            && (vessel.heading - target_heading).abs() < Self::HEADING_TOLERANCE
        {
            return Ok(Some(PhaseId::RollProgram));
        }
        Ok(None)
    }
}

/// Rolls the vehicle level before the gravity turn.
pub(crate) struct RollProgram {}

impl RollProgram {
    const ROLL_TOLERANCE: f64 = 3.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(ControlCommand::new().autopilot(true).rcs(true)).await?;
        Ok(Self {})
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        ctx.command(ControlCommand::new().roll(0.0)).await?;
        let roll = ctx.provider().read_vessel_snapshot().await?.roll;
        if should_log {
            tlm!("Roll: {roll:.1}");
        }
        if roll.abs() < Self::ROLL_TOLERANCE {
            return Ok(Some(PhaseId::GravityTurn));
        }
        Ok(None)
    }
}

/// Pitches down linearly with altitude until the fuel floor or the target apoapsis is reached.
pub(crate) struct GravityTurn {
    /// Altitude at which the turn started.
    initial_altitude: f64,
}

impl GravityTurn {
    /// Altitude gain over which the pitch falls from the ascent pitch to the horizon.
    const TURN_HEIGHT: f64 = 60_000.0;
    /// Fuel reserved for the boost-back.
    const MIN_FUEL_FRACTION: f64 = 0.18;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(ControlCommand::new().autopilot(true)).await?;
        let initial_altitude = ctx.provider().read_vessel_snapshot().await?.mean_altitude;
        info!("Gravity turn from {initial_altitude:.0} m");
        Ok(Self { initial_altitude })
    }

    /// Target pitch at `altitude` for a turn that started at `initial_altitude`.
    pub(crate) fn target_pitch(initial_altitude: f64, altitude: f64) -> f64 {
        (ASCENT_PITCH - ASCENT_PITCH * (altitude - initial_altitude) / Self::TURN_HEIGHT).max(0.0)
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let vessel = ctx.provider().read_vessel_snapshot().await?;
        let target_pitch = Self::target_pitch(self.initial_altitude, vessel.mean_altitude);
        ctx.command(
            ControlCommand::new().pitch_and_heading(target_pitch, ctx.config().inclination()),
        )
        .await?;

        let apoapsis = ctx.provider().read_orbit_snapshot().await?.apoapsis_altitude;
        let fuel = vessel.fuel_fraction;
        if should_log {
            tlm!(
                "Pitch: {:.1}/{target_pitch:.1} Fuel: {:.1}% Apoapsis: {apoapsis:.0} m",
                vessel.pitch,
                fuel * 100.0
            );
        }
        if fuel < Self::MIN_FUEL_FRACTION || apoapsis >= ctx.config().target_apoapsis() {
            info!("Ascent complete, fuel {:.1}%, apoapsis {apoapsis:.0} m", fuel * 100.0);
            return Ok(Some(PhaseId::StageSeparation));
        }
        Ok(None)
    }
}
