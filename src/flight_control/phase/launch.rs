use super::PhaseContext;
use crate::flight_control::{
    common::math::delta_secs, control_command::ControlCommand, flight_phase::PhaseId,
};
use crate::provider::{ProviderError, VesselProvider};
use crate::{info, tlm};
use chrono::TimeDelta;

/// Announces T-3, T-2, T-1 one second apart, gated on elapsed time rather than sleeping.
pub(crate) struct Countdown {
    /// Number of countdown ticks already announced.
    announced: u8,
}

impl Countdown {
    const TICKS: u8 = 3;

    #[allow(clippy::unused_async)]
    pub(super) async fn enter<P: VesselProvider>(_ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        info!("Countdown!");
        Ok(Self { announced: 0 })
    }

    pub(super) fn update(&mut self, elapsed: TimeDelta) -> Option<PhaseId> {
        let secs = delta_secs(elapsed);
        while self.announced < Self::TICKS && secs >= f64::from(self.announced) {
            info!("{}", Self::TICKS - self.announced);
            self.announced += 1;
        }
        if self.announced == Self::TICKS && secs >= f64::from(Self::TICKS) {
            return Some(PhaseId::Ignition);
        }
        None
    }
}

/// Lights the first stage at half throttle and ramps to full before release.
pub(crate) struct Ignition {}

impl Ignition {
    const INITIAL_THROTTLE: f64 = 0.5;
    const THROTTLE_UP_SECS: f64 = 1.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(ControlCommand::new().throttle(Self::INITIAL_THROTTLE)).await?;
        ctx.provider().activate_next_stage().await?;
        info!("Ignition!");
        Ok(Self {})
    }

    /// Throttle setting of the linear ramp after `elapsed_secs` in the phase.
    pub(crate) fn throttle_at(elapsed_secs: f64) -> f64 {
        (Self::INITIAL_THROTTLE + (1.0 - Self::INITIAL_THROTTLE) * elapsed_secs / Self::THROTTLE_UP_SECS)
            .min(1.0)
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        elapsed: TimeDelta,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let throttle = Self::throttle_at(delta_secs(elapsed));
        ctx.command(ControlCommand::new().throttle(throttle)).await?;

        let vessel = ctx.provider().read_vessel_snapshot().await?;
        let body = ctx.provider().read_body_snapshot().await?;
        let twr = vessel.thrust_to_weight(&body);

        if should_log {
            tlm!("TWR: {twr:.2} Throttle: {throttle:.2}");
        }
        if throttle >= 1.0 && twr > 1.0 {
            info!("Full thrust, TWR: {twr:.2}");
            return Ok(Some(PhaseId::Liftoff));
        }
        Ok(None)
    }
}

/// Releases the clamps at full throttle and climbs vertically.
pub(crate) struct Liftoff {}

impl Liftoff {
    const CLEAR_TOWER_ALT: f64 = 250.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(ControlCommand::new().throttle(1.0)).await?;
        ctx.provider().activate_next_stage().await?;
        info!("Liftoff!");
        Ok(Self {})
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let altitude = ctx.provider().read_vessel_snapshot().await?.mean_altitude;
        if should_log {
            tlm!("Altitude: {altitude:.0} m");
        }
        if altitude > Self::CLEAR_TOWER_ALT {
            return Ok(Some(PhaseId::PitchOver));
        }
        Ok(None)
    }
}
