use super::PhaseContext;
use crate::flight_control::{
    common::{geo_math::heading_distance, math::delta_secs},
    control_command::{AttitudeHold, ControlCommand, SpeedMode},
    flight_phase::PhaseId,
    orbit::ImpactPredictor,
};
use crate::provider::{ProviderError, VesselProvider};
use crate::{info, tlm};
use chrono::TimeDelta;

/// Cuts the engine, coasts clear and drops the upper stage exactly once.
pub(crate) struct StageSeparation {
    staged: bool,
}

impl StageSeparation {
    const STAGE_AFTER_SECS: f64 = 3.0;
    const FLIP_AFTER_SECS: f64 = 7.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(
            ControlCommand::new()
                .throttle(0.0)
                .autopilot(false)
                .attitude_hold(AttitudeHold::StabilityAssist)
                .rcs(true),
        )
        .await?;
        info!("Main engine cut off");
        Ok(Self { staged: false })
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        elapsed: TimeDelta,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let secs = delta_secs(elapsed);
        if should_log {
            tlm!("Separation elapsed: {secs:.1} s");
        }
        if secs > Self::STAGE_AFTER_SECS && !self.staged {
            self.staged = true;
            ctx.provider().activate_next_stage().await?;
            info!("Stage separated");
        }
        if secs > Self::FLIP_AFTER_SECS {
            return Ok(Some(PhaseId::Flip));
        }
        Ok(None)
    }
}

/// Turns the booster around until it faces back along the ascent track.
pub(crate) struct Flip {}

impl Flip {
    const HEADING_TOLERANCE: f64 = 90.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(
            ControlCommand::new()
                .throttle(0.0)
                .autopilot(false)
                .attitude_hold(AttitudeHold::Retrograde)
                .rcs(true),
        )
        .await?;
        Ok(Self {})
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        ctx.command(ControlCommand::new().attitude_hold(AttitudeHold::Retrograde)).await?;
        let heading = ctx.provider().read_vessel_snapshot().await?.heading;
        let target = ctx.config().return_heading();
        if should_log {
            tlm!("Heading: {heading:.1}/{target:.1}");
        }
        if heading_distance(heading, target) < Self::HEADING_TOLERANCE {
            return Ok(Some(PhaseId::Boostback));
        }
        Ok(None)
    }
}

/// Burns horizontally to pull the predicted impact point back onto the launch pad.
pub(crate) struct Boostback {}

impl Boostback {
    /// Impact heading is only trusted while within this many degrees of the direct pad bearing.
    const MAX_HEADING_DEVIATION: f64 = 110.0;
    const MIN_THROTTLE: f64 = 0.05;
    /// Impact distance at which the throttle law reaches roughly full thrust.
    const FULL_THROTTLE_DIST: f64 = 40_000.0;
    const IMPACT_TOLERANCE: f64 = 2_000.0;
    /// Required lead of the impact point past the pad, in meters.
    const OVERSHOOT: f64 = 1_000.0;

    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(
            ControlCommand::new()
                .throttle(0.0)
                .autopilot(true)
                .attitude_hold(AttitudeHold::Off)
                .rcs(false),
        )
        .await?;
        info!("Boostback burn");
        Ok(Self {})
    }

    /// Throttle for a predicted impact `impact_distance` meters from the pad.
    /// An unknown impact point is passed as infinity and yields full thrust.
    pub(crate) fn throttle_for(impact_distance: f64) -> f64 {
        (Self::MIN_THROTTLE + (1.0 - Self::MIN_THROTTLE) * impact_distance / Self::FULL_THROTTLE_DIST)
            .min(1.0)
    }

    /// Steers along the impact-to-pad bearing unless it strays too far from the direct bearing.
    pub(crate) fn steering_heading(pad_heading: f64, impact_heading: f64) -> f64 {
        if (impact_heading - pad_heading).abs() < Self::MAX_HEADING_DEVIATION {
            impact_heading
        } else {
            pad_heading
        }
    }

    /// Whether the impact lies on the pad and past it as seen from the vessel.
    pub(crate) fn reached_pad(impact_distance: f64, vessel_impact: f64, pad_vessel: f64) -> bool {
        impact_distance < Self::IMPACT_TOLERANCE && vessel_impact - Self::OVERSHOOT > pad_vessel
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        let vessel = ctx.provider().read_vessel_snapshot().await?;
        let body = ctx.provider().read_body_snapshot().await?;
        let radius = body.equatorial_radius;
        let pad = ctx.config().launch_pad();
        let position = vessel.coordinate();
        let pad_vessel = pad.distance_to(&position, radius);

        let mut heading = position.bearing_to(&pad);
        let mut impact_distance = f64::INFINITY;
        let mut next = None;

        if let Some(prediction) = ImpactPredictor::predict_current(ctx.provider(), &body).await? {
            let impact = prediction.point();
            heading = Self::steering_heading(heading, impact.bearing_to(&pad));
            impact_distance = pad.distance_to(&impact, radius);
            let vessel_impact = position.distance_to(&impact, radius);
            if should_log {
                tlm!(
                    "Impact: {impact_distance:.0} m from pad, vessel->impact {vessel_impact:.0} m, \
                     pad->vessel {pad_vessel:.0} m"
                );
            }
            if Self::reached_pad(impact_distance, vessel_impact, pad_vessel) {
                info!("Impact point on target, {impact_distance:.0} m from pad");
                next = Some(PhaseId::Coast);
            }
        } else if should_log {
            tlm!("No impact predicted, pad->vessel {pad_vessel:.0} m");
        }

        ctx.command(
            ControlCommand::new()
                .pitch_and_heading(0.0, heading)
                .throttle(Self::throttle_for(impact_distance)),
        )
        .await?;
        Ok(next)
    }
}

/// Terminal unpowered descent, holding retrograde with the brakes out.
pub(crate) struct Coast {}

impl Coast {
    pub(super) async fn enter<P: VesselProvider>(ctx: &PhaseContext<'_, P>) -> Result<Self, ProviderError> {
        ctx.command(
            ControlCommand::new()
                .throttle(0.0)
                .autopilot(false)
                .attitude_hold(AttitudeHold::Retrograde)
                .speed_mode(SpeedMode::Surface)
                .rcs(true)
                .brakes(true),
        )
        .await?;
        info!("Coasting");
        Ok(Self {})
    }

    pub(super) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        ctx.command(ControlCommand::new().throttle(0.0).attitude_hold(AttitudeHold::Retrograde))
            .await?;
        if should_log {
            let body = ctx.provider().read_body_snapshot().await?;
            match ImpactPredictor::predict_current(ctx.provider(), &body).await? {
                Some(prediction) => {
                    let distance =
                        ctx.config().launch_pad().distance_to(&prediction.point(), body.equatorial_radius);
                    tlm!("Impact: {distance:.0} m from pad in {:.0} s", prediction.time_to_impact());
                }
                None => tlm!("No impact predicted"),
            }
        }
        Ok(None)
    }
}
