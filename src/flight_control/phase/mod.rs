//! The flight phases and their dispatch.
//!
//! Each phase owns only the state it needs between ticks. That state is built by the phase's
//! `enter` and dropped when the driver moves on, so a re-entered phase always starts fresh.

mod ascent;
mod launch;
mod recovery;
#[cfg(test)]
mod tests;

use super::{
    control_command::ControlCommand, flight_phase::PhaseId, launch_config::LaunchConfiguration,
};
use crate::provider::{ProviderError, VesselProvider};
use chrono::TimeDelta;

pub(crate) use ascent::{GravityTurn, PitchOver, RollProgram};
pub(crate) use launch::{Countdown, Ignition, Liftoff};
pub(crate) use recovery::{Boostback, Coast, Flip, StageSeparation};

/// Read-only view of the driver handed to phases on every call.
pub(crate) struct PhaseContext<'a, P: VesselProvider> {
    config: &'a LaunchConfiguration,
    provider: &'a P,
}

impl<'a, P: VesselProvider> PhaseContext<'a, P> {
    pub(crate) fn new(config: &'a LaunchConfiguration, provider: &'a P) -> Self {
        Self { config, provider }
    }

    pub(crate) fn config(&self) -> &'a LaunchConfiguration { self.config }
    pub(crate) fn provider(&self) -> &'a P { self.provider }

    /// Writes `command` to the vehicle.
    pub(crate) async fn command(&self, command: ControlCommand) -> Result<(), ProviderError> {
        self.provider.send_control_command(&command).await
    }
}

/// The active phase together with its private state.
///
/// `Entry`, `Landing` and `Balance` are placeholders for the unfinished recovery profile:
/// they issue no commands and never transition.
pub(crate) enum Phase {
    Countdown(Countdown),
    Ignition(Ignition),
    Liftoff(Liftoff),
    PitchOver(PitchOver),
    RollProgram(RollProgram),
    GravityTurn(GravityTurn),
    StageSeparation(StageSeparation),
    Flip(Flip),
    Boostback(Boostback),
    Coast(Coast),
    Entry,
    Landing,
    Balance,
}

impl Phase {
    /// Runs the entry action of `id` and returns the freshly initialized phase.
    ///
    /// # Errors
    /// - A [`ProviderError`] if an entry command or telemetry read fails.
    pub(crate) async fn enter<P: VesselProvider>(
        id: PhaseId,
        ctx: &PhaseContext<'_, P>,
    ) -> Result<Self, ProviderError> {
        Ok(match id {
            PhaseId::Countdown => Phase::Countdown(Countdown::enter(ctx).await?),
            PhaseId::Ignition => Phase::Ignition(Ignition::enter(ctx).await?),
            PhaseId::Liftoff => Phase::Liftoff(Liftoff::enter(ctx).await?),
            PhaseId::PitchOver => Phase::PitchOver(PitchOver::enter(ctx).await?),
            PhaseId::RollProgram => Phase::RollProgram(RollProgram::enter(ctx).await?),
            PhaseId::GravityTurn => Phase::GravityTurn(GravityTurn::enter(ctx).await?),
            PhaseId::StageSeparation => Phase::StageSeparation(StageSeparation::enter(ctx).await?),
            PhaseId::Flip => Phase::Flip(Flip::enter(ctx).await?),
            PhaseId::Boostback => Phase::Boostback(Boostback::enter(ctx).await?),
            PhaseId::Coast => Phase::Coast(Coast::enter(ctx).await?),
            PhaseId::Entry => Phase::Entry,
            PhaseId::Landing => Phase::Landing,
            PhaseId::Balance => Phase::Balance,
        })
    }

    /// Runs one control tick of the active phase.
    ///
    /// # Arguments
    /// - `ctx`: Configuration and provider access.
    /// - `elapsed`: Time since the phase was entered.
    /// - `should_log`: Whether this tick falls on the telemetry log cadence.
    ///
    /// # Returns
    /// - `Some(next)` if the phase's exit condition holds.
    ///
    /// # Errors
    /// - A [`ProviderError`] if any round trip fails.
    pub(crate) async fn update<P: VesselProvider>(
        &mut self,
        ctx: &PhaseContext<'_, P>,
        elapsed: TimeDelta,
        should_log: bool,
    ) -> Result<Option<PhaseId>, ProviderError> {
        match self {
            Phase::Countdown(p) => Ok(p.update(elapsed)),
            Phase::Ignition(p) => p.update(ctx, elapsed, should_log).await,
            Phase::Liftoff(p) => p.update(ctx, should_log).await,
            Phase::PitchOver(p) => p.update(ctx, should_log).await,
            Phase::RollProgram(p) => p.update(ctx, should_log).await,
            Phase::GravityTurn(p) => p.update(ctx, should_log).await,
            Phase::StageSeparation(p) => p.update(ctx, elapsed, should_log).await,
            Phase::Flip(p) => p.update(ctx, should_log).await,
            Phase::Boostback(p) => p.update(ctx, should_log).await,
            Phase::Coast(p) => p.update(ctx, should_log).await,
            Phase::Entry | Phase::Landing | Phase::Balance => Ok(None),
        }
    }

    pub(crate) fn id(&self) -> PhaseId {
        match self {
            Phase::Countdown(_) => PhaseId::Countdown,
            Phase::Ignition(_) => PhaseId::Ignition,
            Phase::Liftoff(_) => PhaseId::Liftoff,
            Phase::PitchOver(_) => PhaseId::PitchOver,
            Phase::RollProgram(_) => PhaseId::RollProgram,
            Phase::GravityTurn(_) => PhaseId::GravityTurn,
            Phase::StageSeparation(_) => PhaseId::StageSeparation,
            Phase::Flip(_) => PhaseId::Flip,
            Phase::Boostback(_) => PhaseId::Boostback,
            Phase::Coast(_) => PhaseId::Coast,
            Phase::Entry => PhaseId::Entry,
            Phase::Landing => PhaseId::Landing,
            Phase::Balance => PhaseId::Balance,
        }
    }
}
