use super::{
    flight_phase::PhaseId,
    launch_config::LaunchConfiguration,
    phase::{Phase, PhaseContext},
};
use crate::{error, info, warn};
use crate::provider::{ProviderError, VesselProvider};
use chrono::{DateTime, TimeDelta, Utc};
use std::convert::Infallible;

/// Fixed-rate driver of the flight phase state machine.
///
/// Owns the configuration, the provider handle and the active [`Phase`]. The phase only
/// changes through [`GuidanceComputer::transition_to`], which also resets the entry timestamp.
pub struct GuidanceComputer<P: VesselProvider> {
    config: LaunchConfiguration,
    provider: P,
    phase: Phase,
    /// Wall-clock time at which the active phase was entered.
    phase_start: DateTime<Utc>,
    /// Wall-clock time of the last status line.
    last_log: DateTime<Utc>,
}

impl<P: VesselProvider> GuidanceComputer<P> {
    /// Period of the control loop.
    const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);
    /// Period of the telemetry status lines.
    const LOG_INTERVAL: TimeDelta = TimeDelta::seconds(1);

    /// Creates the driver and runs the entry action of `initial`.
    ///
    /// # Errors
    /// - A [`ProviderError`] if the entry action fails.
    pub async fn new(
        config: LaunchConfiguration,
        provider: P,
        initial: PhaseId,
    ) -> Result<Self, ProviderError> {
        let phase = Phase::enter(initial, &PhaseContext::new(&config, &provider)).await?;
        info!("Starting in phase {initial}");
        let now = Utc::now();
        Ok(Self {
            config,
            provider,
            phase,
            phase_start: now,
            last_log: now,
        })
    }

    pub fn phase_id(&self) -> PhaseId { self.phase.id() }

    pub fn provider(&self) -> &P { &self.provider }

    /// Runs the control loop until a provider round trip fails.
    ///
    /// # Errors
    /// - The first [`ProviderError`] raised by a phase.
    pub async fn run(&mut self) -> Result<Infallible, ProviderError> {
        loop {
            if let Err(e) = self.tick().await {
                error!("Tick in phase {} failed: {e}", self.phase.id());
                return Err(e);
            }
            tokio::time::sleep(Self::TICK_INTERVAL).await;
        }
    }

    /// Executes one control tick and applies a resulting transition.
    ///
    /// # Returns
    /// - The phase transitioned to, if any.
    pub(crate) async fn tick(&mut self) -> Result<Option<PhaseId>, ProviderError> {
        let now = Utc::now();
        let since_log = now - self.last_log;
        // a backward clock step restarts the log cadence
        if since_log < TimeDelta::zero() {
            self.last_log = now;
        }
        let should_log = since_log > Self::LOG_INTERVAL;
        if should_log {
            self.last_log = now;
        }

        let elapsed = Self::phase_elapsed(self.phase_start, now);
        let ctx = PhaseContext::new(&self.config, &self.provider);
        let next = self.phase.update(&ctx, elapsed, should_log).await?;
        if let Some(next_phase) = next {
            self.transition_to(next_phase).await?;
        }
        Ok(next)
    }

    /// Time spent in the phase entered at `start`, never negative even if the wall clock steps
    /// backwards.
    pub(crate) fn phase_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> TimeDelta {
        (now - start).max(TimeDelta::zero())
    }

    /// Moves the recorded entry and log times `by` into the future, as seen after the system
    /// clock steps back.
    #[cfg(test)]
    pub(crate) fn step_clock_back(&mut self, by: TimeDelta) {
        self.phase_start += by;
        self.last_log += by;
    }

    /// Enters `next` and makes it the active phase.
    ///
    /// # Errors
    /// - A [`ProviderError`] if the entry action of `next` fails. The previous phase stays active.
    pub(crate) async fn transition_to(&mut self, next: PhaseId) -> Result<(), ProviderError> {
        info!("Phase transition: {} -> {next}", self.phase.id());
        if next.is_stub() {
            warn!("{next} has no control law, holding last commands");
        }
        let ctx = PhaseContext::new(&self.config, &self.provider);
        self.phase = Phase::enter(next, &ctx).await?;
        self.phase_start = Utc::now();
        Ok(())
    }
}
