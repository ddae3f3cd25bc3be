#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod flight_control;
mod http_handler;
mod logger;
mod provider;

use crate::flight_control::{
    GuidanceComputer, ImpactMonitor, flight_phase::PhaseId, launch_config::LaunchConfiguration,
};
use crate::provider::{HTTPProvider, VesselProvider};
use std::env;
use strum_macros::{Display, EnumString};

const DEF_PROVIDER_URL: &str = "http://localhost:8085";

/// Top-level operating mode, chosen by `GUIDANCE_MODE`.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
enum GuidanceMode {
    /// Flies the vehicle through the phase state machine.
    Flight,
    /// Only reports the predicted impact point.
    Monitor,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let base_url_var = env::var("GUIDANCE_PROVIDER_URL");
    let base_url = base_url_var.as_ref().map_or(DEF_PROVIDER_URL, |v| v.as_str());
    let mode = match env::var("GUIDANCE_MODE") {
        Ok(value) => value
            .trim()
            .parse::<GuidanceMode>()
            .unwrap_or_else(|_| fatal!("Unknown guidance mode '{value}'")),
        Err(_) => GuidanceMode::Flight,
    };
    let initial = env::var("INITIAL_PHASE")
        .map_or(Ok(PhaseId::Countdown), |v| v.parse::<PhaseId>())
        .unwrap_or_else(|e| fatal!("{e}"));

    let provider = HTTPProvider::new(base_url)
        .unwrap_or_else(|e| fatal!("Cannot set up provider client for {base_url}: {e}"));
    let vessel = provider
        .read_vessel_snapshot()
        .await
        .unwrap_or_else(|e| fatal!("Cannot read vessel from {base_url}: {e}"));
    if env::var("LAUNCH_PAD_LAT").is_err() || env::var("LAUNCH_PAD_LON").is_err() {
        warn!("Launch pad not fully configured, using vessel position {}", vessel.coordinate());
    }
    let config = LaunchConfiguration::from_env(vessel.coordinate())
        .unwrap_or_else(|e| fatal!("Invalid launch configuration: {e}"));
    info!(
        "Guidance mode {mode}, pad {}, inclination {:.1}, target apoapsis {:.0} m",
        config.launch_pad(),
        config.inclination(),
        config.target_apoapsis()
    );

    match mode {
        GuidanceMode::Monitor => {
            let Err(e) = ImpactMonitor::new(provider, config.launch_pad()).run().await;
            fatal!("Impact monitor stopped: {e}");
        }
        GuidanceMode::Flight => {
            let mut computer = GuidanceComputer::new(config, provider, initial)
                .await
                .unwrap_or_else(|e| fatal!("Cannot enter phase {initial}: {e}"));
            let Err(e) = computer.run().await;
            fatal!("Guidance loop stopped in phase {}: {e}", computer.phase_id());
        }
    }
}
