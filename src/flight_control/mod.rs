pub(crate) mod common;
pub(crate) mod control_command;
pub(crate) mod flight_phase;
mod guidance_computer;
mod impact_monitor;
pub(crate) mod launch_config;
pub(crate) mod orbit;
mod phase;
pub(crate) mod telemetry;

pub use guidance_computer::GuidanceComputer;
pub use impact_monitor::ImpactMonitor;
