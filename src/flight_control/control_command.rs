use strum_macros::Display;

/// Automatic attitude hold provided by the vehicle's stability system.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttitudeHold {
    Off,
    StabilityAssist,
    Retrograde,
}

/// Reference for the speed the vehicle reports and holds retrograde against.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedMode {
    Surface,
}

/// A set of control inputs written to the vehicle in a single round trip.
///
/// Every field is optional; absent fields leave the vehicle's current setting untouched.
/// Staging is not part of the command since it is not idempotent, see
/// [`VesselProvider::activate_next_stage`](crate::provider::VesselProvider::activate_next_stage).
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    throttle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autopilot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_heading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_roll: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attitude_hold: Option<AttitudeHold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed_mode: Option<SpeedMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rcs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brakes: Option<bool>,
}

impl ControlCommand {
    pub fn new() -> Self { Self::default() }

    /// Sets the throttle, clamped to `[0, 1]`.
    #[must_use]
    pub fn throttle(mut self, throttle: f64) -> Self {
        self.throttle = Some(throttle.clamp(0.0, 1.0));
        self
    }

    #[must_use]
    pub fn autopilot(mut self, engaged: bool) -> Self {
        self.autopilot = Some(engaged);
        self
    }

    #[must_use]
    pub fn pitch_and_heading(mut self, pitch: f64, heading: f64) -> Self {
        self.target_pitch = Some(pitch);
        self.target_heading = Some(heading);
        self
    }

    #[must_use]
    pub fn roll(mut self, roll: f64) -> Self {
        self.target_roll = Some(roll);
        self
    }

    #[must_use]
    pub fn attitude_hold(mut self, hold: AttitudeHold) -> Self {
        self.attitude_hold = Some(hold);
        self
    }

    #[must_use]
    pub fn speed_mode(mut self, mode: SpeedMode) -> Self {
        self.speed_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn rcs(mut self, on: bool) -> Self {
        self.rcs = Some(on);
        self
    }

    #[must_use]
    pub fn brakes(mut self, on: bool) -> Self {
        self.brakes = Some(on);
        self
    }

    pub fn get_throttle(&self) -> Option<f64> { self.throttle }
    pub fn get_autopilot(&self) -> Option<bool> { self.autopilot }
    pub fn get_target_pitch(&self) -> Option<f64> { self.target_pitch }
    pub fn get_target_heading(&self) -> Option<f64> { self.target_heading }
    pub fn get_target_roll(&self) -> Option<f64> { self.target_roll }
    pub fn get_attitude_hold(&self) -> Option<AttitudeHold> { self.attitude_hold }
    pub fn get_speed_mode(&self) -> Option<SpeedMode> { self.speed_mode }
    pub fn get_rcs(&self) -> Option<bool> { self.rcs }
    pub fn get_brakes(&self) -> Option<bool> { self.brakes }
}
