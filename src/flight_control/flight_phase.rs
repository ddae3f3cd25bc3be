use super::launch_config::ConfigError;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

/// Identifies one discrete flight behaviour mode, listed in nominal flight order.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum PhaseId {
    Countdown,
    Ignition,
    Liftoff,
    #[strum(to_string = "Pitch Over")]
    PitchOver,
    #[strum(to_string = "Roll Program")]
    RollProgram,
    #[strum(to_string = "Gravity Turn")]
    GravityTurn,
    #[strum(to_string = "Stage Separation")]
    StageSeparation,
    Flip,
    Boostback,
    Coast,
    Entry,
    Landing,
    Balance,
}

impl PhaseId {
    /// Whether the phase is an unimplemented recovery placeholder without any control law.
    pub fn is_stub(self) -> bool {
        matches!(self, PhaseId::Entry | PhaseId::Landing | PhaseId::Balance)
    }
}

impl FromStr for PhaseId {
    type Err = ConfigError;

    /// Parses display names ("Pitch Over") as well as "pitch_over", "pitch-over" and "PitchOver".
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "countdown" => Ok(PhaseId::Countdown),
            "ignition" => Ok(PhaseId::Ignition),
            "liftoff" => Ok(PhaseId::Liftoff),
            "pitchover" => Ok(PhaseId::PitchOver),
            "rollprogram" => Ok(PhaseId::RollProgram),
            "gravityturn" => Ok(PhaseId::GravityTurn),
            "stageseparation" => Ok(PhaseId::StageSeparation),
            "flip" => Ok(PhaseId::Flip),
            "boostback" => Ok(PhaseId::Boostback),
            "coast" => Ok(PhaseId::Coast),
            "entry" => Ok(PhaseId::Entry),
            "landing" => Ok(PhaseId::Landing),
            "balance" => Ok(PhaseId::Balance),
            _ => Err(ConfigError::UnknownPhase(value.to_string())),
        }
    }
}
