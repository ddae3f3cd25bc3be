use super::common::geo_math::GeoCoordinate;
use std::{env, fmt::Display};

/// Startup parameters of the flight. Validated once and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfiguration {
    /// Launch pad, which is also the boost-back landing target.
    launch_pad: GeoCoordinate,
    /// Ascent heading in degrees, `[0, 360)`.
    inclination: f64,
    /// Apoapsis altitude at which the ascent stops, in meters.
    target_apoapsis: f64,
}

/// Out-of-range or unparsable startup parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidLatitude(f64),
    InvalidLongitude(f64),
    InvalidInclination(f64),
    InvalidApoapsis(f64),
    Unparsable { var: &'static str, value: String },
    UnknownPhase(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidLatitude(v) => write!(f, "latitude {v} outside [-90, 90]"),
            ConfigError::InvalidLongitude(v) => write!(f, "longitude {v} outside [-180, 180]"),
            ConfigError::InvalidInclination(v) => write!(f, "inclination {v} outside [0, 360)"),
            ConfigError::InvalidApoapsis(v) => write!(f, "target apoapsis {v} must be positive"),
            ConfigError::Unparsable { var, value } => write!(f, "cannot parse {var}={value}"),
            ConfigError::UnknownPhase(name) => write!(f, "unknown flight phase '{name}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl LaunchConfiguration {
    const DEF_INCLINATION: f64 = 90.0;
    const DEF_TARGET_APOAPSIS: f64 = 80_000.0;

    /// Creates a validated [`LaunchConfiguration`].
    ///
    /// # Arguments
    /// - `pad_lat`, `pad_lon`: Launch pad coordinates in degrees.
    /// - `inclination`: Ascent heading in degrees.
    /// - `target_apoapsis`: Apoapsis altitude in meters that ends the gravity turn.
    ///
    /// # Errors
    /// - A [`ConfigError`] naming the first parameter outside its valid range.
    pub fn new(
        pad_lat: f64,
        pad_lon: f64,
        inclination: f64,
        target_apoapsis: f64,
    ) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&pad_lat) {
            return Err(ConfigError::InvalidLatitude(pad_lat));
        }
        if !(-180.0..=180.0).contains(&pad_lon) {
            return Err(ConfigError::InvalidLongitude(pad_lon));
        }
        if !(0.0..360.0).contains(&inclination) {
            return Err(ConfigError::InvalidInclination(inclination));
        }
        if !target_apoapsis.is_finite() || target_apoapsis <= 0.0 {
            return Err(ConfigError::InvalidApoapsis(target_apoapsis));
        }
        Ok(Self { launch_pad: GeoCoordinate::new(pad_lat, pad_lon), inclination, target_apoapsis })
    }

    /// Builds the configuration from `LAUNCH_PAD_LAT`, `LAUNCH_PAD_LON`, `LAUNCH_INCLINATION`
    /// and `TARGET_APOAPSIS`.
    ///
    /// Unset pad coordinates fall back to `current_pad`, the vessel's position at startup.
    ///
    /// # Errors
    /// - [`ConfigError::Unparsable`] if a set variable is not a number.
    /// - Any range error of [`LaunchConfiguration::new`].
    pub fn from_env(current_pad: GeoCoordinate) -> Result<Self, ConfigError> {
        let lat = Self::env_f64("LAUNCH_PAD_LAT")?.unwrap_or(current_pad.lat());
        let lon = Self::env_f64("LAUNCH_PAD_LON")?.unwrap_or(current_pad.lon());
        let inclination = Self::env_f64("LAUNCH_INCLINATION")?.unwrap_or(Self::DEF_INCLINATION);
        let apoapsis = Self::env_f64("TARGET_APOAPSIS")?.unwrap_or(Self::DEF_TARGET_APOAPSIS);
        Self::new(lat, lon, inclination, apoapsis)
    }

    fn env_f64(var: &'static str) -> Result<Option<f64>, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ConfigError::Unparsable { var, value }),
            Err(_) => Ok(None),
        }
    }

    pub fn launch_pad(&self) -> GeoCoordinate { self.launch_pad }
    pub fn inclination(&self) -> f64 { self.inclination }
    pub fn target_apoapsis(&self) -> f64 { self.target_apoapsis }

    /// Heading opposite to the ascent heading, `[0, 360)`.
    pub fn return_heading(&self) -> f64 { (self.inclination + 180.0) % 360.0 }
}
