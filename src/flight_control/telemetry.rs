use super::common::{geo_math::GeoCoordinate, vec3d::Vec3D};

/// Keplerian state of the vessel's current trajectory, read once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSnapshot {
    /// Semi-major axis in meters.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// True anomaly in radians.
    pub true_anomaly: f64,
    /// Mean anomaly in radians, `[0, 2π)`.
    pub mean_anomaly: f64,
    /// Apoapsis altitude above the body's equatorial radius, in meters.
    pub apoapsis_altitude: f64,
    /// Universal time the elements refer to, in seconds.
    pub epoch: f64,
}

/// Physical description of the central body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    /// Equatorial radius in meters.
    pub equatorial_radius: f64,
    /// Standard gravitational parameter `μ` in m³/s².
    pub gravitational_parameter: f64,
    /// Sidereal rotation rate in rad/s.
    pub rotational_speed: f64,
    /// Provider-side name of the body-fixed reference frame. Opaque to guidance.
    pub reference_frame: String,
}

impl BodySnapshot {
    /// Gravitational acceleration at the equatorial radius, `μ / R²`.
    pub fn surface_gravity(&self) -> f64 {
        self.gravitational_parameter / self.equatorial_radius.powi(2)
    }
}

/// Flight state of the active vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselSnapshot {
    /// Position in the body-fixed reference frame.
    pub position: Vec3D,
    /// Latitude in degrees, body-fixed.
    pub latitude: f64,
    /// Longitude in degrees, body-fixed.
    pub longitude: f64,
    /// Altitude above sea level in meters.
    pub mean_altitude: f64,
    pub pitch: f64,
    pub heading: f64,
    pub roll: f64,
    /// Total mass in kg.
    pub mass: f64,
    /// Current thrust in N.
    pub thrust: f64,
    /// Remaining liquid fuel as a fraction of capacity.
    pub fuel_fraction: f64,
}

impl VesselSnapshot {
    pub fn coordinate(&self) -> GeoCoordinate { GeoCoordinate::new(self.latitude, self.longitude) }

    /// Thrust-to-weight ratio against the surface gravity of `body`.
    pub fn thrust_to_weight(&self, body: &BodySnapshot) -> f64 {
        self.thrust / (self.mass * body.surface_gravity())
    }
}
