/// A 3D position vector in a body-fixed reference frame, in meters.
///
/// The guidance core never does arithmetic on positions; they are handed back to the
/// provider for latitude/longitude conversion.
#[derive(Debug, PartialEq, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct Vec3D {
    /// The x-component of the vector.
    x: f64,
    /// The y-component of the vector.
    y: f64,
    /// The z-component of the vector.
    z: f64,
}

impl Vec3D {
    /// Creates a new vector with the given components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub const fn x(&self) -> f64 { self.x }
    pub const fn y(&self) -> f64 { self.y }
    pub const fn z(&self) -> f64 { self.z }
}
