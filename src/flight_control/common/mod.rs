pub(crate) mod geo_math;
pub(crate) mod math;
pub(crate) mod vec3d;
