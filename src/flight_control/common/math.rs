use chrono::TimeDelta;

/// Floored modulo for floating-point numbers, always returning a value in `[0, b)` for `b > 0`.
///
/// # Arguments
/// - `a`: The dividend.
/// - `b`: The divisor.
///
/// # Returns
/// - An `f64` representing the modulo result.
pub fn fmod_f64(a: f64, b: f64) -> f64 { a.rem_euclid(b) }

/// Wraps a longitude given in degrees into the half-open interval `(-180, 180]`.
///
/// # Arguments
/// - `lon`: Longitude in degrees, any range.
///
/// # Returns
/// - An `f64` representing the equivalent longitude in `(-180, 180]`.
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = fmod_f64(lon, 360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Converts a `TimeDelta` into fractional seconds with millisecond resolution.
#[allow(clippy::cast_precision_loss)]
pub fn delta_secs(dt: TimeDelta) -> f64 { dt.num_milliseconds() as f64 / 1000.0 }
