//! First-order mean-element derivations.
//!
//! Semi-major axis comes straight from the mean motion via Kepler's third
//! law, consistent with the mean-element convention of the catalog data.
//! This is intentionally not a propagator; no secular corrections are
//! applied.

use std::f64::consts::PI;
use tletypes::prelude::*;

/// Seconds per mean solar day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ElementError {
    /// A bound orbit requires a positive mean motion; zero or negative
    /// values would otherwise surface as NaN/inf downstream
    #[error("non-positive mean motion: {0} rev/day")]
    NonPositiveMeanMotion(f64),
}

/// Semi-major axis [km] from mean motion [rev/day]
pub fn semi_major_axis_km(
    body: &ReferenceBody,
    mean_motion_rev_per_day: f64,
) -> Result<f64, ElementError> {
    if mean_motion_rev_per_day <= 0.0 {
        return Err(ElementError::NonPositiveMeanMotion(mean_motion_rev_per_day));
    }
    let n_rad_s = mean_motion_rev_per_day * 2.0 * PI / SECONDS_PER_DAY;
    Ok((body.mu / (n_rad_s * n_rad_s)).cbrt())
}

/// Perigee altitude [km] above the body's equatorial radius.
///
/// May be negative (decayed or re-entering object) or implausibly large
/// (bad elements); no plausibility clamping happens here.
pub fn perigee_altitude_km(
    body: &ReferenceBody,
    elements: &MeanElements,
) -> Result<f64, ElementError> {
    let a_km = semi_major_axis_km(body, elements.mean_motion_rev_per_day)?;
    Ok(a_km * (1.0 - elements.eccentricity) - body.equatorial_radius)
}
