//! Drag coefficient adjustments and drag force magnitude.
//!
//! The base coefficient is adjusted in three stages before the force is
//! formed: a Reynolds-number regime switch (drag crisis), a scaling with
//! the ratio of current air-relative speed to launch speed, and an
//! exponential falloff with height.

use crate::constants::AIR_VISCOSITY;

/// Reynolds number above which the boundary layer trips turbulent and
/// the drag coefficient collapses (drag crisis)
const DRAG_CRISIS_REYNOLDS: f64 = 1e5;

/// Factor applied to the base drag coefficient past the drag crisis
const DRAG_CRISIS_FACTOR: f64 = 0.5;

/// e-folding height for the altitude falloff of the drag coefficient (m)
const DRAG_ALTITUDE_SCALE_M: f64 = 100.0;

/// Calculate the Reynolds number for the ball.
///
/// Re = ρ × V × D / μ, with D the ball diameter.
///
/// # Arguments
/// * `air_density` - Air density (kg/m³)
/// * `rel_speed` - Speed relative to the air mass (m/s)
/// * `radius` - Ball radius (m)
pub(crate) fn reynolds_number(air_density: f64, rel_speed: f64, radius: f64) -> f64 {
    air_density * rel_speed * 2.0 * radius / AIR_VISCOSITY
}

/// Adjust the base drag coefficient for the current flight regime.
///
/// Past the drag crisis the base coefficient is halved. The result is
/// then scaled by `0.8 + 0.4 × rel_speed / initial_speed` and by
/// `exp(-height / 100)`.
///
/// The division by `initial_speed` is not guarded: a zero launch speed
/// combined with nonzero wind yields a non-finite coefficient, which
/// silently corrupts the rest of the trajectory. Callers accepting
/// arbitrary input must tolerate that outcome.
pub(crate) fn adjusted_drag_coefficient(
    base_cd: f64,
    reynolds: f64,
    rel_speed: f64,
    initial_speed: f64,
    height: f64,
) -> f64 {
    let mut cd = base_cd;
    if reynolds > DRAG_CRISIS_REYNOLDS {
        cd *= DRAG_CRISIS_FACTOR;
    }

    let speed_factor = rel_speed / initial_speed;
    let height_factor = (-height / DRAG_ALTITUDE_SCALE_M).exp();

    cd * (0.8 + 0.4 * speed_factor) * height_factor
}

/// Drag force magnitude: ½ ρ Cd A V²
pub(crate) fn drag_force_magnitude(cd: f64, air_density: f64, area: f64, rel_speed: f64) -> f64 {
    0.5 * air_density * cd * area * rel_speed * rel_speed
}
