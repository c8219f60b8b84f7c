//! Magnus (spin-induced lift) force.
//!
//! Rotating-cylinder formulation: the surface speed of the spinning ball
//! relative to its airspeed sets a circulation factor that scales the
//! standard ½ ρ Cl A V² lift term. The force magnitude carries the sign
//! of the spin; resolution perpendicular to the relative velocity
//! happens in the derivatives module.

use crate::constants::PhysicsConfig;
use std::f64::consts::PI;

/// Conversion factor: rpm to revolutions per second
const RPM_TO_RPS: f64 = 1.0 / 60.0;

/// Magnus force magnitude for a given spin rate and air-relative speed.
///
/// `rel_speed` must be positive; the solver's minimum-relative-speed
/// guard ensures that before this is called.
///
/// # Arguments
/// * `spin_rate` - Spin in rpm, signed (positive lifts)
/// * `rel_speed` - Speed relative to the air mass (m/s)
pub(crate) fn magnus_force_magnitude(spin_rate: f64, rel_speed: f64, config: &PhysicsConfig) -> f64 {
    let spin_rps = spin_rate * RPM_TO_RPS;
    let magnus_factor = (2.0 * PI * config.ball_radius * spin_rps) / rel_speed;

    0.5 * config.air_density
        * config.lift_coefficient
        * config.frontal_area()
        * rel_speed
        * rel_speed
        * magnus_factor
}
