//! Per-step force assembly for trajectory integration.
//!
//! Takes the air-relative velocity for the current step and produces the
//! total acceleration on the ball: drag anti-parallel to the relative
//! velocity, Magnus lift perpendicular to it, gravity straight down.

use crate::api::WindConditions;
use crate::constants::PhysicsConfig;
use crate::drag::{adjusted_drag_coefficient, drag_force_magnitude, reynolds_number};
use crate::magnus::magnus_force_magnitude;
use nalgebra::Vector2;

/// Headwind drag amplification per unit of headwind component
const HEADWIND_DRAG_GAIN: f64 = 0.5;

/// Headwind lift amplification per unit of headwind component
const HEADWIND_LIFT_GAIN: f64 = 0.3;

/// Total acceleration on the ball for one integration step.
///
/// Below the minimum relative speed the aerodynamic terms are skipped
/// entirely and only gravity acts; this is the sole protection against
/// dividing by a vanishing relative speed.
///
/// # Arguments
/// * `rel_vel` - Velocity relative to the air mass (m/s)
/// * `height` - Current height above the ground (m)
/// * `initial_speed` - Launch speed, used by the drag speed factor (m/s)
/// * `spin_rate` - Spin in rpm, signed
pub(crate) fn compute_acceleration(
    rel_vel: Vector2<f64>,
    height: f64,
    initial_speed: f64,
    spin_rate: f64,
    wind: &WindConditions,
    config: &PhysicsConfig,
) -> Vector2<f64> {
    let gravity = Vector2::new(0.0, -config.gravity);

    let rel_speed = rel_vel.norm();
    if rel_speed <= config.min_relative_speed {
        return gravity;
    }

    let reynolds = reynolds_number(config.air_density, rel_speed, config.ball_radius);
    let cd = adjusted_drag_coefficient(
        config.drag_coefficient,
        reynolds,
        rel_speed,
        initial_speed,
        height,
    );

    let mut drag = drag_force_magnitude(cd, config.air_density, config.frontal_area(), rel_speed);
    let mut lift = magnus_force_magnitude(spin_rate, rel_speed, config);

    if wind.speed > 0.0 {
        let (drag_gain, lift_gain) = headwind_amplification(wind.direction);
        drag *= drag_gain;
        lift *= lift_gain;
    }

    let inv_mass_speed = 1.0 / (config.ball_mass * rel_speed);

    // Drag opposes the relative velocity
    let drag_accel = Vector2::new(
        -drag * rel_vel.x * inv_mass_speed,
        -drag * rel_vel.y * inv_mass_speed,
    );

    // Magnus acts perpendicular to the relative velocity, rotated so
    // positive spin lifts a ball moving in +x
    let magnus_accel = Vector2::new(
        -lift * rel_vel.y * inv_mass_speed,
        lift * rel_vel.x * inv_mass_speed,
    );

    drag_accel + magnus_accel + gravity
}

/// Drag and lift multipliers for a headwind.
///
/// Active only when the cosine of the wind direction is positive; a full
/// headwind raises drag by 50% and lift by 30%, scaled down with the
/// headwind component.
fn headwind_amplification(wind_direction: f64) -> (f64, f64) {
    let headwind_component = wind_direction.to_radians().cos();
    if headwind_component > 0.0 {
        (
            1.0 + HEADWIND_DRAG_GAIN * headwind_component,
            1.0 + HEADWIND_LIFT_GAIN * headwind_component,
        )
    } else {
        (1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> WindConditions {
        WindConditions::default()
    }

    #[test]
    fn test_gravity_only_below_threshold() {
        let config = PhysicsConfig::default();
        let accel = compute_acceleration(
            Vector2::new(0.0005, 0.0),
            0.0,
            30.0,
            3000.0,
            &calm(),
            &config,
        );
        assert_eq!(accel, Vector2::new(0.0, -config.gravity));
    }

    #[test]
    fn test_drag_decelerates_forward_motion() {
        let config = PhysicsConfig::default();
        let accel = compute_acceleration(Vector2::new(40.0, 0.0), 0.0, 40.0, 0.0, &calm(), &config);
        assert!(accel.x < 0.0);
        // No spin: vertical acceleration is gravity plus nothing
        assert!((accel.y + config.gravity).abs() < 1e-12);
    }

    #[test]
    fn test_positive_spin_lifts_forward_motion() {
        let config = PhysicsConfig::default();
        let no_spin =
            compute_acceleration(Vector2::new(40.0, 0.0), 0.0, 40.0, 0.0, &calm(), &config);
        let spun =
            compute_acceleration(Vector2::new(40.0, 0.0), 0.0, 40.0, 3000.0, &calm(), &config);
        assert!(spun.y > no_spin.y);
    }

    #[test]
    fn test_headwind_amplification_bounds() {
        let (full_drag, full_lift) = headwind_amplification(0.0);
        assert!((full_drag - 1.5).abs() < 1e-12);
        assert!((full_lift - 1.3).abs() < 1e-12);

        // cos <= 0: no amplification
        assert_eq!(headwind_amplification(90.0).0, 1.0);
        assert_eq!(headwind_amplification(180.0), (1.0, 1.0));
    }

    #[test]
    fn test_amplification_needs_nonzero_wind_speed() {
        let config = PhysicsConfig::default();
        let rel = Vector2::new(40.0, 0.0);
        let no_wind = compute_acceleration(rel, 0.0, 40.0, 0.0, &calm(), &config);
        let amplified = compute_acceleration(
            rel,
            0.0,
            40.0,
            0.0,
            &WindConditions { speed: 5.0, direction: 0.0 },
            &config,
        );
        // Same relative velocity, but the wind flag engages the gain
        assert!(amplified.x < no_wind.x);
    }
}
