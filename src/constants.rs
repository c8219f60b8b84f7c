//! Physical constants used in flight calculations

use serde::{Deserialize, Serialize};

/// Gravitational acceleration in m/s²
pub const GRAVITY_MPS2: f64 = 9.81;

/// Standard air density at sea level (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Dynamic viscosity of air (Pa·s)
///
/// Value: 1.81e-5, roughly 15°C. The Reynolds number uses this fixed
/// value; viscosity is not varied with temperature.
pub const AIR_VISCOSITY: f64 = 1.81e-5;

/// Specific gas constant for dry air (J/(kg·K))
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.058;

/// Conversion offset: °C to K
pub const KELVIN_OFFSET: f64 = 273.15;

/// Conversion factor: hPa to Pa
pub const HPA_TO_PA: f64 = 100.0;

/// Mass of a regulation golf ball (kg)
pub const BALL_MASS_KG: f64 = 0.0459;

/// Radius of a regulation golf ball (m)
pub const BALL_RADIUS_M: f64 = 0.0213;

/// Base drag coefficient for a dimpled ball
pub const BASE_DRAG_COEFFICIENT: f64 = 0.05;

/// Base lift coefficient for the Magnus force
pub const BASE_LIFT_COEFFICIENT: f64 = 0.25;

/// Integration time step (s)
pub const TIME_STEP_S: f64 = 0.001;

/// Maximum number of recorded samples per trajectory
///
/// Safety valve against trajectories that never descend (strong upward
/// Magnus force, odd wind input). The launch point is recorded in
/// addition to these samples.
pub const MAX_TRAJECTORY_SAMPLES: usize = 10_000;

/// Minimum air-relative speed below which aerodynamic forces are skipped
/// and only gravity is applied. Guards the force formulas against
/// division by zero.
pub const MIN_RELATIVE_SPEED: f64 = 0.001;

/// Immutable bundle of the physical parameters consumed by the solver.
///
/// Every parameter has a single authoritative value here; the solver and
/// the atmosphere helpers draw on the same constants rather than
/// declaring their own copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Air density used by the force model (kg/m³)
    pub air_density: f64,
    /// Ball mass (kg)
    pub ball_mass: f64,
    /// Ball radius (m)
    pub ball_radius: f64,
    /// Base drag coefficient before regime adjustments
    pub drag_coefficient: f64,
    /// Base lift coefficient for the Magnus force
    pub lift_coefficient: f64,
    /// Integration time step (s)
    pub time_step: f64,
    /// Maximum recorded samples per trajectory
    pub max_samples: usize,
    /// Relative-speed threshold for the gravity-only branch (m/s)
    pub min_relative_speed: f64,
}

impl PhysicsConfig {
    /// Frontal area of the ball (m²)
    pub fn frontal_area(&self) -> f64 {
        std::f64::consts::PI * self.ball_radius * self.ball_radius
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_MPS2,
            air_density: STANDARD_AIR_DENSITY,
            ball_mass: BALL_MASS_KG,
            ball_radius: BALL_RADIUS_M,
            drag_coefficient: BASE_DRAG_COEFFICIENT,
            lift_coefficient: BASE_LIFT_COEFFICIENT,
            time_step: TIME_STEP_S,
            max_samples: MAX_TRAJECTORY_SAMPLES,
            min_relative_speed: MIN_RELATIVE_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, GRAVITY_MPS2);
        assert_eq!(config.air_density, STANDARD_AIR_DENSITY);
        assert_eq!(config.ball_mass, BALL_MASS_KG);
        assert_eq!(config.ball_radius, BALL_RADIUS_M);
        assert_eq!(config.max_samples, MAX_TRAJECTORY_SAMPLES);
    }

    #[test]
    fn test_frontal_area() {
        let config = PhysicsConfig::default();
        let expected = std::f64::consts::PI * 0.0213 * 0.0213;
        assert!((config.frontal_area() - expected).abs() < 1e-12);
    }
}
