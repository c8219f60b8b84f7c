//! Wind handling: air-relative velocity for the force model, plus an
//! independent positional displacement model.
//!
//! The two models use different sign conventions on purpose.
//! `relative_velocity` decomposes the wind as `(+speed·cos, +speed·sin)`
//! and subtracts it from the ball velocity; the displacement model
//! negates the cosine component so that a 90° crosswind pushes the ball
//! toward positive y. They serve different consumers and must not be
//! unified; the module tests pin both conventions.

use nalgebra::Vector3;

/// Scale factor applied to the positional wind displacement
const DISPLACEMENT_SCALE: f64 = 0.1;

/// Velocity of the ball relative to the air mass.
///
/// The wind angle is meteorological: the direction the wind is blowing
/// FROM, in degrees. Any real angle is accepted (periodic through the
/// trigonometric functions); the wind speed is not bounds-checked.
///
/// Zero wind returns the ball velocity unchanged for any angle.
///
/// # Arguments
/// * `velocity_x`, `velocity_y` - Ball velocity components (m/s)
/// * `wind_speed` - Wind speed (m/s)
/// * `wind_angle` - Wind direction in degrees (blowing-from)
///
/// # Returns
/// Tuple of (relative_vx, relative_vy)
pub fn relative_velocity(
    velocity_x: f64,
    velocity_y: f64,
    wind_speed: f64,
    wind_angle: f64,
) -> (f64, f64) {
    let wind_angle_rad = wind_angle.to_radians();

    let wind_vx = wind_speed * wind_angle_rad.cos();
    let wind_vy = wind_speed * wind_angle_rad.sin();

    (velocity_x - wind_vx, velocity_y - wind_vy)
}

/// Simplified wind model that nudges a 3D position directly.
///
/// Not connected to the force-based solver: this is a standalone
/// utility for adjusting an already-computed position by a fraction of
/// the wind, attenuated by how fast the ball is moving.
#[derive(Debug, Clone, Copy)]
pub struct Wind {
    /// Wind speed (m/s)
    pub speed: f64,
    /// Direction in degrees the wind is blowing from
    pub direction: f64,
}

impl Wind {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// Displace a position by the wind, scaled down as ball velocity
    /// grows. The `+ 1.0` in the denominator keeps the expression finite
    /// for a stationary ball in still air; it must not be removed.
    ///
    /// A 90° wind pushes toward positive y, 270° toward negative y. The
    /// z component is never modified.
    pub fn apply_displacement(&self, position: Vector3<f64>, ball_velocity: f64) -> Vector3<f64> {
        let dir_rad = self.direction.to_radians();

        let relative_effect = self.speed / (ball_velocity + self.speed + 1.0);

        // Cosine component negated: direction is blowing-from
        let wind_x = -self.speed * dir_rad.cos();
        let wind_y = self.speed * dir_rad.sin();

        Vector3::new(
            position.x + wind_x * relative_effect * DISPLACEMENT_SCALE,
            position.y + wind_y * relative_effect * DISPLACEMENT_SCALE,
            position.z,
        )
    }
}

/// Free-function form of [`Wind::apply_displacement`].
pub fn apply_wind_displacement(
    position: Vector3<f64>,
    ball_velocity: f64,
    wind_speed: f64,
    wind_direction: f64,
) -> Vector3<f64> {
    Wind::new(wind_speed, wind_direction).apply_displacement(position, ball_velocity)
}
