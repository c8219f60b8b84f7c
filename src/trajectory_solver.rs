//! Fixed-step trajectory integration from launch to ground impact.
//!
//! Explicit Euler with a 1 ms step: each step resolves the air-relative
//! velocity, assembles drag, Magnus and gravity into an acceleration,
//! advances velocity then position, and records a sample. Integration
//! stops when the ball crosses the ground or the sample cap is reached.
//! On a ground crossing the final sample is replaced with the linear
//! interpolation of the crossing, so the returned path always ends at
//! y = 0 exactly in that case.

use crate::api::{LaunchConditions, TrajectoryPoint, TrajectoryResult, WindConditions};
use crate::constants::PhysicsConfig;
use crate::derivatives::compute_acceleration;
use crate::wind::relative_velocity;
use nalgebra::Vector2;

/// Trajectory solver for a single shot.
///
/// Holds the launch and wind conditions together with the physical
/// configuration; `solve` is a pure function of these and may be called
/// repeatedly or from multiple threads.
pub struct TrajectorySolver {
    launch: LaunchConditions,
    wind: WindConditions,
    config: PhysicsConfig,
}

impl TrajectorySolver {
    /// Solver with the standard ball and atmosphere parameters.
    pub fn new(launch: LaunchConditions, wind: WindConditions) -> Self {
        Self::with_config(launch, wind, PhysicsConfig::default())
    }

    /// Solver with an explicit physical configuration.
    pub fn with_config(
        launch: LaunchConditions,
        wind: WindConditions,
        config: PhysicsConfig,
    ) -> Self {
        Self { launch, wind, config }
    }

    /// Integrate the flight path.
    ///
    /// Never fails: degenerate inputs take the gravity-only branch and
    /// produce a short but well-formed trajectory. Inputs outside the
    /// physical envelope (zero launch speed with nonzero wind, extreme
    /// spin) are not clamped and can drive the samples non-finite.
    pub fn solve(&self) -> TrajectoryResult {
        let config = &self.config;
        let dt = config.time_step;

        let angle_rad = self.launch.angle.to_radians();
        let mut velocity = Vector2::new(
            self.launch.speed * angle_rad.cos(),
            self.launch.speed * angle_rad.sin(),
        );

        let mut x = 0.0;
        let mut y = 0.0;
        let mut prev_y = 0.0;

        let mut points = vec![TrajectoryPoint::new(0.0, 0.0)];
        let mut apex = 0.0;

        while y >= 0.0 {
            prev_y = y;

            let (rel_vx, rel_vy) =
                relative_velocity(velocity.x, velocity.y, self.wind.speed, self.wind.direction);

            let accel = compute_acceleration(
                Vector2::new(rel_vx, rel_vy),
                y,
                self.launch.speed,
                self.launch.spin_rate,
                &self.wind,
                config,
            );

            velocity += accel * dt;
            x += velocity.x * dt;
            y += velocity.y * dt;

            points.push(TrajectoryPoint::new(x, y));

            if y > apex {
                apex = y;
            }

            if points.len() > config.max_samples {
                break;
            }
        }

        // Pin the terminal sample to the ground crossing. Skipped when the
        // cap fired (y still non-negative) and when the ball was already
        // at ground level on the previous sample.
        if y < 0.0 && prev_y > 0.0 {
            let t = -prev_y / (y - prev_y);
            if let Some(last) = points.last_mut() {
                let ground_x = last.x - t * velocity.x * dt;
                *last = TrajectoryPoint::new(ground_x, 0.0);
            }
        }

        let distance = points.last().map_or(0.0, |p| p.x);

        TrajectoryResult { points, distance, apex }
    }
}

/// Simulate a shot from scalar launch parameters.
///
/// # Arguments
/// * `initial_speed` - Ball speed at launch (m/s, >= 0)
/// * `launch_angle` - Degrees from horizontal
/// * `spin_rate` - rpm, signed; positive spin lifts
/// * `wind_speed` - m/s (>= 0)
/// * `wind_angle` - Degrees, direction the wind is blowing from
pub fn calculate_trajectory(
    initial_speed: f64,
    launch_angle: f64,
    spin_rate: f64,
    wind_speed: f64,
    wind_angle: f64,
) -> TrajectoryResult {
    TrajectorySolver::new(
        LaunchConditions {
            speed: initial_speed,
            angle: launch_angle,
            spin_rate,
        },
        WindConditions {
            speed: wind_speed,
            direction: wind_angle,
        },
    )
    .solve()
}
