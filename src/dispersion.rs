//! Shot dispersion analysis.
//!
//! Runs a batch of trajectories with normally distributed variation on
//! the launch and wind parameters and aggregates carry/apex statistics.
//! Each shot is an independent solve with no shared state, so the batch
//! runs across the thread pool.

use crate::api::{FlightError, LaunchConditions, WindConditions};
use crate::trajectory_solver::TrajectorySolver;
use rand::thread_rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// Dispersion run parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DispersionParams {
    pub num_simulations: usize,
    pub speed_std_dev: f64,      // m/s
    pub angle_std_dev: f64,      // degrees
    pub spin_std_dev: f64,       // rpm
    pub wind_speed_std_dev: f64, // m/s
}

impl Default for DispersionParams {
    fn default() -> Self {
        Self {
            num_simulations: 100,
            speed_std_dev: 1.5,
            angle_std_dev: 0.75,
            spin_std_dev: 150.0,
            wind_speed_std_dev: 0.5,
        }
    }
}

// Aggregated dispersion statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispersionResults {
    pub distances: Vec<f64>,
    pub apexes: Vec<f64>,
    pub mean_distance: f64,
    pub distance_std_dev: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub mean_apex: f64,
}

/// Run a dispersion batch around base launch and wind conditions.
///
/// Sampled speeds are clamped non-negative and sampled wind speeds take
/// their absolute value, matching the input domain of the solver. Shots
/// whose outcome is non-finite (possible for degenerate sampled inputs)
/// are dropped from the statistics.
pub fn run_dispersion(
    base: &LaunchConditions,
    wind: &WindConditions,
    params: &DispersionParams,
) -> Result<DispersionResults, FlightError> {
    if params.num_simulations == 0 {
        return Err("Dispersion run requires at least one simulation".into());
    }

    let speed_dist = Normal::new(base.speed, params.speed_std_dev)
        .map_err(|e| format!("Invalid speed distribution: {}", e))?;
    let angle_dist = Normal::new(base.angle, params.angle_std_dev)
        .map_err(|e| format!("Invalid angle distribution: {}", e))?;
    let spin_dist = Normal::new(base.spin_rate, params.spin_std_dev)
        .map_err(|e| format!("Invalid spin distribution: {}", e))?;
    let wind_speed_dist = Normal::new(wind.speed, params.wind_speed_std_dev)
        .map_err(|e| format!("Invalid wind speed distribution: {}", e))?;

    // Sample every shot up front, then solve in parallel
    let mut rng = thread_rng();
    let shots: Vec<(LaunchConditions, WindConditions)> = (0..params.num_simulations)
        .map(|_| {
            (
                LaunchConditions {
                    speed: speed_dist.sample(&mut rng).max(0.0),
                    angle: angle_dist.sample(&mut rng),
                    spin_rate: spin_dist.sample(&mut rng),
                },
                WindConditions {
                    speed: wind_speed_dist.sample(&mut rng).abs(),
                    direction: wind.direction,
                },
            )
        })
        .collect();

    let outcomes: Vec<(f64, f64)> = shots
        .into_par_iter()
        .map(|(launch, wind)| {
            let result = TrajectorySolver::new(launch, wind).solve();
            (result.distance, result.apex)
        })
        .filter(|(distance, apex)| distance.is_finite() && apex.is_finite())
        .collect();

    if outcomes.is_empty() {
        return Err("No finite simulation outcomes".into());
    }

    let distances: Vec<f64> = outcomes.iter().map(|&(d, _)| d).collect();
    let apexes: Vec<f64> = outcomes.iter().map(|&(_, a)| a).collect();

    let n = distances.len() as f64;
    let mean_distance = distances.iter().sum::<f64>() / n;
    let variance = distances
        .iter()
        .map(|d| (d - mean_distance) * (d - mean_distance))
        .sum::<f64>()
        / n;
    let mean_apex = apexes.iter().sum::<f64>() / n;

    let min_distance = distances.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_distance = distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(DispersionResults {
        distances,
        apexes,
        mean_distance,
        distance_std_dev: variance.sqrt(),
        min_distance,
        max_distance,
        mean_apex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_params(n: usize) -> DispersionParams {
        DispersionParams {
            num_simulations: n,
            speed_std_dev: 0.0,
            angle_std_dev: 0.0,
            spin_std_dev: 0.0,
            wind_speed_std_dev: 0.0,
        }
    }

    #[test]
    fn test_zero_simulations_is_an_error() {
        let params = exact_params(0);
        let err = run_dispersion(
            &LaunchConditions::default(),
            &WindConditions::default(),
            &params,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_negative_std_dev_is_an_error() {
        let params = DispersionParams {
            speed_std_dev: -1.0,
            ..exact_params(10)
        };
        let err = run_dispersion(
            &LaunchConditions::default(),
            &WindConditions::default(),
            &params,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_variation_reproduces_baseline() {
        let launch = LaunchConditions {
            speed: 50.0,
            angle: 20.0,
            spin_rate: 2000.0,
        };
        let wind = WindConditions::default();
        let baseline = TrajectorySolver::new(launch, wind).solve();

        let results = run_dispersion(&launch, &wind, &exact_params(8)).unwrap();
        assert_eq!(results.distances.len(), 8);
        for distance in &results.distances {
            assert!((distance - baseline.distance).abs() < 1e-9);
        }
        assert!((results.mean_distance - baseline.distance).abs() < 1e-9);
        assert!(results.distance_std_dev.abs() < 1e-9);
        assert!((results.mean_apex - baseline.apex).abs() < 1e-9);
    }

    #[test]
    fn test_variation_spreads_the_outcomes() {
        let launch = LaunchConditions {
            speed: 60.0,
            angle: 15.0,
            spin_rate: 2500.0,
        };
        let params = DispersionParams {
            num_simulations: 40,
            ..DispersionParams::default()
        };
        let results = run_dispersion(&launch, &WindConditions::default(), &params).unwrap();

        assert!(results.min_distance <= results.mean_distance);
        assert!(results.mean_distance <= results.max_distance);
        assert!(results.distance_std_dev > 0.0);
        assert_eq!(results.distances.len(), results.apexes.len());
    }
}
