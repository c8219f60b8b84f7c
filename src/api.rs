// Public API types shared across the crate
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

// Error type for fallible operations (dispersion analysis); the
// trajectory solver itself never fails.
#[derive(Debug)]
pub struct FlightError {
    message: String,
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FlightError {}

impl From<String> for FlightError {
    fn from(msg: String) -> Self {
        FlightError { message: msg }
    }
}

impl From<&str> for FlightError {
    fn from(msg: &str) -> Self {
        FlightError { message: msg.to_string() }
    }
}

// Launch conditions at the moment of impact with the club
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchConditions {
    pub speed: f64,     // ball speed, m/s (>= 0)
    pub angle: f64,     // launch angle in degrees from horizontal
    pub spin_rate: f64, // rpm, signed; positive spin lifts
}

impl Default for LaunchConditions {
    fn default() -> Self {
        // Representative driver launch
        Self {
            speed: 70.0,
            angle: 12.0,
            spin_rate: 2500.0,
        }
    }
}

// Ambient wind for the force model
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindConditions {
    pub speed: f64,     // m/s (>= 0)
    pub direction: f64, // degrees, direction the wind is blowing FROM
}

impl Default for WindConditions {
    fn default() -> Self {
        Self {
            speed: 0.0,
            direction: 0.0,
        }
    }
}

// Single sample of the flight path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64, // horizontal position (m)
    pub y: f64, // vertical position (m)
}

impl TrajectoryPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Complete flight path with summary metrics
//
// Invariants: the first point is always (0, 0); `distance` equals the
// final point's x; `apex` is the maximum y observed over all points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryResult {
    pub points: Vec<TrajectoryPoint>,
    pub distance: f64, // carry, m
    pub apex: f64,     // maximum height, m
}
