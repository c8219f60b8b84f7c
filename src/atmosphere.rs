//! Air density and density-scaled wind speed from observed weather.
//!
//! Standalone utilities: the trajectory solver runs on the fixed
//! standard density from its configuration and does not consume these.
//! Callers who want weather-coupled flight can feed the result into a
//! custom `PhysicsConfig` themselves.

use crate::constants::{DRY_AIR_GAS_CONSTANT, HPA_TO_PA, KELVIN_OFFSET, STANDARD_AIR_DENSITY};
use serde::{Deserialize, Serialize};

/// Observed surface weather
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherData {
    /// Temperature (°C)
    pub temperature: f64,
    /// Station pressure (hPa)
    pub pressure: f64,
    /// Relative humidity (0–100)
    pub humidity: f64,
}

/// Air density from weather data (kg/m³).
///
/// Ideal-gas density `P / (R·T)` with a humidity correction through the
/// Tetens saturation-vapor-pressure approximation. Returns the standard
/// sea-level density when no weather data is supplied.
pub fn air_density(weather: Option<&WeatherData>) -> f64 {
    let Some(weather) = weather else {
        return STANDARD_AIR_DENSITY;
    };

    let temp_k = weather.temperature + KELVIN_OFFSET;
    let pressure_pa = weather.pressure * HPA_TO_PA;

    let mut density = pressure_pa / (DRY_AIR_GAS_CONSTANT * temp_k);

    // Tetens approximation for saturation vapor pressure
    let saturation_vp = 6.1078
        * ((17.27 * weather.temperature) / (weather.temperature + 237.3)).exp();
    let vapor_pressure = weather.humidity / 100.0 * saturation_vp;

    density *= 1.0 - 0.378 * vapor_pressure / pressure_pa;

    density
}

/// Scale a wind speed by the square root of the density ratio against
/// standard conditions. Denser air carries more of the wind's effect.
pub fn wind_adjusted_speed(speed: f64, weather: Option<&WeatherData>) -> f64 {
    match weather {
        None => speed,
        Some(weather) => {
            let density_ratio = air_density(Some(weather)) / STANDARD_AIR_DENSITY;
            speed * density_ratio.sqrt()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_day() -> WeatherData {
        WeatherData {
            temperature: 15.0,
            pressure: 1013.25,
            humidity: 0.0,
        }
    }

    #[test]
    fn test_no_weather_returns_standard_density() {
        assert_eq!(air_density(None), 1.225);
    }

    #[test]
    fn test_standard_day_close_to_standard_density() {
        let density = air_density(Some(&standard_day()));
        assert!((density - 1.225).abs() < 0.005);
    }

    #[test]
    fn test_density_decreases_with_temperature() {
        let cold = air_density(Some(&WeatherData { temperature: 0.0, ..standard_day() }));
        let warm = air_density(Some(&WeatherData { temperature: 30.0, ..standard_day() }));
        assert!(warm < cold);
    }

    #[test]
    fn test_humidity_lowers_density() {
        let dry = air_density(Some(&standard_day()));
        let humid = air_density(Some(&WeatherData { humidity: 90.0, ..standard_day() }));
        assert!(humid < dry);
    }

    #[test]
    fn test_density_increases_with_pressure() {
        let low = air_density(Some(&WeatherData { pressure: 980.0, ..standard_day() }));
        let high = air_density(Some(&WeatherData { pressure: 1030.0, ..standard_day() }));
        assert!(high > low);
    }

    #[test]
    fn test_wind_speed_unchanged_without_weather() {
        assert_eq!(wind_adjusted_speed(12.0, None), 12.0);
    }

    #[test]
    fn test_wind_speed_scales_with_density() {
        // Cold dense air: adjusted speed above nominal. Hot thin air: below.
        let cold = WeatherData { temperature: -10.0, ..standard_day() };
        let hot = WeatherData { temperature: 35.0, ..standard_day() };
        assert!(wind_adjusted_speed(10.0, Some(&cold)) > 10.0);
        assert!(wind_adjusted_speed(10.0, Some(&hot)) < 10.0);
    }
}
