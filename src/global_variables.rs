// src/global_variables.rs

// Input domains (inclusive)
pub const TEMPERATURE_MIN: f64 = -10.0;
pub const TEMPERATURE_MAX: f64 = 40.0;
pub const RAINFALL_MIN: f64 = 0.0;
pub const RAINFALL_MAX: f64 = 50.0;
pub const HOUR_MIN: u8 = 0;
pub const HOUR_MAX: u8 = 23;

// Base traffic per period of the day
pub const RUSH_HOUR_BASE: f64 = 75.0;
pub const MIDDAY_BASE: f64 = 40.0;
pub const OFF_PEAK_BASE: f64 = 15.0;

// Multipliers applied to the running total
pub const WEEKEND_FACTOR: f64 = 0.7;
pub const HIGHWAY_FACTOR: f64 = 1.2;
pub const URBAN_FACTOR: f64 = 1.5;
pub const RURAL_FACTOR: f64 = 0.8;

// Additive weather terms
pub const RAIN_FACTOR: f64 = 2.0;
pub const EXTREME_TEMPERATURE_PENALTY: f64 = 15.0;
/// Temperatures strictly below this count as extreme cold.
pub const COLD_THRESHOLD: f64 = 0.0;
/// Temperatures strictly above this count as extreme heat.
pub const HEAT_THRESHOLD: f64 = 30.0;

// Output scale
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

// Lower bound of each tier above `low`
pub const MEDIUM_THRESHOLD: f64 = 30.0;
pub const HIGH_THRESHOLD: f64 = 60.0;
pub const SEVERE_THRESHOLD: f64 = 85.0;

pub const MODEL_VERSION: &str = "1.0.0";

// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;

// Request defaults
pub const DEFAULT_TEMPERATURE: f64 = 20.0;
pub const DEFAULT_RAINFALL: f64 = 0.0;
pub const DEFAULT_HOUR: f64 = 12.0;
pub const DEFAULT_ROAD_TYPE: &str = "highway";
