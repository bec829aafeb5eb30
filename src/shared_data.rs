// src/shared_data.rs

use crate::error::PredictionError;
use crate::global_variables::{
    DEFAULT_HOUR, DEFAULT_RAINFALL, DEFAULT_ROAD_TYPE, DEFAULT_TEMPERATURE, HIGHWAY_FACTOR,
    HIGH_THRESHOLD, MEDIUM_THRESHOLD, RURAL_FACTOR, SEVERE_THRESHOLD, URBAN_FACTOR,
};
use crate::prediction_engine::validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of road the prediction is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Highway,
    Urban,
    Rural,
}

impl RoadType {
    pub const ALL: [RoadType; 3] = [RoadType::Highway, RoadType::Urban, RoadType::Rural];

    /// Factor applied to the running total for this road type.
    pub fn multiplier(self) -> f64 {
        match self {
            RoadType::Highway => HIGHWAY_FACTOR,
            RoadType::Urban => URBAN_FACTOR,
            RoadType::Rural => RURAL_FACTOR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadType::Highway => "highway",
            RoadType::Urban => "urban",
            RoadType::Rural => "rural",
        }
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadType {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::parse_road_type(s)
    }
}

/// Congestion tier, ordered from least to most congested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
    Severe,
}

impl CongestionLevel {
    /// Classifies a clamped score using half-open bands:
    /// [0, 30) low, [30, 60) medium, [60, 85) high, [85, 100] severe.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            CongestionLevel::Low
        } else if score < HIGH_THRESHOLD {
            CongestionLevel::Medium
        } else if score < SEVERE_THRESHOLD {
            CongestionLevel::High
        } else {
            CongestionLevel::Severe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
            CongestionLevel::Severe => "severe",
        }
    }

    /// Capitalised name for display ("Severe").
    pub fn title(self) -> &'static str {
        match self {
            CongestionLevel::Low => "Low",
            CongestionLevel::Medium => "Medium",
            CongestionLevel::High => "High",
            CongestionLevel::Severe => "Severe",
        }
    }
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated set of prediction inputs. Only constructible through validation,
/// so every value held here lies within its declared domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionInput {
    temperature: f64,
    rainfall: f64,
    hour: u8,
    is_weekend: bool,
    road_type: RoadType,
}

impl PredictionInput {
    pub fn new(
        temperature: f64,
        rainfall: f64,
        hour: u8,
        is_weekend: bool,
        road_type: RoadType,
    ) -> Result<Self, PredictionError> {
        validator::check_hour(f64::from(hour))?;
        validator::check_temperature(temperature)?;
        validator::check_rainfall(rainfall)?;
        Ok(Self {
            temperature,
            rainfall,
            hour,
            is_weekend,
            road_type,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub fn road_type(&self) -> RoadType {
        self.road_type
    }
}

/// Result of a prediction. The level is always derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionOutput {
    predicted_traffic: f64,
    congestion_level: CongestionLevel,
}

impl PredictionOutput {
    /// Builds an output from an already clamped score.
    pub(crate) fn from_clamped_score(predicted_traffic: f64) -> Self {
        Self {
            predicted_traffic,
            congestion_level: CongestionLevel::from_score(predicted_traffic),
        }
    }

    pub fn predicted_traffic(&self) -> f64 {
        self.predicted_traffic
    }

    pub fn congestion_level(&self) -> CongestionLevel {
        self.congestion_level
    }
}

/// Raw, unvalidated prediction request as received over the wire.
///
/// Accepts both camelCase and snake_case names for the two compound fields;
/// any missing field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficPredictionRequest {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_rainfall")]
    pub rainfall: f64,
    #[serde(default = "default_hour")]
    pub hour: f64,
    #[serde(default, alias = "is_weekend")]
    pub is_weekend: bool,
    #[serde(default = "default_road_type", alias = "road_type")]
    pub road_type: String,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_rainfall() -> f64 {
    DEFAULT_RAINFALL
}

fn default_hour() -> f64 {
    DEFAULT_HOUR
}

fn default_road_type() -> String {
    DEFAULT_ROAD_TYPE.to_string()
}

impl Default for TrafficPredictionRequest {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            rainfall: DEFAULT_RAINFALL,
            hour: DEFAULT_HOUR,
            is_weekend: false,
            road_type: default_road_type(),
        }
    }
}

impl From<PredictionInput> for TrafficPredictionRequest {
    fn from(input: PredictionInput) -> Self {
        Self {
            temperature: input.temperature,
            rainfall: input.rainfall,
            hour: f64::from(input.hour),
            is_weekend: input.is_weekend,
            road_type: input.road_type.as_str().to_string(),
        }
    }
}

/// Static description of the scoring model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub version: &'static str,
    pub rush_hours: Vec<[u8; 2]>,
    pub midday_hours: [u8; 2],
    pub base_traffic: BaseTraffic,
    pub weekend_factor: f64,
    pub road_multipliers: RoadMultipliers,
    pub rain_factor: f64,
    pub extreme_temperature_penalty: f64,
    pub cold_threshold: f64,
    pub heat_threshold: f64,
    pub tier_thresholds: TierThresholds,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaseTraffic {
    pub rush_hour: f64,
    pub midday: f64,
    pub off_peak: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadMultipliers {
    pub highway: f64,
    pub urban: f64,
    pub rural: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierThresholds {
    pub medium: f64,
    pub high: f64,
    pub severe: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_bands_are_half_open() {
        assert_eq!(CongestionLevel::from_score(0.0), CongestionLevel::Low);
        assert_eq!(CongestionLevel::from_score(29.999), CongestionLevel::Low);
        assert_eq!(CongestionLevel::from_score(30.0), CongestionLevel::Medium);
        assert_eq!(CongestionLevel::from_score(59.999), CongestionLevel::Medium);
        assert_eq!(CongestionLevel::from_score(60.0), CongestionLevel::High);
        assert_eq!(CongestionLevel::from_score(84.999), CongestionLevel::High);
        assert_eq!(CongestionLevel::from_score(85.0), CongestionLevel::Severe);
        assert_eq!(CongestionLevel::from_score(100.0), CongestionLevel::Severe);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(CongestionLevel::Low < CongestionLevel::Medium);
        assert!(CongestionLevel::Medium < CongestionLevel::High);
        assert!(CongestionLevel::High < CongestionLevel::Severe);
    }

    #[test]
    fn road_type_parses_from_str() {
        assert_eq!("urban".parse::<RoadType>(), Ok(RoadType::Urban));
        assert!("motorway".parse::<RoadType>().is_err());
    }

    #[test]
    fn request_accepts_both_naming_styles() {
        let camel: TrafficPredictionRequest = serde_json::from_str(
            r#"{"temperature":5,"rainfall":1.5,"hour":8,"isWeekend":true,"roadType":"rural"}"#,
        )
        .unwrap();
        let snake: TrafficPredictionRequest = serde_json::from_str(
            r#"{"temperature":5,"rainfall":1.5,"hour":8,"is_weekend":true,"road_type":"rural"}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
        assert!(camel.is_weekend);
        assert_eq!(camel.road_type, "rural");
    }

    #[test]
    fn missing_request_fields_take_defaults() {
        let request: TrafficPredictionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, TrafficPredictionRequest::default());
        assert_eq!(request.hour, 12.0);
        assert_eq!(request.road_type, "highway");
    }

    #[test]
    fn output_serializes_with_wire_names() {
        let output = PredictionOutput::from_clamped_score(48.0);
        let json = serde_json::to_value(output).unwrap();
        assert_eq!(json["predicted_traffic"], 48.0);
        assert_eq!(json["congestion_level"], "medium");
    }

    #[test]
    fn input_rejects_out_of_domain_values() {
        assert!(PredictionInput::new(20.0, 0.0, 24, false, RoadType::Urban).is_err());
        assert!(PredictionInput::new(41.0, 0.0, 12, false, RoadType::Urban).is_err());
        assert!(PredictionInput::new(20.0, -0.1, 12, false, RoadType::Urban).is_err());
        assert!(PredictionInput::new(-10.0, 50.0, 23, true, RoadType::Rural).is_ok());
    }
}
