// src/prediction_engine/validator.rs

use crate::error::PredictionError;
use crate::global_variables::{
    HOUR_MAX, HOUR_MIN, RAINFALL_MAX, RAINFALL_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
use crate::shared_data::{PredictionInput, RoadType, TrafficPredictionRequest};

const ROAD_TYPE_CHOICES: &str = "highway, urban, rural";

/// Turns a raw request into a `PredictionInput`, or reports the first field that is
/// out of its domain. Fields are checked in the order hour, temperature, rainfall, road type.
pub fn validate_request(
    request: &TrafficPredictionRequest,
) -> Result<PredictionInput, PredictionError> {
    let hour = check_hour(request.hour)?;
    check_temperature(request.temperature)?;
    check_rainfall(request.rainfall)?;
    let road_type = parse_road_type(&request.road_type)?;

    PredictionInput::new(
        request.temperature,
        request.rainfall,
        hour,
        request.is_weekend,
        road_type,
    )
}

/// Exact, case-sensitive match against the wire names.
pub fn parse_road_type(value: &str) -> Result<RoadType, PredictionError> {
    RoadType::ALL
        .into_iter()
        .find(|road_type| road_type.as_str() == value)
        .ok_or_else(|| PredictionError::InvalidEnum {
            field: "roadType",
            value: value.to_string(),
            expected: ROAD_TYPE_CHOICES,
        })
}

pub fn check_hour(hour: f64) -> Result<u8, PredictionError> {
    let in_range = (f64::from(HOUR_MIN)..=f64::from(HOUR_MAX)).contains(&hour);
    if !in_range || hour.fract() != 0.0 {
        return Err(PredictionError::OutOfRange {
            field: "hour",
            value: hour,
            expected: "an integer in [0, 23]",
        });
    }
    Ok(hour as u8)
}

pub fn check_temperature(temperature: f64) -> Result<(), PredictionError> {
    if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
        return Err(PredictionError::OutOfRange {
            field: "temperature",
            value: temperature,
            expected: "a value in [-10, 40]",
        });
    }
    Ok(())
}

pub fn check_rainfall(rainfall: f64) -> Result<(), PredictionError> {
    if !(RAINFALL_MIN..=RAINFALL_MAX).contains(&rainfall) {
        return Err(PredictionError::OutOfRange {
            field: "rainfall",
            value: rainfall,
            expected: "a value in [0, 50]",
        });
    }
    Ok(())
}
