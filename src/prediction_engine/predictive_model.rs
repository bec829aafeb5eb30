// src/prediction_engine/predictive_model.rs

use serde::Serialize;

use crate::global_variables::{
    COLD_THRESHOLD, EXTREME_TEMPERATURE_PENALTY, HEAT_THRESHOLD, HIGHWAY_FACTOR, HIGH_THRESHOLD,
    MEDIUM_THRESHOLD, MIDDAY_BASE, MODEL_VERSION, OFF_PEAK_BASE, RAIN_FACTOR, RURAL_FACTOR,
    RUSH_HOUR_BASE, SCORE_MAX, SCORE_MIN, SEVERE_THRESHOLD, URBAN_FACTOR, WEEKEND_FACTOR,
};
use crate::shared_data::{
    BaseTraffic, ModelInfo, PredictionInput, PredictionOutput, RoadMultipliers, TierThresholds,
};

/// Period of the day that sets the base traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficPeriod {
    /// Hours 7-9 and 16-19.
    RushHour,
    /// Hours 10-15.
    Midday,
    /// Everything else (0-6, 20-23).
    OffPeak,
}

impl TrafficPeriod {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            7..=9 | 16..=19 => TrafficPeriod::RushHour,
            10..=15 => TrafficPeriod::Midday,
            _ => TrafficPeriod::OffPeak,
        }
    }

    pub fn base_traffic(self) -> f64 {
        match self {
            TrafficPeriod::RushHour => RUSH_HOUR_BASE,
            TrafficPeriod::Midday => MIDDAY_BASE,
            TrafficPeriod::OffPeak => OFF_PEAK_BASE,
        }
    }
}

/// Every intermediate value of a single prediction, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionBreakdown {
    pub period: TrafficPeriod,
    pub base: f64,
    pub after_weekend: f64,
    pub after_road_type: f64,
    pub rain_term: f64,
    pub temperature_term: f64,
    /// Total before clamping; may exceed 100.
    pub raw_total: f64,
    pub output: PredictionOutput,
}

/// Scores a validated input. Pure: same input, same output, no side effects.
pub fn predict(input: &PredictionInput) -> PredictionOutput {
    explain(input).output
}

/// Same computation as `predict`, keeping the intermediate values.
pub fn explain(input: &PredictionInput) -> PredictionBreakdown {
    let period = TrafficPeriod::from_hour(input.hour());
    let base = period.base_traffic();

    let after_weekend = if input.is_weekend() {
        base * WEEKEND_FACTOR
    } else {
        base
    };

    let after_road_type = after_weekend * input.road_type().multiplier();

    // Weather terms are added after every multiplier has been applied.
    let rain_term = if input.rainfall() > 0.0 {
        input.rainfall() * RAIN_FACTOR
    } else {
        0.0
    };

    let temperature = input.temperature();
    let temperature_term = if temperature < COLD_THRESHOLD || temperature > HEAT_THRESHOLD {
        EXTREME_TEMPERATURE_PENALTY
    } else {
        0.0
    };

    let raw_total = after_road_type + rain_term + temperature_term;
    let output = PredictionOutput::from_clamped_score(raw_total.clamp(SCORE_MIN, SCORE_MAX));

    log::debug!(
        "[Prediction] period={:?} base={:.2} weekend={:.2} road={:.2} rain=+{:.2} temp=+{:.2} raw={:.2} -> {:.2} ({})",
        period,
        base,
        after_weekend,
        after_road_type,
        rain_term,
        temperature_term,
        raw_total,
        output.predicted_traffic(),
        output.congestion_level()
    );

    PredictionBreakdown {
        period,
        base,
        after_weekend,
        after_road_type,
        rain_term,
        temperature_term,
        raw_total,
        output,
    }
}

pub fn model_info() -> ModelInfo {
    ModelInfo {
        version: MODEL_VERSION,
        rush_hours: vec![[7, 9], [16, 19]],
        midday_hours: [10, 15],
        base_traffic: BaseTraffic {
            rush_hour: RUSH_HOUR_BASE,
            midday: MIDDAY_BASE,
            off_peak: OFF_PEAK_BASE,
        },
        weekend_factor: WEEKEND_FACTOR,
        road_multipliers: RoadMultipliers {
            highway: HIGHWAY_FACTOR,
            urban: URBAN_FACTOR,
            rural: RURAL_FACTOR,
        },
        rain_factor: RAIN_FACTOR,
        extreme_temperature_penalty: EXTREME_TEMPERATURE_PENALTY,
        cold_threshold: COLD_THRESHOLD,
        heat_threshold: HEAT_THRESHOLD,
        tier_thresholds: TierThresholds {
            medium: MEDIUM_THRESHOLD,
            high: HIGH_THRESHOLD,
            severe: SEVERE_THRESHOLD,
        },
    }
}
