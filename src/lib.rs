pub mod config;
pub mod console;
pub mod error;
pub mod global_variables;
pub mod prediction_engine;
pub mod server;
pub mod shared_data;

pub use error::PredictionError;
pub use prediction_engine::{explain, predict, validate_request};
pub use shared_data::{
    CongestionLevel, PredictionInput, PredictionOutput, RoadType, TrafficPredictionRequest,
};
