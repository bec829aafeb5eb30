pub mod predictive_model;
pub mod validator;

// Re-export the items from predictive_model and validator
pub use predictive_model::{explain, model_info, predict, PredictionBreakdown, TrafficPeriod};
pub use validator::{parse_road_type, validate_request};
