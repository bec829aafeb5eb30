// src/server/routes.rs

use actix_web::http::StatusCode;
use actix_web::{error, web, HttpRequest, HttpResponse, Responder, ResponseError};
use serde::Serialize;

use crate::error::PredictionError;
use crate::prediction_engine::{model_info, predict, validate_request};
use crate::server::latency::SimulatedLatency;
use crate::shared_data::{PredictionOutput, TrafficPredictionRequest};

/// Body returned for any rejected request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ResponseError for PredictionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub async fn get_model_info() -> impl Responder {
    HttpResponse::Ok().json(model_info())
}

pub async fn predict_traffic(
    latency: web::Data<SimulatedLatency>,
    request: web::Json<TrafficPredictionRequest>,
) -> Result<web::Json<PredictionOutput>, PredictionError> {
    let input = validate_request(&request).map_err(|e| {
        log::warn!("Rejected prediction request: {}", e);
        e
    })?;

    latency.wait().await;

    let output = predict(&input);
    log::info!(
        "Prediction: hour={} road={} weekend={} -> {:.1} ({})",
        input.hour(),
        input.road_type(),
        input.is_weekend(),
        output.predicted_traffic(),
        output.congestion_level()
    );
    Ok(web::Json(output))
}

/// Turns body extraction failures (bad JSON, wrong field types) into a 400 with an `ErrorBody`.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    log::warn!("Malformed prediction request: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorBody {
        error: "MalformedRequest",
        message: err.to_string(),
    });
    error::InternalError::from_response(err, response).into()
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorBody {
        error: "NotFound",
        message: "Endpoint not found".to_string(),
    })
}
