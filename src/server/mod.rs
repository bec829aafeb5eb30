pub mod latency;
pub mod routes;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::ServerConfig;
use crate::global_variables::JSON_PAYLOAD_LIMIT;
use latency::SimulatedLatency;

/// Registers the prediction endpoints. Shared by `run` and the HTTP tests.
pub fn configure(latency: SimulatedLatency) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(latency))
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_PAYLOAD_LIMIT)
                    .error_handler(routes::json_error_handler),
            )
            .route("/health", web::get().to(routes::health_check))
            .route("/model-info", web::get().to(routes::get_model_info))
            .route("/predict", web::post().to(routes::predict_traffic));
    }
}

/// Binds and runs the HTTP server until it is shut down.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let latency = SimulatedLatency::new(config.latency, config.latency_jitter);
    let bind_address = config.bind_address();

    log::info!("Traffic congestion API listening on http://{}", bind_address);
    log::info!("   GET  /health      - health check");
    log::info!("   GET  /model-info  - scoring weights and thresholds");
    log::info!("   POST /predict     - congestion prediction");
    if !latency.is_disabled() {
        log::info!(
            "Simulated latency: {} ms (+ up to {} ms jitter)",
            config.latency.as_millis(),
            config.latency_jitter.as_millis()
        );
    }

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .configure(configure(latency))
            .default_service(web::route().to(routes::not_found))
    });
    if let Some(workers) = config.workers {
        log::info!("Workers: {}", workers);
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
