// prediction_server_main.rs
use traffic_congestion::config::ServerConfig;
use traffic_congestion::server;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    log::info!("Starting traffic congestion prediction server...");
    server::run(config).await?;
    Ok(())
}
