use shortener_rs::routes::{router, AppState};
use shortener_rs::{AppEnv, Config, EventPublisher};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let app_env = AppEnv::from_env();
    let env_file = dotenvy::from_filename(app_env.env_file());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = env_file {
        tracing::warn!("Error reading {} file: {}", app_env.env_file(), e);
    }

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!("Configuration loaded: {:?} ({:?})", config.bus_type, config.app_env);

    // Initialize event bus once; every request reuses it
    let publisher = EventPublisher::from_config(&config)
        .await
        .expect("Failed to initialize event bus");

    let app = router(AppState { publisher }).layer(
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");
    tracing::info!("Shortener gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
