use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voyara_api::{app, AppState};
use voyara_catalog::TripCatalog;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voyara_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = voyara_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Voyara API on port {}", config.server.port);

    let catalog =
        TripCatalog::load(&config.catalog.path).expect("Failed to load trip catalog feed");

    let app_state = AppState::new(catalog, config.catalog.clone(), config.booking.clone());
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
