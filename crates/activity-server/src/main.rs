use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{error, info};

use activity_api::{build_router, AppState};
use activity_core::{ActivityRegistry, SessionStore};
use activity_infrastructure::JsonFileCredentials;
use activity_shared::config::Settings;

mod routes;
mod sweeper;

use routes::static_routes;
use sweeper::spawn_session_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    activity_shared::telemetry::init_telemetry();

    info!("Activity server starting...");

    // Load configuration
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create App State
    let credentials = Arc::new(JsonFileCredentials::new(&settings.auth.credentials_path));
    info!("Teacher credentials read from {}", credentials.path().display());

    let sessions = Arc::new(SessionStore::with_ttl(credentials, settings.session_ttl()));
    let activities = Arc::new(ActivityRegistry::seeded()?);
    let state = AppState::new(sessions.clone(), activities);

    if settings.auth.sweep_interval_seconds > 0 {
        spawn_session_sweeper(sessions, Duration::from_secs(settings.auth.sweep_interval_seconds));
    }

    // Build router
    let app = build_router(state)
        .merge(static_routes(&settings.static_files))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        );

    // Bind address
    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Activity server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
