//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Builds the redirect resolver
//! - Starts the HTTP server with graceful shutdown support

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unshorten::config::Config;
use unshorten::resolver::RedirectResolver;
use unshorten::route::create_app;
use unshorten::service::AppState;

/// Application entry point
///
/// # Environment Variables
///
/// - `PORT` - Server port number (default: 8080)
/// - `RESOLVE_TIMEOUT_SECS` - Timeout for following one link (default: 10)
/// - `RUST_LOG` - Log filter (default: `unshorten=debug,tower_http=debug`)
#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("unshorten=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();

    let resolver =
        RedirectResolver::new(config.resolve_timeout).expect("Failed to build HTTP client");
    let state = AppState { resolver };

    let app = create_app(state).layer(TraceLayer::new_for_http());

    // Bind to all network interfaces on the specified port
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    info!(
        port = config.port,
        timeout_secs = config.resolve_timeout.as_secs(),
        "server running at http://localhost:{}", config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolves when SIGINT (Ctrl+C) or, on Unix, SIGTERM is received
///
/// In-flight checks are allowed to finish before the server exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
