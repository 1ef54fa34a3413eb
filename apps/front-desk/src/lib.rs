//! # Mint Salon Front Desk
//!
//! HTTP server behind the salon's front-desk screens.
//!
//! ## Module Structure
//! ```text
//! front_desk/
//! ├── lib.rs          ◄─── You are here (startup, tracing, shutdown)
//! ├── main.rs         ◄─── Binary entry point
//! ├── config.rs       ◄─── AppConfig: defaults → TOML → MINT_* env
//! ├── error.rs        ◄─── ApiError { code, message } → HTTP status
//! ├── export.rs       ◄─── InvoiceExporter seam + text file exporter
//! ├── state/          ◄─── AppState: store, billing draft, preferences
//! └── routes/         ◄─── axum handlers under /api
//! ```
//!
//! ## Startup Sequence
//! ```text
//! main()
//!   │
//!   ├── init_tracing()          RUST_LOG or "info,mint=debug,tower_http=info"
//!   ├── AppConfig::load()       front-desk.toml + MINT_* overrides
//!   ├── AppState::from_config() demo data, preferences file, exporter
//!   ├── routes::router()        /api/* + TraceLayer
//!   └── axum::serve()           until Ctrl+C / SIGTERM
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod routes;
pub mod state;

use chrono::Local;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::router;
pub use state::AppState;

/// Initializes the tracing subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mint=debug,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Serves the front-desk API until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let addr = config.bind_address();
    let state = AppState::from_config(config, Local::now().date_naive()).await;
    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Front desk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
