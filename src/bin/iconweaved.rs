//! iconweaved — the iconweave HTTP daemon.
//!
//! Serves the static dataset and the composite endpoint:
//!
//! - `GET /api/icons` — canonical base names (JSON array)
//! - `GET /api/svgs` — the raw dataset JSON, verbatim
//! - `GET /icon?i=<names>&t=<theme>&perline=<n>` — composite SVG
//! - `GET /health` — server status
//!
//! Configuration via environment: `ICONWEAVE_BIND` (default `0.0.0.0`),
//! `ICONWEAVE_PORT` (default `8601`), `ICONWEAVE_DATASET` (path to an
//! external dataset JSON; the bundled artifact is used when unset).

use iconweave::dataset::IconSet;
use iconweave::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("ICONWEAVE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("ICONWEAVE_PORT").unwrap_or_else(|_| "8601".to_string());
    let addr = format!("{bind}:{port}");

    let icons = match std::env::var("ICONWEAVE_DATASET") {
        Ok(path) => IconSet::load(std::path::Path::new(&path)).unwrap_or_else(|e| {
            tracing::error!("failed to load dataset from {path}: {e}");
            std::process::exit(1);
        }),
        Err(_) => IconSet::bundled().unwrap_or_else(|e| {
            tracing::error!("bundled dataset is invalid: {e}");
            std::process::exit(1);
        }),
    };

    tracing::info!(
        icons = icons.len(),
        names = icons.base_names().len(),
        "dataset loaded"
    );

    let app = server::router(icons);

    tracing::info!("iconweaved listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    // Serve with graceful shutdown on SIGTERM/SIGINT.
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let ctrl_c = tokio::signal::ctrl_c();
            #[cfg(unix)]
            {
                let mut sigterm =
                    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                        .expect("failed to register SIGTERM handler");
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            #[cfg(not(unix))]
            {
                ctrl_c.await.ok();
            }
            tracing::info!("iconweaved shutting down");
        })
        .await
        .expect("server error");
}
