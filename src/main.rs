//! Request-shape service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::resolve ──▶ negotiation::negotiate
//!                          │                 │                      │
//!                          │          KnownResourceNames      Accept / Content-Type
//!                          │            (ArcSwap, reloaded
//!                          │             by config::watcher)
//!                          ▼
//!     ◀────────────── http::response (shape as JSON, or 400)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use request_shape::config::{load_config, ShapeConfig, VocabularyWatcher};
use request_shape::http::HttpServer;
use request_shape::lifecycle::{signals, Shutdown};
use request_shape::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "request-shape")]
#[command(about = "Resolve request paths into resource maps and negotiate formats", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Watch the configuration file and reload the vocabulary on change.
    #[arg(long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ShapeConfig::default(),
    };

    logging::init(&config.observability);
    tracing::info!("request-shape v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        context_path = %config.resolver.context_path,
        resource_names = config.resolver.resource_names.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Arc::new(Shutdown::new());
    signals::spawn_signal_listener(shutdown.clone());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);

    // Keep the watcher alive for the lifetime of the server.
    let _watcher = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (watcher, mut updates) = VocabularyWatcher::new(path, server.config().resolver.clone());
            let handle = watcher.spawn()?;
            let vocabulary = server.vocabulary();
            let stop = shutdown.subscribe();
            tokio::spawn(async move {
                let stopped = stop.recv();
                tokio::pin!(stopped);
                loop {
                    tokio::select! {
                        _ = &mut stopped => break,
                        changed = updates.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            let resolver = updates.borrow_and_update().clone();
                            vocabulary.replace(&resolver);
                        }
                    }
                }
            });
            Some(handle)
        }
        _ => None,
    };

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
