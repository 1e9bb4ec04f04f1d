//! Furnish Quote server entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use furnish_quote::adapters::catalog::{load_catalog_file, InMemoryCatalog};
use furnish_quote::adapters::export::LocalQuoteExporter;
use furnish_quote::adapters::http::{api_router, AppServices};
use furnish_quote::adapters::storage::InMemorySessionStore;
use furnish_quote::config::{AppConfig, ExportConfig, LogFormat, ServerConfig};
use furnish_quote::ports::{CatalogProvider, QuoteExporter, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Furnish Quote"
    );

    let catalog: Arc<dyn CatalogProvider> = match &config.catalog.path {
        Some(path) => Arc::new(load_catalog_file(path).await?),
        None => {
            tracing::info!("No catalog file configured, using the built-in catalog");
            Arc::new(InMemoryCatalog::seeded())
        }
    };
    let exporter: Arc<dyn QuoteExporter> = Arc::new(build_exporter(&config.export));
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let services = AppServices {
        catalog,
        exporter,
        sessions,
        download_base: config.export.download_base.clone(),
    };
    let app = api_router(services, &config.server);

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn build_exporter(config: &ExportConfig) -> LocalQuoteExporter {
    let exporter = LocalQuoteExporter::new(&config.output_dir)
        .with_format(config.format)
        .with_pdf_timeout(config.pdf_timeout_secs);
    match &config.pandoc_path {
        Some(path) => exporter.with_pandoc_path(path),
        None => exporter,
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(server: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let fmt_layer = match server.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Plain => tracing_subscriber::fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
