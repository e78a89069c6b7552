//! Wildlife injury report webhook - Entry point.

use report_store::{MemoryReportStore, ReportStore, SqliteReportStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twilio_client::TwilioClient;
use wildlife_webhook::{
    api::{create_router, AppState},
    config::Config,
    Ingestor, WhatsAppNotifier,
};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting wildlife report webhook");

    // Initialize storage
    let store: Arc<dyn ReportStore> = if config.storage.persist {
        info!(path = %config.storage.path.display(), "Using SQLite report store");
        Arc::new(SqliteReportStore::new(config.storage.path.clone()))
    } else {
        info!("Persistence disabled, using in-memory storage");
        Arc::new(MemoryReportStore::new())
    };

    if let Err(e) = store.initialize().await {
        error!("Failed to initialize report store: {}", e);
        std::process::exit(1);
    }

    // Initialize Twilio client
    if !config.twilio.has_credentials() {
        warn!("Twilio credentials not configured, confirmations will fail");
    }

    let twilio = match TwilioClient::new(
        &config.twilio.api_url,
        &config.twilio.account_sid,
        &config.twilio.auth_token,
        config.twilio.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Twilio client: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = WhatsAppNotifier::new(twilio, &config.twilio.sender);
    info!(sender = %notifier.sender(), "WhatsApp confirmations enabled");

    // Create application state
    let state = AppState::new(Ingestor::new(store, Arc::new(notifier)));
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown complete");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
