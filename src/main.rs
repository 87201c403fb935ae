use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use talentform::config::Config;
use talentform::content::{ContentStore, SanityClient};
use talentform::email::{EmailDispatcher, ResendMailer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting Talentform");

    // Collaborators are built here, once, from explicit configuration.
    // Missing credentials disable the collaborator instead of failing at
    // first use deep inside a request.
    let content_store: Option<Arc<dyn ContentStore>> = config.sanity.as_ref().and_then(|sanity| {
        match SanityClient::new(sanity) {
            Ok(client) => {
                tracing::info!("Sanity content store configured (project {})", sanity.project_id);
                Some(Arc::new(client) as Arc<dyn ContentStore>)
            }
            Err(e) => {
                tracing::warn!("Sanity content store not available: {e}");
                None
            }
        }
    });

    let mailer: Option<Arc<dyn EmailDispatcher>> = config.resend.as_ref().and_then(|resend| {
        match ResendMailer::new(resend) {
            Ok(mailer) => {
                tracing::info!("Resend mailer configured");
                Some(Arc::new(mailer) as Arc<dyn EmailDispatcher>)
            }
            Err(e) => {
                tracing::warn!("Resend mailer not available: {e}");
                None
            }
        }
    });

    let addr = SocketAddr::new(config.host, config.port);
    let app = talentform::build_app(config, content_store, mailer);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
