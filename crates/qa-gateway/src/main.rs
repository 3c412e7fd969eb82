use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use qa_agent::{KeywordResponder, Responder};
use qa_core::config::{QaConfig, CONFIG_ENV_VAR};

mod app;
mod http;

/// Keyword Q&A chat server.
#[derive(Debug, Parser)]
#[command(name = "qa-gateway", version)]
struct Cli {
    /// Config file (defaults to $QA_CONFIG, then ./qa-agent.toml).
    #[arg(long)]
    config: Option<String>,
    /// Override gateway.bind.
    #[arg(long)]
    bind: Option<String>,
    /// Override gateway.port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qa_gateway=info,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    // load config: --config > QA_CONFIG env > ./qa-agent.toml
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());
    let mut config = QaConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        warn!("Config load failed ({}), using defaults", e);
        QaConfig::default()
    });
    if let Some(bind) = cli.bind {
        config.gateway.bind = bind;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    let responder = KeywordResponder::default();
    info!(entries = responder.entry_count(), "knowledge base loaded");

    let addr: SocketAddr = format!("{}:{}", config.gateway.bind, config.gateway.port).parse()?;
    let state = Arc::new(app::AppState::new(config, Box::new(responder)));
    let router = app::build_router(state);

    info!("Q&A gateway listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Q&A gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
