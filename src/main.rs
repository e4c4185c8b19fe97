use std::sync::Arc;

use chat_gateway::{
    config::{Config, ConfigError},
    routes,
    services::completion::GroqClient,
    state::AppState,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(ConfigError::MissingApiKey) => {
            error!("GROQ_API_KEY is not set");
            eprintln!("⚠️ GROQ_API_KEY is not set!");
            eprintln!("Create a .env file in the project folder containing:");
            eprintln!("GROQ_API_KEY=your_api_key_here");
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = GroqClient::new(&cfg.base_url, &cfg.api_key, cfg.upstream_timeout)?;
    info!(model = %cfg.completion.model, base_url = %cfg.base_url, "completion client ready");

    let state = Arc::new(AppState::new(
        Arc::new(client),
        cfg.completion.clone(),
        cfg.static_dir.clone(),
    ));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    println!("🚀 Chat gateway running at http://localhost:{}", cfg.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
