//! Plagcheck HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use plagcheck::config::Config;
use plagcheck::constants::DEFAULT_PORT;
use plagcheck::corpus::{self, ReferenceCorpus};
use plagcheck::embedding::{EmbeddingProvider, MiniLmConfig, MiniLmEmbedder};
use plagcheck::gateway::{HandlerState, create_router_with_state};
use plagcheck::scoring::PlagiarismChecker;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    let config = Config::from_env()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.default_log_directive()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        threshold = config.threshold,
        "Plagcheck starting"
    );

    // `validate` guarantees a model path unless the stub was opted into.
    let minilm_config = match &config.model_path {
        Some(path) => MiniLmConfig::new(path.clone()),
        None => {
            tracing::warn!(
                "PLAGCHECK_STUB_EMBEDDER set, scoring with the stub embedder (not semantic)"
            );
            MiniLmConfig::stub()
        }
    };
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(MiniLmEmbedder::load(minilm_config)?);

    let entries = match &config.knowledge_base_path {
        Some(path) => corpus::load_entries(path)?,
        None => corpus::default_entries(),
    };

    tracing::info!(entries = entries.len(), "Embedding reference corpus...");
    let corpus = Arc::new(ReferenceCorpus::build(entries, embedder.as_ref())?);

    let checker =
        Arc::new(PlagiarismChecker::new(corpus, embedder).with_threshold(config.threshold));
    let state = HandlerState::new(checker, config.embed_timeout);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Plagcheck shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("PLAGCHECK_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    probe_health(&format!("http://127.0.0.1:{}/healthz", port)).await
}

/// Exit code for `--health-check`: 0 when `url` answers 2xx within a second, else 1.
async fn probe_health(url: &str) -> i32 {
    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn_stub_server() -> SocketAddr {
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(MiniLmEmbedder::stub().unwrap());
        let corpus = Arc::new(ReferenceCorpus::build_default(embedder.as_ref()).unwrap());
        let checker = Arc::new(PlagiarismChecker::new(corpus, embedder));
        let app = create_router_with_state(HandlerState::new(checker, Duration::from_secs(5)));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }

    #[tokio::test]
    async fn test_health_check_runs_inside_runtime() {
        let addr = spawn_stub_server().await;
        let code = probe_health(&format!("http://{}/healthz", addr)).await;
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_health_check_fails_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let code = probe_health(&format!("http://{}/healthz", addr)).await;
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_health_check_fails_on_error_status() {
        let addr = spawn_stub_server().await;
        let code = probe_health(&format!("http://{}/missing", addr)).await;
        assert_eq!(code, 1);
    }
}
