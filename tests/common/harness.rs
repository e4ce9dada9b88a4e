//! Test server harness.

use plagcheck::constants::DEFAULT_PLAGIARISM_THRESHOLD;
use plagcheck::corpus::{ReferenceCorpus, default_entries};
use plagcheck::embedding::{EmbeddingProvider, MiniLmEmbedder};
use plagcheck::gateway::{HandlerState, create_router_with_state};
use plagcheck::scoring::PlagiarismChecker;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub threshold: f64,
    pub embed_timeout: Duration,
    pub knowledge_base: Option<Vec<String>>,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PLAGIARISM_THRESHOLD,
            embed_timeout: Duration::from_secs(5),
            knowledge_base: None,
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server on an ephemeral port backed by the stub embedder.
///
/// No model files are needed. Identical sentences score 100 and sentences that
/// share no content words with the knowledge base score near 0.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(
        MiniLmEmbedder::stub().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
    );

    let entries = config.knowledge_base.unwrap_or_else(default_entries);
    let corpus = ReferenceCorpus::build(entries, embedder.as_ref())
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let checker = PlagiarismChecker::new(Arc::new(corpus), embedder)
        .with_threshold(config.threshold);
    let state = HandlerState::new(Arc::new(checker), config.embed_timeout);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(
        addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
