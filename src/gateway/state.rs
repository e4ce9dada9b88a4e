use std::sync::Arc;
use std::time::Duration;

use crate::scoring::PlagiarismChecker;

#[derive(Debug, Clone)]
pub struct HandlerState {
    pub checker: Arc<PlagiarismChecker>,

    pub embed_timeout: Duration,
}

impl HandlerState {
    pub fn new(checker: Arc<PlagiarismChecker>, embed_timeout: Duration) -> Self {
        Self {
            checker,
            embed_timeout,
        }
    }

    pub fn embedder_mode(&self) -> &'static str {
        if self.checker.scorer().provider().is_stub() {
            "stub"
        } else {
            "model"
        }
    }
}
