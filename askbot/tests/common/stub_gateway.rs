//! In-process [`model_gateway::Gateway`] implementations.

use async_trait::async_trait;
use model_gateway::{ChatOutcome, ConversationHistory, Gateway, GatewayError, ModelInput, Turn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Deterministic gateway: answers `"answer #{n} to {query}"` where n is the history length it saw,
/// records every history it was given and rejects non-text input.
#[derive(Default)]
pub struct StubGateway {
    seen: Mutex<Vec<ConversationHistory>>,
    delay: Option<Duration>,
    barrier: Option<Arc<Barrier>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `delay` inside each call.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Each call waits on `barrier` before answering.
    pub fn with_barrier(barrier: Arc<Barrier>) -> Self {
        Self {
            barrier: Some(barrier),
            ..Self::default()
        }
    }

    pub fn seen(&self) -> Vec<ConversationHistory> {
        self.seen.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Highest number of calls that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for StubGateway {
    async fn chat(
        &self,
        input: ModelInput,
        history: &ConversationHistory,
    ) -> Result<ChatOutcome, GatewayError> {
        let query = match input {
            ModelInput::Text(text) => text,
            ModelInput::Unsupported { kind } => {
                return Err(GatewayError::UnsupportedContentKind(kind))
            }
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.seen.lock().unwrap().push(history.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let response = format!("answer #{} to {}", history.len(), query);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(ChatOutcome {
            history: history.clone().with_turn(Turn::new(query, response.clone())),
            response,
        })
    }
}

/// Always fails with a request error.
pub struct FailingGateway;

#[async_trait]
impl Gateway for FailingGateway {
    async fn chat(
        &self,
        _input: ModelInput,
        _history: &ConversationHistory,
    ) -> Result<ChatOutcome, GatewayError> {
        Err(GatewayError::Request("connection refused".to_string()))
    }
}
