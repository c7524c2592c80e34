use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokenscope_logging::{scope_debug, scope_trace};

use crate::{EngineError, EngineEvent, Estimator, ModelKey, RequestId};

/// One tokenize job; `delay` elapses before any work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeRequest {
    pub request_id: RequestId,
    pub text: String,
    pub model: ModelKey,
    pub delay: Duration,
}

enum EngineCommand {
    Tokenize(TokenizeRequest),
}

/// Background worker that runs tokenize requests after their artificial delay.
///
/// Requests are not serialized: each one gets its own task, so completions
/// arrive in timer order. Callers tag requests and discard stale results.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(estimator: Arc<Estimator>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;

        thread::Builder::new()
            .name("tokenscope-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let estimator = estimator.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(estimator.as_ref(), command, event_tx).await;
                    });
                }
                scope_trace!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn tokenize(&self, request: TokenizeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Tokenize(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    estimator: &Estimator,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Tokenize(request) => {
            scope_debug!(
                "tokenize request_id={} model={} chars={} delay_ms={}",
                request.request_id,
                request.model,
                request.text.chars().count(),
                request.delay.as_millis()
            );
            if !request.delay.is_zero() {
                tokio::time::sleep(request.delay).await;
            }
            let tokens = estimator.tokenize_all(&request.text, request.model);
            let stats = estimator.summarize(&request.text, &tokens, request.model);
            scope_debug!(
                "tokenize done request_id={} tokens={}",
                request.request_id,
                tokens.len()
            );
            let _ = event_tx.send(EngineEvent::TokenizeCompleted {
                request_id: request.request_id,
                model: request.model,
                tokens,
                stats,
            });
        }
    }
}
