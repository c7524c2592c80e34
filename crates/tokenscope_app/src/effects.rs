use std::sync::Arc;
use std::time::Duration;

use tokenscope_core::{Effect, Msg};
use tokenscope_engine::{EngineError, EngineEvent, EngineHandle, Estimator, TokenizeRequest};
use tokenscope_logging::scope_info;

/// Hands effects to the engine worker and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    delay: Duration,
}

impl EffectRunner {
    pub fn new(estimator: Arc<Estimator>, delay: Duration) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(estimator)?,
            delay,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleTokenize {
                    request_id,
                    text,
                    model,
                } => {
                    scope_info!(
                        "ScheduleTokenize request_id={} model={} text_len={}",
                        request_id,
                        model,
                        text.len()
                    );
                    self.engine.tokenize(TokenizeRequest {
                        request_id,
                        text,
                        model,
                        delay: self.delay,
                    });
                }
            }
        }
    }

    /// Blocks until the worker reports back; `None` if it has shut down.
    pub fn next_message(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TokenizeCompleted {
            request_id,
            model,
            tokens,
            stats,
        } => Msg::TokenizeCompleted {
            request_id,
            model,
            tokens,
            stats,
        },
    }
}
