//! Scripted `LlmBackend` for unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionRequest, LlmBackend, LlmError};

pub struct ScriptedBackend {
    reply: Result<String, u16>,
    delay: Duration,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedBackend {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            ..Self::replying("")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}
