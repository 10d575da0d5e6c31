//! Single-slot prophecy requests.
//!
//! The requester holds at most one in-flight completion task. Starting a
//! second request while the slot is occupied fails with
//! [`OracleError::RequestPending`] and leaves the running task alone. The
//! slot is freed when the result is collected.

use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;
use tracing::info;

use crate::client::CompletionClient;
use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::wire::CompletionRequest;

type Slot = JoinHandle<OracleResult<String>>;

/// Runs completion requests one at a time.
pub struct ProphecyRequester<C> {
    client: Arc<C>,
    config: OracleConfig,
    slot: Option<Slot>,
}

impl<C: CompletionClient> ProphecyRequester<C> {
    /// Create a requester with an empty slot.
    pub fn new(client: C, config: OracleConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
            slot: None,
        }
    }

    /// The configuration requests are built from.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Whether a request occupies the slot (running or finished but not
    /// yet collected).
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Start a request for `prompt` on a new tokio task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, prompt: &str) -> OracleResult<()> {
        if self.slot.is_some() {
            return Err(OracleError::RequestPending);
        }

        self.slot = Some(self.spawn(prompt));
        Ok(())
    }

    /// Wait for the pending request and free the slot. `None` if the slot
    /// was empty.
    pub async fn finish(&mut self) -> Option<OracleResult<String>> {
        let handle = self.slot.take()?;
        Some(join(handle).await)
    }

    /// Collect the pending request if it has already completed, without
    /// waiting. `None` if the slot is empty or the request is still running.
    pub fn try_finish(&mut self) -> Option<OracleResult<String>> {
        let handle = self.slot.as_mut()?;
        if !handle.is_finished() {
            return None;
        }
        let joined = handle.now_or_never()?;
        self.slot = None;
        Some(joined.unwrap_or_else(|e| Err(OracleError::Task(e.to_string()))))
    }

    /// Run a request to completion. Fails with
    /// [`OracleError::RequestPending`] if the slot is occupied.
    pub async fn request(&mut self, prompt: &str) -> OracleResult<String> {
        if self.slot.is_some() {
            return Err(OracleError::RequestPending);
        }
        join(self.spawn(prompt)).await
    }

    fn spawn(&self, prompt: &str) -> Slot {
        let request = CompletionRequest::from_prompt(&self.config, prompt);
        info!(model = %request.model, "requesting prophecy");

        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let response = client.complete(request).await?;
            Ok(response.into_prophecy())
        })
    }
}

async fn join(handle: Slot) -> OracleResult<String> {
    match handle.await {
        Ok(result) => result,
        Err(e) => Err(OracleError::Task(e.to_string())),
    }
}
