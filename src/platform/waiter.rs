// ABOUTME: Stability waiter trait.
// ABOUTME: Blocks until the service reports stable after a rollout.

use async_trait::async_trait;
use std::time::Duration;

/// Post-rollout stability polling.
///
/// The future is cancellable; dropping it abandons the wait without
/// affecting the submitted rollout.
#[async_trait]
pub trait StabilityWaiter: Send + Sync {
    /// Block until the service reports stable, or fail on timeout.
    async fn wait_for_stable(&self, timeout: Duration) -> Result<(), WaitError>;
}

/// Errors from stability waiting.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error("service did not stabilize within {0:?}")]
    Timeout(Duration),

    #[error("stability check failed: {0}")]
    Failed(String),
}
