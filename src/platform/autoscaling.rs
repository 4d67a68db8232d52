// ABOUTME: Auto scaling operations trait.
// ABOUTME: Idempotent suspend and resume of external scaling activity.

use async_trait::async_trait;

/// External auto scaling control for the service.
///
/// Both operations are idempotent: suspending an already-suspended target
/// (or resuming an active one) succeeds without effect.
#[async_trait]
pub trait AutoScalingOps: Send + Sync {
    /// Suspend scaling activity for the service.
    async fn suspend(&self) -> Result<(), AutoScalingError>;

    /// Resume scaling activity for the service.
    async fn resume(&self) -> Result<(), AutoScalingError>;
}

/// Error from auto scaling operations.
#[derive(Debug, thiserror::Error)]
#[error("auto scaling API error: {0}")]
pub struct AutoScalingError(pub String);
