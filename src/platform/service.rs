// ABOUTME: Service operations trait for the container platform.
// ABOUTME: Describe the running service and submit update requests.

use super::types::{ServiceSnapshot, ServiceUpdate};
use async_trait::async_trait;

/// Service status and mutation operations.
///
/// An implementation is bound to one cluster/service pair; the deploy core
/// never names the service in a call.
#[async_trait]
pub trait ServiceOps: Send + Sync {
    /// Fetch the current state of the service.
    async fn describe_service(&self) -> Result<ServiceSnapshot, ServiceError>;

    /// Submit an update request for the service.
    async fn update_service(&self, update: &ServiceUpdate) -> Result<(), ServiceError>;
}

/// Errors from service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service not found: {0}")]
    NotFound(String),

    #[error("platform API error: {0}")]
    Api(String),
}
