// ABOUTME: Release backend operations trait for blue/green deployments.
// ABOUTME: Resolve deployment group lineage and create deployments.

use super::types::{DeploymentGroupRef, ReleaseRequest};
use async_trait::async_trait;

/// Blue/green release backend operations.
#[async_trait]
pub trait ReleaseOps: Send + Sync {
    /// Look up the deployment group of an existing deployment by its id.
    async fn deployment_group(
        &self,
        deployment_id: &str,
    ) -> Result<DeploymentGroupRef, ReleaseError>;

    /// Create a new deployment and return its id.
    ///
    /// Does not wait for the deployment to finish; tracking completion is
    /// the caller's concern.
    async fn create_deployment(&self, request: &ReleaseRequest) -> Result<String, ReleaseError>;
}

/// Errors from release backend operations.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("deployment not found: {0}")]
    DeploymentNotFound(String),

    #[error("release backend API error: {0}")]
    Api(String),
}
