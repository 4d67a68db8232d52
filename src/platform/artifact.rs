// ABOUTME: Task artifact operations trait.
// ABOUTME: Load a candidate task definition and register new revisions.

use super::types::TaskArtifact;
use crate::types::TaskDefinitionRef;
use async_trait::async_trait;
use std::path::Path;

/// Task definition loading and registration.
#[async_trait]
pub trait ArtifactOps: Send + Sync {
    /// Load the candidate task definition from its external source.
    async fn load_candidate(&self, path: &Path) -> Result<TaskArtifact, ArtifactError>;

    /// Register a new task definition revision and return its reference.
    async fn register(&self, artifact: &TaskArtifact) -> Result<TaskDefinitionRef, ArtifactError>;
}

/// Errors from task artifact operations.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("task definition not found: {0}")]
    NotFound(String),

    #[error("invalid task definition: {0}")]
    Invalid(String),

    #[error("platform API error: {0}")]
    Api(String),
}
