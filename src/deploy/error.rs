// ABOUTME: Unified deploy error with SNAFU pattern.
// ABOUTME: Wraps collaborator errors with the failing stage for programmatic handling.

use snafu::Snafu;

use crate::platform::{ArtifactError, AutoScalingError, ReleaseError, ServiceError, WaitError};

/// Unified error for a deploy run.
///
/// Validation variants are raised before any mutating call; remote variants
/// wrap a collaborator failure with the stage that issued it. A remote
/// failure aborts remaining steps but never compensates mutations already
/// accepted in the same run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DeployError {
    #[snafu(display("could not deploy a service using deployment controller type {controller}"))]
    UnsupportedController { controller: String },

    #[snafu(display(
        "no active task set in service {service}; it has never been deployed through the release backend"
    ))]
    NoActiveTaskSet { service: String },

    #[snafu(display("failed to describe service status: {source}"))]
    DescribeService { source: ServiceError },

    #[snafu(display("failed to load task definition: {source}"))]
    LoadTaskDefinition { source: ArtifactError },

    #[snafu(display("failed to register task definition: {source}"))]
    RegisterTaskDefinition { source: ArtifactError },

    #[snafu(display("failed to update auto scaling state: {source}"))]
    AutoScaling { source: AutoScalingError },

    #[snafu(display("failed to update service: {source}"))]
    UpdateService { source: ServiceError },

    #[snafu(display("failed to find deployment group: {source}"))]
    DeploymentGroup { source: ReleaseError },

    #[snafu(display("failed to create deployment: {source}"))]
    CreateDeployment { source: ReleaseError },

    #[snafu(display("failed to wait service stable: {source}"))]
    WaitServiceStable { source: WaitError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    /// Rejected before any mutating call was issued.
    Validation,
    /// A remote call failed; earlier mutations in the run may have landed.
    Remote,
    /// The rollout was submitted but stability polling failed or timed out.
    Wait,
}

impl DeployError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::UnsupportedController { .. } | DeployError::NoActiveTaskSet { .. } => {
                DeployErrorKind::Validation
            }
            DeployError::WaitServiceStable { .. } => DeployErrorKind::Wait,
            DeployError::DescribeService { .. }
            | DeployError::LoadTaskDefinition { .. }
            | DeployError::RegisterTaskDefinition { .. }
            | DeployError::AutoScaling { .. }
            | DeployError::UpdateService { .. }
            | DeployError::DeploymentGroup { .. }
            | DeployError::CreateDeployment { .. } => DeployErrorKind::Remote,
        }
    }
}
