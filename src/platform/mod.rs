// ABOUTME: Collaborator seams for the container platform and release backend.
// ABOUTME: Interface-only: real API clients are constructed by the embedder.

mod artifact;
mod autoscaling;
mod release;
mod service;
mod types;
mod waiter;

pub use artifact::{ArtifactError, ArtifactOps};
pub use autoscaling::{AutoScalingError, AutoScalingOps};
pub use release::{ReleaseError, ReleaseOps};
pub use service::{ServiceError, ServiceOps};
pub use types::{
    AutoRollbackConfiguration, DeploymentGroupRef, LoadBalancerBinding, NetworkConfiguration,
    ReleaseRequest, SchedulingMode, ServiceSnapshot, ServiceUpdate, TaskArtifact, TaskSetRef,
};
pub use waiter::{StabilityWaiter, WaitError};

/// Every capability a full deploy can touch.
///
/// Auto-implemented for any type providing all the individual seams, so a
/// single client struct can back an entire deploy.
pub trait Platform:
    ServiceOps + ArtifactOps + ReleaseOps + AutoScalingOps + StabilityWaiter
{
}

impl<T> Platform for T where
    T: ServiceOps + ArtifactOps + ReleaseOps + AutoScalingOps + StabilityWaiter
{
}
