// ABOUTME: Rollout strategy selection from the service's deployment controller.
// ABOUTME: Selected exactly once per deploy, before any mutating call.

use super::error::{DeployError, UnsupportedControllerSnafu};
use crate::platform::ServiceSnapshot;

/// Strategy for rolling out a new task definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutStrategy {
    /// Native rolling update: the platform replaces tasks in place.
    Rolling,

    /// Blue/green release through the external release backend, which
    /// shifts traffic between task sets.
    BlueGreen,
}

impl RolloutStrategy {
    /// Select the strategy from the service's deployment controller.
    ///
    /// An absent controller and the native `ECS` controller both roll; the
    /// `CODE_DEPLOY` controller goes blue/green. Any other controller type
    /// is rejected before anything is mutated.
    pub fn for_service(snapshot: &ServiceSnapshot) -> Result<Self, DeployError> {
        match snapshot.deployment_controller.as_deref() {
            None | Some("ECS") => Ok(RolloutStrategy::Rolling),
            Some("CODE_DEPLOY") => Ok(RolloutStrategy::BlueGreen),
            Some(other) => UnsupportedControllerSnafu { controller: other }.fail(),
        }
    }
}
