// ABOUTME: Native rolling update strategy.
// ABOUTME: One update call with verbatim snapshot passthrough, then an optional wait.

use std::time::Duration;

use snafu::ResultExt;

use super::count::DesiredCount;
use super::error::{DeployError, UpdateServiceSnafu, WaitServiceStableSnafu};
use super::options::DeployOptions;
use super::run::DeployOutcome;
use crate::config::Config;
use crate::output::Observer;
use crate::platform::{ServiceOps, ServiceSnapshot, ServiceUpdate, StabilityWaiter};
use crate::types::TaskDefinitionRef;

/// How long to wait after submission before polling rollout status, so the
/// platform has recorded the new deployment.
pub(crate) const DELAY_FOR_SERVICE_CHANGED: Duration = Duration::from_secs(3);

/// Submit a rolling update and optionally wait for stability.
///
/// Network configuration, health check grace period, and platform version
/// are copied forward from the pre-deploy snapshot unchanged, so the
/// rollout cannot silently reset unrelated service properties.
pub(crate) async fn update<P>(
    platform: &P,
    config: &Config,
    snapshot: &ServiceSnapshot,
    task_definition: TaskDefinitionRef,
    count: DesiredCount,
    options: &DeployOptions,
    out: &dyn Observer,
) -> Result<DeployOutcome, DeployError>
where
    P: ServiceOps + StabilityWaiter,
{
    if options.force_new_deployment {
        out.progress("Updating service with force new deployment...");
    } else {
        out.progress("Updating service...");
    }

    let update = ServiceUpdate {
        task_definition: Some(task_definition),
        desired_count: count.for_update(),
        force_new_deployment: options.force_new_deployment,
        network_configuration: snapshot.network_configuration.clone(),
        health_check_grace_period_seconds: snapshot.health_check_grace_period_seconds,
        platform_version: snapshot.platform_version.clone(),
    };
    platform
        .update_service(&update)
        .await
        .context(UpdateServiceSnafu)?;

    if options.no_wait {
        out.success("Service is deployed.");
        return Ok(DeployOutcome::RollingStarted);
    }

    tokio::time::sleep(DELAY_FOR_SERVICE_CHANGED).await;
    platform
        .wait_for_stable(config.timeout)
        .await
        .context(WaitServiceStableSnafu)?;

    out.success("Service is stable now. Completed!");
    Ok(DeployOutcome::RollingStable)
}
