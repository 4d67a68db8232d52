// ABOUTME: Blue/green rollout through the external release backend.
// ABOUTME: Count alignment, deployment group lineage, AppSpec, submission, console URL.

use std::fmt;

use snafu::{OptionExt, ResultExt};

use super::count::DesiredCount;
use super::error::{
    CreateDeploymentSnafu, DeployError, DeploymentGroupSnafu, NoActiveTaskSetSnafu,
    UpdateServiceSnafu,
};
use super::options::DeployOptions;
use crate::config::Config;
use crate::output::Observer;
use crate::platform::{
    AutoRollbackConfiguration, DeploymentGroupRef, LoadBalancerBinding, ReleaseOps,
    ReleaseRequest, ServiceOps, ServiceSnapshot, ServiceUpdate,
};
use crate::types::TaskDefinitionRef;

/// A deployment accepted by the release backend.
///
/// Submission only: the backend shifts traffic on its own schedule, and
/// tracking completion is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedDeployment {
    pub id: String,
    pub console_url: String,
}

/// The AppSpec document submitted as the deployment revision.
///
/// Exactly two shapes exist, selected by load balancer presence; the text
/// is parsed by the release backend and must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseManifest(String);

impl ReleaseManifest {
    /// Build the manifest for a rollout to the given task definition.
    ///
    /// When the service has load balancer bindings the first one is named;
    /// additional bindings are not represented.
    pub fn for_rollout(
        task_definition: &TaskDefinitionRef,
        load_balancer: Option<&LoadBalancerBinding>,
    ) -> Self {
        let content = match load_balancer {
            Some(lb) => format!(
                r#"version: 1
Resources:
- TargetService:
    Type: AWS::ECS::Service
    Properties:
      TaskDefinition: "{task_definition}"
      LoadBalancerInfo:
        ContainerName: {name}
        ContainerPort: {port}
"#,
                name = lb.container_name,
                port = lb.container_port,
            ),
            None => format!(
                r#"version: 1
Resources:
- TargetService:
    Type: AWS::ECS::Service
    Properties:
      TaskDefinition: "{task_definition}"
"#,
            ),
        };
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployment console URL for a submitted deployment.
pub(crate) fn console_deployment_url(region: &str, deployment_id: &str) -> String {
    format!(
        "https://{region}.console.aws.amazon.com/codesuite/codedeploy/deployments/{deployment_id}?region={region}"
    )
}

/// Roll out through the release backend.
///
/// The desired count is aligned first when it differs from the snapshot
/// (the backend never changes replica counts itself); a failure there
/// aborts the deploy. The deployment group is inherited from the first
/// active task set's originating deployment.
pub(crate) async fn release<P>(
    platform: &P,
    config: &Config,
    snapshot: &ServiceSnapshot,
    task_definition: TaskDefinitionRef,
    count: DesiredCount,
    options: &DeployOptions,
    out: &dyn Observer,
) -> Result<SubmittedDeployment, DeployError>
where
    P: ServiceOps + ReleaseOps,
{
    if let Some(n) = count.for_update()
        && n != snapshot.desired_count
    {
        out.progress(&format!("updating desired count to {n}"));
        let update = ServiceUpdate {
            desired_count: Some(n),
            ..Default::default()
        };
        platform
            .update_service(&update)
            .await
            .context(UpdateServiceSnafu)?;
    }

    let group = deployment_group(platform, config, snapshot).await?;

    let manifest = ReleaseManifest::for_rollout(&task_definition, snapshot.load_balancers.first());
    out.detail(&format!("AppSpec content: {manifest}"));

    let events = options.rollback_event_list();
    let auto_rollback = (!events.is_empty()).then(|| AutoRollbackConfiguration {
        enabled: true,
        events,
    });

    let request = ReleaseRequest {
        group,
        appspec: manifest.as_str().to_string(),
        auto_rollback,
    };
    let id = platform
        .create_deployment(&request)
        .await
        .context(CreateDeploymentSnafu)?;

    let console_url = console_deployment_url(&config.region, &id);
    out.success(&format!("Deployment {id} is created on the release backend:"));
    out.progress(&console_url);

    Ok(SubmittedDeployment { id, console_url })
}

/// Resolve the deployment group from the first active task set's lineage.
async fn deployment_group<R: ReleaseOps>(
    platform: &R,
    config: &Config,
    snapshot: &ServiceSnapshot,
) -> Result<DeploymentGroupRef, DeployError> {
    let task_set = snapshot.task_sets.first().context(NoActiveTaskSetSnafu {
        service: config.service.as_str(),
    })?;
    platform
        .deployment_group(&task_set.external_id)
        .await
        .context(DeploymentGroupSnafu)
}
