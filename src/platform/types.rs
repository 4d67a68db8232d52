// ABOUTME: Shared data types crossing the platform collaborator seams.
// ABOUTME: Snapshot and request shapes mirror the platform API fields they carry.

use crate::types::TaskDefinitionRef;
use std::fmt;

/// How the platform schedules tasks for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingMode {
    /// A fixed desired count, placed by the service scheduler.
    Replica,
    /// One task per eligible container instance; the scheduler owns the count.
    Daemon,
}

/// Immutable view of a service, fetched once per deploy.
///
/// Never patched in place: if fresher state is needed the service is
/// described again.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSnapshot {
    pub desired_count: u32,
    pub scheduling: SchedulingMode,
    /// The task definition the service currently runs.
    pub task_definition: TaskDefinitionRef,
    /// Deployment controller type as reported by the platform
    /// (`ECS`, `CODE_DEPLOY`, ...). `None` when the service predates
    /// deployment controllers.
    pub deployment_controller: Option<String>,
    pub network_configuration: Option<NetworkConfiguration>,
    pub health_check_grace_period_seconds: Option<u32>,
    pub platform_version: Option<String>,
    /// Load balancer bindings, in the order the platform reports them.
    pub load_balancers: Vec<LoadBalancerBinding>,
    /// Active task sets, in the order the platform reports them.
    pub task_sets: Vec<TaskSetRef>,
}

impl ServiceSnapshot {
    /// A minimal replica-mode snapshot for tests.
    pub fn template() -> Self {
        Self {
            desired_count: 1,
            scheduling: SchedulingMode::Replica,
            task_definition: TaskDefinitionRef::new("web:1")
                .expect("template task definition is valid"),
            deployment_controller: None,
            network_configuration: None,
            health_check_grace_period_seconds: None,
            platform_version: None,
            load_balancers: Vec::new(),
            task_sets: Vec::new(),
        }
    }
}

/// awsvpc network configuration, copied forward verbatim on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfiguration {
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
    pub assign_public_ip: Option<bool>,
}

/// A service's binding to one load balancer target group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerBinding {
    pub target_group_arn: Option<String>,
    pub container_name: String,
    pub container_port: u16,
}

/// An active task set and the external deployment that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSetRef {
    pub id: String,
    /// Identifier of the release-backend deployment this task set came from.
    pub external_id: String,
}

/// One service update request.
///
/// Fields left `None` are omitted from the call, so the platform keeps
/// its current values for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceUpdate {
    pub task_definition: Option<TaskDefinitionRef>,
    pub desired_count: Option<u32>,
    pub force_new_deployment: bool,
    pub network_configuration: Option<NetworkConfiguration>,
    pub health_check_grace_period_seconds: Option<u32>,
    pub platform_version: Option<String>,
}

/// Application, group, and config a blue/green deployment targets.
///
/// Inherited from the deployment that created the currently active task
/// set, never configured independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentGroupRef {
    pub application_name: String,
    pub deployment_group_name: String,
    pub deployment_config_name: Option<String>,
}

/// Automatic rollback settings attached to a blue/green deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoRollbackConfiguration {
    pub enabled: bool,
    pub events: Vec<String>,
}

/// A deployment creation request for the release backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRequest {
    pub group: DeploymentGroupRef,
    /// AppSpec content submitted as the deployment revision.
    pub appspec: String,
    pub auto_rollback: Option<AutoRollbackConfiguration>,
}

/// A task definition loaded from its external source, not yet registered.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskArtifact {
    pub family: String,
    pub body: serde_json::Value,
}

impl fmt::Display for TaskArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(&self.body) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => write!(f, "{}", self.body),
        }
    }
}
