// ABOUTME: Shared test fixtures: a recording mock platform and observer.
// ABOUTME: Records every collaborator call so tests can assert sequences and payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::time::Duration;

use relevo::output::Observer;
use relevo::platform::{
    ArtifactError, ArtifactOps, AutoScalingError, AutoScalingOps, DeploymentGroupRef,
    LoadBalancerBinding, ReleaseError, ReleaseOps, ReleaseRequest, SchedulingMode, ServiceError,
    ServiceOps, ServiceSnapshot, ServiceUpdate, StabilityWaiter, TaskArtifact, TaskSetRef,
    WaitError,
};
use relevo::types::TaskDefinitionRef;

/// Every call a deploy can make, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    DescribeService,
    UpdateService(ServiceUpdate),
    LoadCandidate(PathBuf),
    Register(TaskArtifact),
    SuspendAutoScaling,
    ResumeAutoScaling,
    DeploymentGroup(String),
    CreateDeployment(ReleaseRequest),
    WaitForStable(Duration),
}

impl PlatformCall {
    /// Whether this call mutates remote state.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            PlatformCall::UpdateService(_)
                | PlatformCall::Register(_)
                | PlatformCall::SuspendAutoScaling
                | PlatformCall::ResumeAutoScaling
                | PlatformCall::CreateDeployment(_)
        )
    }
}

/// A platform double that records calls and answers from canned state.
pub struct MockPlatform {
    pub snapshot: ServiceSnapshot,
    pub registered: TaskDefinitionRef,
    pub group: DeploymentGroupRef,
    pub deployment_id: String,
    /// Fail the next (and every) update_service call.
    pub fail_update: bool,
    /// Fail wait_for_stable with a timeout.
    pub fail_wait: bool,
    pub calls: Mutex<Vec<PlatformCall>>,
}

impl MockPlatform {
    pub fn new(snapshot: ServiceSnapshot) -> Self {
        Self {
            snapshot,
            registered: TaskDefinitionRef::new("web:43").unwrap(),
            group: DeploymentGroupRef {
                application_name: "AppECS-default-web".to_string(),
                deployment_group_name: "DgpECS-default-web".to_string(),
                deployment_config_name: Some("CodeDeployDefault.ECSAllAtOnce".to_string()),
            },
            deployment_id: "d-ABCDEF123".to_string(),
            fail_update: false,
            fail_wait: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().push(call);
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().clone()
    }

    pub fn mutating_calls(&self) -> Vec<PlatformCall> {
        self.calls()
            .into_iter()
            .filter(PlatformCall::is_mutating)
            .collect()
    }

    pub fn service_updates(&self) -> Vec<ServiceUpdate> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::UpdateService(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    pub fn created_deployments(&self) -> Vec<ReleaseRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::CreateDeployment(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ServiceOps for MockPlatform {
    async fn describe_service(&self) -> Result<ServiceSnapshot, ServiceError> {
        self.record(PlatformCall::DescribeService);
        Ok(self.snapshot.clone())
    }

    async fn update_service(&self, update: &ServiceUpdate) -> Result<(), ServiceError> {
        self.record(PlatformCall::UpdateService(update.clone()));
        if self.fail_update {
            return Err(ServiceError::Api("update rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArtifactOps for MockPlatform {
    async fn load_candidate(&self, path: &Path) -> Result<TaskArtifact, ArtifactError> {
        self.record(PlatformCall::LoadCandidate(path.to_path_buf()));
        Ok(TaskArtifact {
            family: "web".to_string(),
            body: serde_json::json!({"family": "web", "containerDefinitions": []}),
        })
    }

    async fn register(&self, artifact: &TaskArtifact) -> Result<TaskDefinitionRef, ArtifactError> {
        self.record(PlatformCall::Register(artifact.clone()));
        Ok(self.registered.clone())
    }
}

#[async_trait]
impl ReleaseOps for MockPlatform {
    async fn deployment_group(
        &self,
        deployment_id: &str,
    ) -> Result<DeploymentGroupRef, ReleaseError> {
        self.record(PlatformCall::DeploymentGroup(deployment_id.to_string()));
        Ok(self.group.clone())
    }

    async fn create_deployment(&self, request: &ReleaseRequest) -> Result<String, ReleaseError> {
        self.record(PlatformCall::CreateDeployment(request.clone()));
        Ok(self.deployment_id.clone())
    }
}

#[async_trait]
impl AutoScalingOps for MockPlatform {
    async fn suspend(&self) -> Result<(), AutoScalingError> {
        self.record(PlatformCall::SuspendAutoScaling);
        Ok(())
    }

    async fn resume(&self) -> Result<(), AutoScalingError> {
        self.record(PlatformCall::ResumeAutoScaling);
        Ok(())
    }
}

#[async_trait]
impl StabilityWaiter for MockPlatform {
    async fn wait_for_stable(&self, timeout: Duration) -> Result<(), WaitError> {
        self.record(PlatformCall::WaitForStable(timeout));
        if self.fail_wait {
            return Err(WaitError::Timeout(timeout));
        }
        Ok(())
    }
}

/// Observer that records messages instead of printing.
#[derive(Default)]
pub struct RecordingObserver {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Observer for RecordingObserver {
    fn progress(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }

    fn detail(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

/// Notifier that records the URLs it was handed.
#[derive(Default)]
pub struct RecordingNotifier {
    pub urls: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

impl relevo::deploy::ReleaseNotifier for RecordingNotifier {
    fn deployment_created(&self, console_url: &str) -> Result<(), relevo::deploy::NotifyError> {
        self.urls.lock().push(console_url.to_string());
        Ok(())
    }
}

/// Notifier that always fails, for best-effort semantics tests.
pub struct FailingNotifier;

impl relevo::deploy::ReleaseNotifier for FailingNotifier {
    fn deployment_created(&self, _console_url: &str) -> Result<(), relevo::deploy::NotifyError> {
        Err(relevo::deploy::NotifyError("no viewer available".to_string()))
    }
}

/// A replica-mode snapshot with a native controller.
pub fn rolling_snapshot(desired_count: u32) -> ServiceSnapshot {
    let mut snapshot = ServiceSnapshot::template();
    snapshot.desired_count = desired_count;
    snapshot
}

/// A snapshot managed by the release backend, with one active task set.
pub fn blue_green_snapshot(desired_count: u32) -> ServiceSnapshot {
    let mut snapshot = ServiceSnapshot::template();
    snapshot.desired_count = desired_count;
    snapshot.deployment_controller = Some("CODE_DEPLOY".to_string());
    snapshot.task_sets = vec![TaskSetRef {
        id: "ecs-svc/1234567890123456789".to_string(),
        external_id: "d-PREVIOUS1".to_string(),
    }];
    snapshot
}

/// Attach a single load balancer binding to a snapshot.
pub fn with_load_balancer(
    mut snapshot: ServiceSnapshot,
    container_name: &str,
    container_port: u16,
) -> ServiceSnapshot {
    snapshot.load_balancers = vec![LoadBalancerBinding {
        target_group_arn: Some(
            "arn:aws:elasticloadbalancing:ap-northeast-1:123456789012:targetgroup/web/abc"
                .to_string(),
        ),
        container_name: container_name.to_string(),
        container_port,
    }];
    snapshot
}

/// Daemon scheduling variant of the rolling snapshot.
pub fn daemon_snapshot() -> ServiceSnapshot {
    let mut snapshot = ServiceSnapshot::template();
    snapshot.scheduling = SchedulingMode::Daemon;
    snapshot
}
