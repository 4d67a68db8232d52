// ABOUTME: The single-deploy orchestration sequence.
// ABOUTME: Resolve count, stage artifact, dry-run gate, auto scaling, dispatch.

use snafu::ResultExt;

use super::artifact::{StagedArtifact, stage_task_definition};
use super::blue_green::{self, SubmittedDeployment};
use super::count::DesiredCount;
use super::error::{AutoScalingSnafu, DeployError, DescribeServiceSnafu};
use super::notify::ReleaseNotifier;
use super::options::{AutoScalingAction, DeployOptions, RequestedCount};
use super::rolling;
use super::strategy::RolloutStrategy;
use crate::config::Config;
use crate::diagnostics::{Diagnostics, Warning};
use crate::output::Observer;
use crate::platform::{Platform, SchedulingMode};

/// How a deploy run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Dry run finished; no mutating call was issued.
    DryRun,
    /// Rolling update submitted; stability was not awaited.
    RollingStarted,
    /// Rolling update submitted and the service reported stable.
    RollingStable,
    /// Blue/green deployment handed to the release backend.
    Released(SubmittedDeployment),
}

/// Run one deploy: roll the configured service onto a new task definition.
///
/// The sequence suspends only at remote calls and at the post-submission
/// settle delay. Cancel by dropping the future (race it against a signal
/// with `tokio::select!`); remote mutations already accepted are never
/// retried or reversed, so remediation after cancellation is the caller's
/// responsibility.
pub async fn run<P: Platform>(
    platform: &P,
    config: &Config,
    options: &DeployOptions,
    out: &dyn Observer,
    notifier: Option<&dyn ReleaseNotifier>,
    diag: &mut Diagnostics,
) -> Result<DeployOutcome, DeployError> {
    out.progress("Starting deploy");

    let snapshot = platform
        .describe_service()
        .await
        .context(DescribeServiceSnafu)?;

    // Chosen once, and validated before anything is staged or mutated;
    // the branch itself runs last because both branches consume the
    // resolved count and the staged reference.
    let strategy = RolloutStrategy::for_service(&snapshot)?;

    if snapshot.scheduling == SchedulingMode::Daemon
        && let RequestedCount::Exact(n) = options.desired_count
    {
        diag.warn(Warning::count_ignored(format!(
            "requested count {n} ignored: the scheduler owns placement for daemon services"
        )));
    }
    let count =
        DesiredCount::resolve(snapshot.scheduling, options.desired_count, snapshot.desired_count);

    let staged = stage_task_definition(platform, config, options, &snapshot, out).await?;

    if let DesiredCount::Fixed(n) = count {
        out.progress(&format!("desired count: {n}"));
    }

    let task_definition = match staged {
        // The stager withholds a reference only in dry-run mode.
        StagedArtifact::Preview => {
            out.success("DRY RUN OK");
            return Ok(DeployOutcome::DryRun);
        }
        StagedArtifact::Reused(td) | StagedArtifact::Registered(td) => td,
    };
    if options.dry_run {
        out.success("DRY RUN OK");
        return Ok(DeployOutcome::DryRun);
    }

    // Only when explicitly requested; unset leaves external scaling alone.
    match options.auto_scaling_action() {
        Some(AutoScalingAction::Suspend) => {
            out.progress("Suspending auto scaling");
            platform.suspend().await.context(AutoScalingSnafu)?;
        }
        Some(AutoScalingAction::Resume) => {
            out.progress("Resuming auto scaling");
            platform.resume().await.context(AutoScalingSnafu)?;
        }
        None => {}
    }

    match strategy {
        RolloutStrategy::Rolling => {
            rolling::update(
                platform,
                config,
                &snapshot,
                task_definition,
                count,
                options,
                out,
            )
            .await
        }
        RolloutStrategy::BlueGreen => {
            let submitted = blue_green::release(
                platform,
                config,
                &snapshot,
                task_definition,
                count,
                options,
                out,
            )
            .await?;

            // Best effort only; the deployment outcome is already decided.
            if let Some(notifier) = notifier
                && let Err(e) = notifier.deployment_created(&submitted.console_url)
            {
                diag.warn(Warning::notify_failed(e.to_string()));
            }

            Ok(DeployOutcome::Released(submitted))
        }
    }
}
