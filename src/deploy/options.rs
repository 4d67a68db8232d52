// ABOUTME: Deploy options supplied by the embedding CLI.
// ABOUTME: clap derive so embedders mount the exact flag surface.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Options for one deploy invocation. Immutable for the run.
#[derive(Debug, Clone, clap::Args)]
pub struct DeployOptions {
    /// Desired task count, or "keep" to preserve the current count.
    #[arg(long = "tasks", default_value_t = RequestedCount::Keep)]
    pub desired_count: RequestedCount,

    /// Reuse the currently deployed task definition instead of
    /// registering a new revision.
    #[arg(long)]
    pub skip_task_definition: bool,

    /// Resolve and report everything without issuing any mutating call.
    #[arg(long)]
    pub dry_run: bool,

    /// Force a new rollout even if the task definition is unchanged.
    #[arg(long)]
    pub force_new_deployment: bool,

    /// Return as soon as the rollout is submitted, without waiting for
    /// the service to stabilize.
    #[arg(long)]
    pub no_wait: bool,

    /// Comma-separated events that trigger automatic rollback of a
    /// blue/green deployment (e.g. DEPLOYMENT_FAILURE).
    #[arg(long, default_value = "")]
    pub rollback_events: String,

    /// Suspend auto scaling before deploying.
    #[arg(long, conflicts_with = "resume_auto_scaling")]
    pub suspend_auto_scaling: bool,

    /// Resume auto scaling before deploying.
    #[arg(long, conflicts_with = "suspend_auto_scaling")]
    pub resume_auto_scaling: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            desired_count: RequestedCount::Keep,
            skip_task_definition: false,
            dry_run: false,
            force_new_deployment: false,
            no_wait: false,
            rollback_events: String::new(),
            suspend_auto_scaling: false,
            resume_auto_scaling: false,
        }
    }
}

impl DeployOptions {
    /// The requested auto scaling coordination step, if any.
    ///
    /// `None` means no flag was given: external scaling state is left as-is.
    pub fn auto_scaling_action(&self) -> Option<AutoScalingAction> {
        if self.suspend_auto_scaling {
            Some(AutoScalingAction::Suspend)
        } else if self.resume_auto_scaling {
            Some(AutoScalingAction::Resume)
        } else {
            None
        }
    }

    /// Rollback trigger events: comma-split, trimmed, order preserved.
    ///
    /// Fragments that trim to nothing (stray commas) are dropped.
    pub fn rollback_event_list(&self) -> Vec<String> {
        self.rollback_events
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Explicit auto scaling coordination requested for this deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoScalingAction {
    Suspend,
    Resume,
}

/// A desired count request: an explicit count or the keep sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedCount {
    /// Preserve the service's current desired count.
    Keep,
    /// Set an explicit desired count.
    Exact(u32),
}

#[derive(Debug, Error)]
#[error("expected \"keep\" or a non-negative integer, got \"{0}\"")]
pub struct ParseRequestedCountError(String);

impl FromStr for RequestedCount {
    type Err = ParseRequestedCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("keep") {
            return Ok(RequestedCount::Keep);
        }
        s.parse::<u32>()
            .map(RequestedCount::Exact)
            .map_err(|_| ParseRequestedCountError(s.to_string()))
    }
}

impl fmt::Display for RequestedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedCount::Keep => write!(f, "keep"),
            RequestedCount::Exact(n) => write!(f, "{n}"),
        }
    }
}
