// ABOUTME: Task artifact staging for a deploy.
// ABOUTME: Reuse the running revision, preview in dry-run, or register a new one.

use snafu::ResultExt;

use super::error::{DeployError, LoadTaskDefinitionSnafu, RegisterTaskDefinitionSnafu};
use super::options::DeployOptions;
use crate::config::Config;
use crate::output::Observer;
use crate::platform::{ArtifactOps, ServiceSnapshot};
use crate::types::TaskDefinitionRef;

/// The task definition staged for this deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedArtifact {
    /// The service's current revision, reused verbatim.
    Reused(TaskDefinitionRef),

    /// A freshly registered revision.
    Registered(TaskDefinitionRef),

    /// Dry run: the candidate was loaded and reported, nothing was
    /// registered, so there is no reference to submit.
    Preview,
}

/// Produce the task definition reference to deploy.
///
/// With the skip flag the running revision is reused without touching the
/// artifact source. Otherwise the candidate is loaded; in dry-run mode it
/// is only reported, and in a real run it is registered as a new revision.
/// Load and register failures abort the deploy before any service mutation.
pub(crate) async fn stage_task_definition<A: ArtifactOps>(
    artifacts: &A,
    config: &Config,
    options: &DeployOptions,
    snapshot: &ServiceSnapshot,
    out: &dyn Observer,
) -> Result<StagedArtifact, DeployError> {
    if options.skip_task_definition {
        return Ok(StagedArtifact::Reused(snapshot.task_definition.clone()));
    }

    let artifact = artifacts
        .load_candidate(&config.task_definition)
        .await
        .context(LoadTaskDefinitionSnafu)?;

    if options.dry_run {
        out.progress(&format!("task definition: {artifact}"));
        return Ok(StagedArtifact::Preview);
    }

    let reference = artifacts
        .register(&artifact)
        .await
        .context(RegisterTaskDefinitionSnafu)?;
    Ok(StagedArtifact::Registered(reference))
}
