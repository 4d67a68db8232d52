// ABOUTME: Best-effort notification after a blue/green deployment is created.
// ABOUTME: Environment-coupled (terminal check, process spawn), kept behind a seam.

use std::io::IsTerminal;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Optional hook fired after a deployment is created on the release backend.
///
/// Failures are reported to the caller, which logs them; they never affect
/// the deployment outcome.
pub trait ReleaseNotifier: Send + Sync {
    fn deployment_created(&self, console_url: &str) -> Result<(), NotifyError>;
}

/// A notification attempt failed.
#[derive(Debug, Error)]
#[error("could not open deployment console: {0}")]
pub struct NotifyError(pub String);

/// Opens the deployment console in the default browser, but only when
/// stdout is an interactive terminal.
pub struct BrowserNotifier;

impl ReleaseNotifier for BrowserNotifier {
    fn deployment_created(&self, console_url: &str) -> Result<(), NotifyError> {
        if !std::io::stdout().is_terminal() {
            return Ok(());
        }

        let opener = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };

        Command::new(opener)
            .arg(console_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| NotifyError(format!("{opener} failed to start: {e}")))
    }
}
