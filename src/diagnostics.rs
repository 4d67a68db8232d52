// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects warnings that shouldn't fail a deployment but should be shown to users.

/// Collects non-fatal warnings during deployment operations.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a warning for a count request ignored on a daemon service.
    pub fn count_ignored(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::CountIgnored,
            message: message.into(),
        }
    }

    /// Create a warning for a failed console notification.
    pub fn notify_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::NotifyFailed,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A requested desired count was ignored because the scheduler owns placement.
    CountIgnored,
    /// Opening the deployment console in a viewer failed.
    NotifyFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::count_ignored(
            "desired count ignored for daemon service",
        ));
        diag.warn(Warning::notify_failed("no viewer available"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        let count_warning = Warning::count_ignored("test");
        assert_eq!(count_warning.kind, WarningKind::CountIgnored);

        let notify_warning = Warning::notify_failed("test");
        assert_eq!(notify_warning.kind, WarningKind::NotifyFailed);
    }
}
