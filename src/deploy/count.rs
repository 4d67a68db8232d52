// ABOUTME: Desired count resolution for a deploy.
// ABOUTME: Tri-state so scheduler-owned counts can never leak into update calls.

use super::options::RequestedCount;
use crate::platform::SchedulingMode;

/// The effective desired count for this deploy.
///
/// Daemon services have no operator-set count, so the resolved value is a
/// tagged type rather than an optional integer: every consumer has to
/// decide what scheduler ownership means for its call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredCount {
    /// The scheduler owns the count (daemon scheduling). Omitted from
    /// every update request.
    SchedulerManaged,
    /// An explicit replica count.
    Fixed(u32),
}

impl DesiredCount {
    /// Resolve the effective count from the service state and the request.
    ///
    /// Daemon scheduling wins over any request; the keep sentinel mirrors
    /// the current count; otherwise the request passes through. Total — no
    /// error cases.
    pub fn resolve(scheduling: SchedulingMode, requested: RequestedCount, current: u32) -> Self {
        match (scheduling, requested) {
            (SchedulingMode::Daemon, _) => DesiredCount::SchedulerManaged,
            (SchedulingMode::Replica, RequestedCount::Keep) => DesiredCount::Fixed(current),
            (SchedulingMode::Replica, RequestedCount::Exact(n)) => DesiredCount::Fixed(n),
        }
    }

    /// The count to place in an update request, if any.
    pub fn for_update(&self) -> Option<u32> {
        match self {
            DesiredCount::SchedulerManaged => None,
            DesiredCount::Fixed(n) => Some(*n),
        }
    }
}
