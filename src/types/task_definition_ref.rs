// ABOUTME: Task definition reference validation.
// ABOUTME: Accepts family, family:revision, or a full ARN.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskDefinitionRefError {
    #[error("task definition reference cannot be empty")]
    Empty,

    #[error("invalid character in task definition reference: '{0}'")]
    InvalidChar(char),
}

/// An opaque reference to a registered task definition.
///
/// The platform accepts a family name, `family:revision`, or a full ARN.
/// The reference is carried verbatim into update calls and the AppSpec,
/// so no normalization is applied beyond validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDefinitionRef(String);

impl TaskDefinitionRef {
    pub fn new(value: &str) -> Result<Self, TaskDefinitionRefError> {
        if value.is_empty() {
            return Err(TaskDefinitionRefError::Empty);
        }

        for c in value.chars() {
            if c.is_whitespace() || c == '"' {
                return Err(TaskDefinitionRefError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDefinitionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
