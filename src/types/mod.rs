// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Validation happens at construction so downstream code can trust the values.

mod service_name;
mod task_definition_ref;

pub use service_name::{ServiceName, ServiceNameError};
pub use task_definition_ref::{TaskDefinitionRef, TaskDefinitionRefError};
