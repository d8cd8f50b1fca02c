//! Workspace module

mod api;
mod commands;
pub mod models;
pub mod operations;

pub use commands::{run_ws_command, RunOptions};
pub use models::{ExecutionMode, WorkspaceAttributesPatch};
pub use operations::{ResetStep, ResetTarget, WorkspaceOperations};
