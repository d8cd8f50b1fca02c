//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform Enterprise
//! / HCP Terraform workspace API.

mod client;
pub mod workspaces;

pub use client::TfeClient;
pub use workspaces::{
    run_ws_command, ExecutionMode, ResetStep, ResetTarget, RunOptions, WorkspaceAttributesPatch,
    WorkspaceOperations,
};
