//! tfws - Flip settings on a single HCP Terraform workspace
//!
//! A CLI tool to change the execution mode, VCS branch, trigger paths and
//! working directory of one TFE/HCP Terraform workspace, or reset it to a
//! canonical configuration.
//!
//! # Example
//!
//! ```bash
//! # Run plans locally while iterating
//! tfws --local
//!
//! # Back to remote execution
//! tfws --remote
//!
//! # Track a feature branch
//! tfws --change-branch feature/new-vpc
//!
//! # Only queue runs for changes under the current directory
//! tfws --set-trigger-paths
//!
//! # Restore remote execution, main branch, trigger paths and working directory
//! tfws --reset-workspace
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod hcp;
pub mod repo;
pub mod settings;
pub mod ui;

pub use cli::{Action, Cli};
pub use discovery::WorkspaceRef;
pub use error::{Result, StepFailure, TfwsError};
pub use hcp::{
    run_ws_command, ExecutionMode, ResetStep, ResetTarget, RunOptions, TfeClient,
    WorkspaceAttributesPatch, WorkspaceOperations,
};
pub use repo::RepoLocation;
pub use settings::Credentials;
