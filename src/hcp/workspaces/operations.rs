//! High-level workspace setting operations

use log::{debug, info, warn};
use std::fmt;

use crate::error::{Result, StepFailure, TfwsError};
use crate::hcp::TfeClient;
use crate::repo::RepoLocation;

use super::models::{ExecutionMode, WorkspaceAttributesPatch};

/// Canonical settings applied by a workspace reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTarget {
    pub branch: String,
    pub trigger_prefixes: Vec<String>,
    pub working_directory: String,
}

impl ResetTarget {
    /// Reset target for the given default branch and repository location
    pub fn new(branch: &str, location: &RepoLocation) -> Self {
        Self {
            branch: branch.to_string(),
            trigger_prefixes: vec![location.trigger_prefix()],
            working_directory: location.working_directory(),
        }
    }

    /// Steps of the reset, in the order they are applied
    pub fn steps(&self) -> Vec<ResetStep> {
        vec![
            ResetStep::ExecutionMode(ExecutionMode::Remote),
            ResetStep::VcsBranch(self.branch.clone()),
            ResetStep::TriggerPaths(self.trigger_prefixes.clone()),
            ResetStep::WorkingDirectory(self.working_directory.clone()),
        ]
    }
}

/// One independent write of a workspace reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetStep {
    ExecutionMode(ExecutionMode),
    VcsBranch(String),
    TriggerPaths(Vec<String>),
    WorkingDirectory(String),
}

impl ResetStep {
    /// Short step name used in failure summaries
    pub fn label(&self) -> &'static str {
        match self {
            ResetStep::ExecutionMode(_) => "set execution mode",
            ResetStep::VcsBranch(_) => "set VCS branch",
            ResetStep::TriggerPaths(_) => "set trigger paths",
            ResetStep::WorkingDirectory(_) => "set working directory",
        }
    }
}

impl fmt::Display for ResetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetStep::ExecutionMode(mode) => write!(f, "execution mode set to '{}'", mode),
            ResetStep::VcsBranch(branch) => write!(f, "VCS branch set to '{}'", branch),
            ResetStep::TriggerPaths(paths) => {
                write!(f, "trigger paths set to [{}]", paths.join(", "))
            }
            ResetStep::WorkingDirectory(dir) => {
                write!(f, "working directory set to '{}'", dir)
            }
        }
    }
}

/// Settings operations on one resolved workspace
pub struct WorkspaceOperations<'a> {
    client: &'a TfeClient,
    workspace_id: &'a str,
}

impl<'a> WorkspaceOperations<'a> {
    pub fn new(client: &'a TfeClient, workspace_id: &'a str) -> Self {
        Self {
            client,
            workspace_id,
        }
    }

    /// Switch between local and remote execution.
    ///
    /// Only `execution-mode` is sent; an agent pool association is left as is.
    pub async fn set_execution_mode(&self, mode: ExecutionMode) -> Result<()> {
        info!("Setting execution mode of {} to {}", self.workspace_id, mode);
        self.apply(&WorkspaceAttributesPatch::execution_mode(mode))
            .await
    }

    /// Point the workspace's VCS connection at another branch
    pub async fn set_vcs_branch(&self, branch: &str) -> Result<()> {
        let branch = validate_branch(branch)?;
        info!("Setting VCS branch of {} to {}", self.workspace_id, branch);
        self.apply(&WorkspaceAttributesPatch::vcs_branch(branch))
            .await
    }

    /// Enable file triggers limited to the given path prefixes
    pub async fn set_trigger_paths(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Err(TfwsError::Usage(
                "At least one trigger path is required".to_string(),
            ));
        }
        info!("Setting trigger paths of {} to {:?}", self.workspace_id, paths);
        self.apply(&WorkspaceAttributesPatch::trigger_prefixes(paths))
            .await
    }

    /// Set the directory Terraform runs in, relative to the repository root
    pub async fn set_working_directory(&self, dir: &str) -> Result<()> {
        info!("Setting working directory of {} to '{}'", self.workspace_id, dir);
        self.apply(&WorkspaceAttributesPatch::working_directory(dir))
            .await
    }

    /// Apply every step of `target` as its own PATCH.
    ///
    /// A failed step does not stop the remaining ones. `on_step` sees each
    /// outcome as it happens; all failures are returned together.
    pub async fn reset_workspace<F>(&self, target: &ResetTarget, mut on_step: F) -> Result<()>
    where
        F: FnMut(&ResetStep, &Result<()>),
    {
        let mut failures = Vec::new();

        for step in target.steps() {
            let outcome = self.apply_step(&step).await;
            on_step(&step, &outcome);
            if let Err(error) = outcome {
                warn!("Reset step '{}' failed: {}", step.label(), error);
                failures.push(StepFailure {
                    step: step.label().to_string(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TfwsError::Reset(failures))
        }
    }

    async fn apply_step(&self, step: &ResetStep) -> Result<()> {
        match step {
            ResetStep::ExecutionMode(mode) => self.set_execution_mode(*mode).await,
            ResetStep::VcsBranch(branch) => self.set_vcs_branch(branch).await,
            ResetStep::TriggerPaths(paths) => self.set_trigger_paths(paths).await,
            ResetStep::WorkingDirectory(dir) => self.set_working_directory(dir).await,
        }
    }

    async fn apply(&self, patch: &WorkspaceAttributesPatch) -> Result<()> {
        debug!("Applying {:?} to {}", patch, self.workspace_id);
        self.client.patch_workspace(self.workspace_id, patch).await
    }
}

/// Reject empty or blank branch names
pub fn validate_branch(branch: &str) -> Result<&str> {
    let trimmed = branch.trim();
    if trimmed.is_empty() {
        return Err(TfwsError::Usage("Branch name cannot be empty".to_string()));
    }
    Ok(trimmed)
}
