//! Workspace command handlers

use log::debug;
use std::path::PathBuf;

use crate::cli::Action;
use crate::discovery::WorkspaceRef;
use crate::error::Result;
use crate::hcp::TfeClient;
use crate::repo::RepoLocation;
use crate::ui::{create_spinner, finish_spinner, report_failure, report_success};

use super::operations::{ResetTarget, WorkspaceOperations};

/// Invocation-wide inputs for a workspace command
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the command was invoked from
    pub cwd: PathBuf,
    /// Branch applied by a reset
    pub default_branch: String,
    /// Suppress spinners
    pub quiet: bool,
}

/// Resolve the workspace and apply the requested action to it
pub async fn run_ws_command(
    client: &TfeClient,
    workspace: &WorkspaceRef,
    action: &Action,
    opts: &RunOptions,
) -> Result<()> {
    debug!("Running {:?} on {:?}", action, workspace);

    let spinner = create_spinner(
        &format!("Looking up workspace '{}'...", workspace.name),
        opts.quiet,
    );
    let lookup = client
        .get_workspace_id(&workspace.organization, &workspace.name)
        .await;
    finish_spinner(spinner);
    let ws_id = lookup?;

    println!(
        "Workspace '{}' ({}) found in organization '{}'",
        workspace.name, ws_id, workspace.organization
    );

    let ops = WorkspaceOperations::new(client, &ws_id);
    let spinner = create_spinner(&format!("Updating workspace '{}'...", workspace.name), opts.quiet);

    let result = match action {
        Action::SetExecutionMode(mode) => ops
            .set_execution_mode(*mode)
            .await
            .map(|_| format!("Execution mode set to '{}'", mode)),
        Action::ChangeBranch(branch) => ops
            .set_vcs_branch(branch)
            .await
            .map(|_| format!("VCS branch set to '{}'", branch)),
        Action::SetTriggerPaths => {
            let paths = vec![RepoLocation::discover(&opts.cwd).trigger_prefix()];
            ops.set_trigger_paths(&paths)
                .await
                .map(|_| format!("Trigger paths set to [{}]", paths.join(", ")))
        }
        Action::SetWorkingDirectory => {
            let dir = RepoLocation::discover(&opts.cwd).working_directory();
            ops.set_working_directory(&dir)
                .await
                .map(|_| format!("Working directory set to '{}'", dir))
        }
        Action::ResetWorkspace => {
            let target = ResetTarget::new(
                &opts.default_branch,
                &RepoLocation::discover(&opts.cwd),
            );
            ops.reset_workspace(&target, |step, outcome| match outcome {
                Ok(()) => report_success(&format!("Workspace {}", step)),
                Err(e) => report_failure(&format!("Failed to {}: {}", step.label(), e)),
            })
            .await
            .map(|_| {
                format!(
                    "Workspace reset to defaults (remote execution, branch '{}')",
                    opts.default_branch
                )
            })
        }
    };
    finish_spinner(spinner);

    let message = result?;
    report_success(&message);
    Ok(())
}
