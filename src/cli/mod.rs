//! CLI argument parsing

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::{defaults, settings};
use crate::error::{Result, TfwsError};
use crate::hcp::workspaces::operations::validate_branch;
use crate::hcp::ExecutionMode;

/// HCP Terraform workspace settings CLI
#[derive(Parser, Debug)]
#[command(name = "tfws")]
#[command(version)]
#[command(
    about = "Change settings of an HCP Terraform workspace",
    long_about = "Change settings of an HCP Terraform workspace.\n\n\
                  The workspace is read from the cloud/remote block of terraform.tf in the \
                  current directory unless --org and --workspace are given. Trigger paths and \
                  the working directory are derived from the current directory relative to \
                  the repository root."
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(false)
        .args([
            "local",
            "remote",
            "change_branch",
            "set_trigger_paths",
            "set_working_directory",
            "reset_workspace",
        ])
))]
pub struct Cli {
    /// Set workspace to local execution mode
    #[arg(long)]
    pub local: bool,

    /// Set workspace to remote execution mode
    #[arg(long)]
    pub remote: bool,

    /// Change the VCS branch of the workspace
    #[arg(long, value_name = "BRANCH")]
    pub change_branch: Option<String>,

    /// Set VCS trigger paths from the current directory relative to the repo root
    #[arg(long)]
    pub set_trigger_paths: bool,

    /// Set the working directory from the current directory relative to the repo root
    #[arg(long)]
    pub set_working_directory: bool,

    /// Reset workspace to default settings (remote, default branch, trigger paths, working directory)
    #[arg(long)]
    pub reset_workspace: bool,

    /// Organization name (overrides terraform.tf)
    #[arg(long)]
    pub org: Option<String>,

    /// Workspace name (overrides terraform.tf)
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Terraform file holding the cloud/remote backend block
    #[arg(long, value_name = "FILE", default_value = defaults::TF_FILE)]
    pub tf_file: PathBuf,

    /// Branch applied by --reset-workspace
    #[arg(long, value_name = "BRANCH", default_value = defaults::BRANCH)]
    pub default_branch: String,

    /// Settings file with API_TOKEN and API_BASE_URL
    #[arg(short, long, value_name = "FILE", env = settings::PATH_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Disable spinners
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// The single action requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetExecutionMode(ExecutionMode),
    ChangeBranch(String),
    SetTriggerPaths,
    SetWorkingDirectory,
    ResetWorkspace,
}

impl Action {
    /// Pick the requested action, rejecting missing or malformed input
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut selected = Vec::new();
        if cli.local {
            selected.push(Action::SetExecutionMode(ExecutionMode::Local));
        }
        if cli.remote {
            selected.push(Action::SetExecutionMode(ExecutionMode::Remote));
        }
        if let Some(branch) = &cli.change_branch {
            selected.push(Action::ChangeBranch(validate_branch(branch)?.to_string()));
        }
        if cli.set_trigger_paths {
            selected.push(Action::SetTriggerPaths);
        }
        if cli.set_working_directory {
            selected.push(Action::SetWorkingDirectory);
        }
        if cli.reset_workspace {
            validate_branch(&cli.default_branch)
                .map_err(|_| TfwsError::Usage("--default-branch cannot be empty".to_string()))?;
            selected.push(Action::ResetWorkspace);
        }

        match selected.len() {
            0 => Err(TfwsError::Usage(
                "No action selected. Use one of --local, --remote, --change-branch, \
                 --set-trigger-paths, --set-working-directory, --reset-workspace"
                    .to_string(),
            )),
            1 => Ok(selected.remove(0)),
            _ => Err(TfwsError::Usage(
                "Only one action can be selected at a time".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["tfws", "--remote"]);
        assert_eq!(cli.tf_file, PathBuf::from(defaults::TF_FILE));
        assert_eq!(cli.default_branch, defaults::BRANCH);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.org.is_none());
        assert!(cli.workspace.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_action_required() {
        let err = Cli::try_parse_from(["tfws"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_actions_are_mutually_exclusive() {
        let err = Cli::try_parse_from(["tfws", "--local", "--remote"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err =
            Cli::try_parse_from(["tfws", "--reset-workspace", "--change-branch", "dev"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_action_from_flags() {
        let cases: [(&[&str], Action); 6] = [
            (&["--local"], Action::SetExecutionMode(ExecutionMode::Local)),
            (&["--remote"], Action::SetExecutionMode(ExecutionMode::Remote)),
            (
                &["--change-branch", "feature/x"],
                Action::ChangeBranch("feature/x".to_string()),
            ),
            (&["--set-trigger-paths"], Action::SetTriggerPaths),
            (&["--set-working-directory"], Action::SetWorkingDirectory),
            (&["--reset-workspace"], Action::ResetWorkspace),
        ];

        for (args, expected) in cases {
            let argv = std::iter::once("tfws").chain(args.iter().copied());
            let cli = Cli::parse_from(argv);
            assert_eq!(Action::from_cli(&cli).unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_branch_is_usage_error() {
        let cli = Cli::parse_from(["tfws", "--change-branch", ""]);
        assert!(matches!(Action::from_cli(&cli), Err(TfwsError::Usage(_))));
    }

    #[test]
    fn test_empty_default_branch_is_usage_error() {
        let cli = Cli::parse_from(["tfws", "--reset-workspace", "--default-branch", ""]);
        assert!(matches!(Action::from_cli(&cli), Err(TfwsError::Usage(_))));
    }

    #[test]
    fn test_default_branch_ignored_outside_reset() {
        let cli = Cli::parse_from(["tfws", "--local", "--default-branch", ""]);
        assert_eq!(
            Action::from_cli(&cli).unwrap(),
            Action::SetExecutionMode(ExecutionMode::Local)
        );
    }

    #[test]
    fn test_workspace_overrides() {
        let cli = Cli::parse_from([
            "tfws",
            "--remote",
            "--org",
            "acme",
            "-w",
            "network",
            "-c",
            "/tmp/tfws.json",
            "-q",
        ]);
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert_eq!(cli.workspace.as_deref(), Some("network"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tfws.json")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
