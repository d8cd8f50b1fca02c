//! tfws - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use tfws::{run_ws_command, Action, Cli, Credentials, Result, RunOptions, TfeClient, WorkspaceRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfws v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Usage and settings problems must surface before any request is sent
    let action = Action::from_cli(cli)?;
    debug!("Requested action: {:?}", action);

    let cwd = std::env::current_dir()?;
    let workspace = WorkspaceRef::resolve(
        cli.org.as_deref(),
        cli.workspace.as_deref(),
        &cwd.join(&cli.tf_file),
    )?;

    let credentials = Credentials::load(cli.config.as_deref())?;
    debug!("Using API at {}", credentials.base_url);
    let client = TfeClient::new(&credentials)?;

    let opts = RunOptions {
        cwd,
        default_branch: cli.default_branch.trim().to_string(),
        quiet: cli.quiet,
    };
    run_ws_command(&client, &workspace, &action, &opts).await
}
