//! Workspace reference discovery from the local Terraform backend block

use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Result, TfwsError};

static ORGANIZATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\borganization\s*=\s*"([^"]*)""#).expect("Invalid organization regex pattern")
});

static WORKSPACE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\bworkspaces\s*\{[^}]*?\bname\s*=\s*"([^"]*)""#)
        .expect("Invalid workspace name regex pattern")
});

/// Organization + workspace name pair identifying one workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub organization: String,
    pub name: String,
}

/// Values found in a `cloud`/`remote` backend block
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BackendBlock {
    pub organization: Option<String>,
    pub workspace: Option<String>,
}

/// Extract organization and workspace name from Terraform source text
pub fn parse_backend_block(content: &str) -> BackendBlock {
    let capture = |re: &Regex| {
        re.captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|s| !s.is_empty())
    };
    BackendBlock {
        organization: capture(&ORGANIZATION_RE),
        workspace: capture(&WORKSPACE_NAME_RE),
    }
}

impl WorkspaceRef {
    /// Resolve the workspace reference.
    ///
    /// Explicit values win; anything missing is read from `tf_file`.
    pub fn resolve(org: Option<&str>, workspace: Option<&str>, tf_file: &Path) -> Result<Self> {
        if let (Some(org), Some(ws)) = (org, workspace) {
            debug!("Using workspace '{}' in '{}' from CLI", ws, org);
            return Ok(Self {
                organization: org.to_string(),
                name: ws.to_string(),
            });
        }

        let content = fs::read_to_string(tf_file).map_err(|e| {
            TfwsError::Usage(format!(
                "Cannot read {} ({}). Run from a directory with a Terraform backend block \
                 or pass --org and --workspace",
                tf_file.display(),
                e
            ))
        })?;
        let block = parse_backend_block(&content);
        debug!("Backend block in {}: {:?}", tf_file.display(), block);

        let organization = org.map(str::to_string).or(block.organization);
        let name = workspace.map(str::to_string).or(block.workspace);

        match (organization, name) {
            (Some(organization), Some(name)) => Ok(Self { organization, name }),
            (organization, name) => {
                let mut missing = Vec::new();
                if organization.is_none() {
                    missing.push("organization (--org)");
                }
                if name.is_none() {
                    missing.push("workspace name (--workspace)");
                }
                Err(TfwsError::Usage(format!(
                    "Could not find {} in {}",
                    missing.join(" and "),
                    tf_file.display()
                )))
            }
        }
    }
}
