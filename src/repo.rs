//! Repository root detection and repository-relative paths

use log::{debug, warn};
use std::path::{Component, Path, PathBuf};

/// Marker entry that identifies a repository root (directory, or file for worktrees)
const REPO_MARKER: &str = ".git";

/// Find the nearest ancestor of `start` (inclusive) that contains `.git`
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(REPO_MARKER).exists())
        .map(Path::to_path_buf)
}

/// The invocation directory expressed relative to its repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    root: PathBuf,
    relative: PathBuf,
}

impl RepoLocation {
    /// Locate `start` inside its repository.
    ///
    /// Outside of a repository, `start` itself is treated as the root.
    pub fn discover(start: &Path) -> Self {
        let root = match find_repo_root(start) {
            Some(root) => root,
            None => {
                warn!(
                    "No {} found above {}, treating it as the repository root",
                    REPO_MARKER,
                    start.display()
                );
                start.to_path_buf()
            }
        };
        let relative = start
            .strip_prefix(&root)
            .map(Path::to_path_buf)
            .unwrap_or_default();

        debug!(
            "Repository root: {}, relative path: '{}'",
            root.display(),
            relative.display()
        );
        Self { root, relative }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Forward-slash joined relative path, empty at the repository root
    fn relative_slashed(&self) -> String {
        self.relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// VCS trigger prefix for this location (`/` at the repository root)
    pub fn trigger_prefix(&self) -> String {
        format!("/{}", self.relative_slashed())
    }

    /// Terraform working directory for this location (empty at the repository root)
    pub fn working_directory(&self) -> String {
        self.relative_slashed()
    }
}
