//! Workspace data models and patch payload builders

use serde::{Deserialize, Serialize};

/// Response wrapper for a single workspace lookup
#[derive(Deserialize, Debug)]
pub struct WorkspaceResponse {
    pub data: Workspace,
}

/// Workspace data from TFE API (only what the lookup needs)
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
}

/// Where runs for a workspace execute
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Local,
    Remote,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Local => write!(f, "local"),
            ExecutionMode::Remote => write!(f, "remote"),
        }
    }
}

/// VCS repository attributes that can be patched
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VcsRepoPatch {
    pub branch: String,
}

/// Partial set of workspace attributes to write.
///
/// Fields left as `None` are not serialized, so the server keeps their
/// current values.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceAttributesPatch {
    #[serde(rename = "execution-mode", skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
    #[serde(rename = "vcs-repo", skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepoPatch>,
    #[serde(rename = "file-triggers-enabled", skip_serializing_if = "Option::is_none")]
    pub file_triggers_enabled: Option<bool>,
    #[serde(rename = "trigger-prefixes", skip_serializing_if = "Option::is_none")]
    pub trigger_prefixes: Option<Vec<String>>,
    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

impl WorkspaceAttributesPatch {
    /// `{execution-mode: mode}`
    pub fn execution_mode(mode: ExecutionMode) -> Self {
        Self {
            execution_mode: Some(mode),
            ..Default::default()
        }
    }

    /// `{vcs-repo: {branch}}`
    pub fn vcs_branch(branch: &str) -> Self {
        Self {
            vcs_repo: Some(VcsRepoPatch {
                branch: branch.to_string(),
            }),
            ..Default::default()
        }
    }

    /// Enable file triggers restricted to the given prefixes
    pub fn trigger_prefixes(prefixes: &[String]) -> Self {
        Self {
            file_triggers_enabled: Some(true),
            trigger_prefixes: Some(prefixes.to_vec()),
            ..Default::default()
        }
    }

    /// `{working-directory: dir}`
    pub fn working_directory(dir: &str) -> Self {
        Self {
            working_directory: Some(dir.to_string()),
            ..Default::default()
        }
    }
}

/// JSON:API request document for a workspace PATCH
#[derive(Serialize, Debug)]
pub struct WorkspacePatchRequest<'a> {
    pub data: WorkspacePatchData<'a>,
}

/// `data` member of [`WorkspacePatchRequest`]
#[derive(Serialize, Debug)]
pub struct WorkspacePatchData<'a> {
    pub attributes: &'a WorkspaceAttributesPatch,
}

impl<'a> WorkspacePatchRequest<'a> {
    pub fn new(attributes: &'a WorkspaceAttributesPatch) -> Self {
        Self {
            data: WorkspacePatchData { attributes },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(patch: &WorkspaceAttributesPatch) -> serde_json::Value {
        serde_json::to_value(WorkspacePatchRequest::new(patch)).unwrap()
    }

    #[test]
    fn test_execution_mode_payload_has_only_mode() {
        for (mode, wire) in [
            (ExecutionMode::Local, "local"),
            (ExecutionMode::Remote, "remote"),
        ] {
            let body = to_json(&WorkspaceAttributesPatch::execution_mode(mode));
            assert_eq!(body, json!({"data": {"attributes": {"execution-mode": wire}}}));
        }
    }

    #[test]
    fn test_vcs_branch_payload() {
        let body = to_json(&WorkspaceAttributesPatch::vcs_branch("feature/x"));
        assert_eq!(
            body,
            json!({"data": {"attributes": {"vcs-repo": {"branch": "feature/x"}}}})
        );
    }

    #[test]
    fn test_trigger_prefixes_payload_enables_file_triggers() {
        let prefixes = vec!["envs/prod".to_string()];
        let body = to_json(&WorkspaceAttributesPatch::trigger_prefixes(&prefixes));
        assert_eq!(
            body,
            json!({"data": {"attributes": {
                "file-triggers-enabled": true,
                "trigger-prefixes": ["envs/prod"]
            }}})
        );
    }

    #[test]
    fn test_trigger_prefixes_payload_is_stable() {
        let prefixes = vec!["a".to_string(), "b".to_string()];
        let first = to_json(&WorkspaceAttributesPatch::trigger_prefixes(&prefixes));
        let second = to_json(&WorkspaceAttributesPatch::trigger_prefixes(&prefixes));
        assert_eq!(first, second);
    }

    #[test]
    fn test_working_directory_payload() {
        let body = to_json(&WorkspaceAttributesPatch::working_directory("envs/dev"));
        assert_eq!(
            body,
            json!({"data": {"attributes": {"working-directory": "envs/dev"}}})
        );
    }

    #[test]
    fn test_default_patch_serializes_no_attributes() {
        let body = to_json(&WorkspaceAttributesPatch::default());
        assert_eq!(body, json!({"data": {"attributes": {}}}));
    }

    #[test]
    fn test_workspace_lookup_deserialize() {
        let raw = json!({
            "data": {
                "id": "ws-abc123",
                "type": "workspaces",
                "attributes": {"name": "my-ws", "execution-mode": "local"}
            }
        });
        let resp: WorkspaceResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.data.id, "ws-abc123");
    }

    #[test]
    fn test_execution_mode_display() {
        assert_eq!(ExecutionMode::Local.to_string(), "local");
        assert_eq!(ExecutionMode::Remote.to_string(), "remote");
    }
}
