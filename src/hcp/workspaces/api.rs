//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::TfeClient;

use super::models::{WorkspaceAttributesPatch, WorkspacePatchRequest, WorkspaceResponse};

impl TfeClient {
    /// Look up a workspace id by organization and workspace name
    ///
    /// Uses GET /organizations/:org/workspaces/:name
    pub async fn get_workspace_id(&self, org: &str, name: &str) -> Result<String> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES,
            urlencoding::encode(name)
        );
        debug!("Looking up workspace '{}' in '{}': {}", name, org, url);

        let response = self.get(&url).send().await?;
        let response = self
            .check_response(
                response,
                &format!("Workspace '{}' in organization '{}'", name, org),
            )
            .await?;

        let body = response.text().await?;
        let ws: WorkspaceResponse = serde_json::from_str(&body)?;
        debug!("Resolved workspace '{}' to {}", name, ws.data.id);
        Ok(ws.data.id)
    }

    /// Partially update a workspace
    ///
    /// Uses PATCH /workspaces/:workspace_id with only the supplied attributes.
    pub async fn patch_workspace(
        &self,
        workspace_id: &str,
        attributes: &WorkspaceAttributesPatch,
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            urlencoding::encode(workspace_id)
        );
        let body = WorkspacePatchRequest::new(attributes);
        debug!(
            "Patching workspace {} with {}",
            workspace_id,
            serde_json::to_string(&body)?
        );

        let response = self.patch(&url).json(&body).send().await?;
        self.check_response(response, &format!("Update of workspace '{}'", workspace_id))
            .await?;
        Ok(())
    }
}
