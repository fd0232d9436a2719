//! Composite store backing the studio editor.

use std::sync::Arc;

use tracing::debug;

use crate::domain::routes::{
    generate_editor_route, generate_view_project_by_gav_route, generate_view_version_route,
};
use crate::domain::{AppError, ApplicationStore, StudioPluginManager};
use crate::ports::{DepotServerPort, GraphManagerStatePort, SdlcServerPort};

/// Everything the editor needs, assembled once per session.
///
/// Collaborators are shared handles so the same plugin manager can back
/// both the graph manager state and the editor.
#[derive(Debug, Clone)]
pub struct EditorStore {
    application_store: ApplicationStore,
    sdlc_server_client: Arc<dyn SdlcServerPort>,
    depot_server_client: Arc<dyn DepotServerPort>,
    graph_manager_state: Arc<dyn GraphManagerStatePort>,
    plugin_manager: Arc<StudioPluginManager>,
}

impl EditorStore {
    pub fn new(
        application_store: ApplicationStore,
        sdlc_server_client: Arc<dyn SdlcServerPort>,
        depot_server_client: Arc<dyn DepotServerPort>,
        graph_manager_state: Arc<dyn GraphManagerStatePort>,
        plugin_manager: Arc<StudioPluginManager>,
    ) -> Self {
        Self {
            application_store,
            sdlc_server_client,
            depot_server_client,
            graph_manager_state,
            plugin_manager,
        }
    }

    pub fn application_store(&self) -> &ApplicationStore {
        &self.application_store
    }

    pub fn sdlc_server_client(&self) -> &Arc<dyn SdlcServerPort> {
        &self.sdlc_server_client
    }

    pub fn depot_server_client(&self) -> &Arc<dyn DepotServerPort> {
        &self.depot_server_client
    }

    pub fn graph_manager_state(&self) -> &Arc<dyn GraphManagerStatePort> {
        &self.graph_manager_state
    }

    pub fn plugin_manager(&self) -> &Arc<StudioPluginManager> {
        &self.plugin_manager
    }

    /// Editor links for every workspace of a project, under the deployed base path.
    pub fn workspace_editor_urls(&self, project_id: &str) -> Result<Vec<String>, AppError> {
        let workspaces = self.sdlc_server_client.get_workspaces(project_id)?;
        debug!(project_id, count = workspaces.len(), "building workspace editor links");
        workspaces
            .iter()
            .map(|workspace| -> Result<String, AppError> {
                let route = generate_editor_route(
                    &workspace.project_id,
                    &workspace.workspace_id,
                    workspace.kind,
                )?;
                Ok(self.application_store.navigation_url(&route))
            })
            .collect()
    }

    /// Archive links for every published version of an artifact.
    pub fn archive_urls(&self, group_id: &str, artifact_id: &str) -> Result<Vec<String>, AppError> {
        let versions = self.depot_server_client.get_versions(group_id, artifact_id)?;
        versions
            .iter()
            .map(|version| -> Result<String, AppError> {
                let route = generate_view_project_by_gav_route(group_id, artifact_id, version, None)?;
                Ok(self.application_store.navigation_url(&route))
            })
            .collect()
    }

    /// View links for each entity in the graph at a project version.
    pub fn entity_version_urls(
        &self,
        project_id: &str,
        version_id: &str,
    ) -> Result<Vec<String>, AppError> {
        self.graph_manager_state
            .entity_paths()
            .into_iter()
            .map(|entity_path| -> Result<String, AppError> {
                let route =
                    generate_view_version_route(project_id, version_id, Some(&entity_path))?;
                Ok(self.application_store.navigation_url(&route))
            })
            .collect()
    }
}
