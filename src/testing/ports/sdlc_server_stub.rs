use std::sync::Mutex;

use url::Url;

use crate::domain::{AppError, WorkspaceKind};
use crate::ports::{SdlcServerPort, Workspace};

/// In-memory SDLC server seeded with workspaces.
#[derive(Debug)]
pub struct FakeSdlcServer {
    base_url: Url,
    pub workspaces: Mutex<Vec<Workspace>>,
    pub requested_projects: Mutex<Vec<String>>,
}

impl FakeSdlcServer {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            workspaces: Mutex::new(Vec::new()),
            requested_projects: Mutex::new(Vec::new()),
        }
    }

    pub fn add_workspace(&self, project_id: &str, workspace_id: &str, kind: WorkspaceKind) {
        self.workspaces.lock().unwrap().push(Workspace {
            project_id: project_id.to_string(),
            workspace_id: workspace_id.to_string(),
            kind,
        });
    }
}

impl SdlcServerPort for FakeSdlcServer {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_workspaces(&self, project_id: &str) -> Result<Vec<Workspace>, AppError> {
        self.requested_projects.lock().unwrap().push(project_id.to_string());
        Ok(self
            .workspaces
            .lock()
            .unwrap()
            .iter()
            .filter(|workspace| workspace.project_id == project_id)
            .cloned()
            .collect())
    }
}
