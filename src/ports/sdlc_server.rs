//! Source-control (SDLC) server port definition.

use std::fmt;

use url::Url;

use crate::domain::{AppError, WorkspaceKind};

/// A workspace as listed by the SDLC server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub project_id: String,
    pub workspace_id: String,
    pub kind: WorkspaceKind,
}

/// Port for the SDLC server the studio edits projects through.
pub trait SdlcServerPort: fmt::Debug + Send + Sync {
    /// Base URL requests are issued against.
    fn base_url(&self) -> &Url;

    /// List the workspaces of a project, individual and group alike.
    fn get_workspaces(&self, project_id: &str) -> Result<Vec<Workspace>, AppError>;
}
