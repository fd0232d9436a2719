//! Typed parameter records for route substitution and matching.

use serde::{Deserialize, Serialize};

use crate::domain::RouteError;
use crate::domain::routes::{PathParam, RoutePattern};

/// Values for the placeholders of a route, keyed by [`PathParam`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PathParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gav: Option<String>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::ProjectId, value)
    }

    pub fn workspace_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::WorkspaceId, value)
    }

    pub fn group_workspace_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::GroupWorkspaceId, value)
    }

    pub fn revision_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::RevisionId, value)
    }

    pub fn version_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::VersionId, value)
    }

    pub fn review_id(self, value: impl Into<String>) -> Self {
        self.with(PathParam::ReviewId, value)
    }

    pub fn entity_path(self, value: impl Into<String>) -> Self {
        self.with(PathParam::EntityPath, value)
    }

    pub fn gav(self, value: impl Into<String>) -> Self {
        self.with(PathParam::Gav, value)
    }

    /// Set `param` only when `value` is present.
    pub fn with_opt(mut self, param: PathParam, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.set(param, value);
        }
        self
    }

    pub fn with(mut self, param: PathParam, value: impl Into<String>) -> Self {
        self.set(param, value);
        self
    }

    pub fn set(&mut self, param: PathParam, value: impl Into<String>) {
        *self.slot_mut(param) = Some(value.into());
    }

    pub fn get(&self, param: PathParam) -> Option<&str> {
        let slot = match param {
            PathParam::ProjectId => &self.project_id,
            PathParam::WorkspaceId => &self.workspace_id,
            PathParam::GroupWorkspaceId => &self.group_workspace_id,
            PathParam::RevisionId => &self.revision_id,
            PathParam::VersionId => &self.version_id,
            PathParam::ReviewId => &self.review_id,
            PathParam::EntityPath => &self.entity_path,
            PathParam::Gav => &self.gav,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, param: PathParam) -> &mut Option<String> {
        match param {
            PathParam::ProjectId => &mut self.project_id,
            PathParam::WorkspaceId => &mut self.workspace_id,
            PathParam::GroupWorkspaceId => &mut self.group_workspace_id,
            PathParam::RevisionId => &mut self.revision_id,
            PathParam::VersionId => &mut self.version_id,
            PathParam::ReviewId => &mut self.review_id,
            PathParam::EntityPath => &mut self.entity_path,
            PathParam::Gav => &mut self.gav,
        }
    }

    /// Take a required value out of a matched record.
    fn require(&mut self, param: PathParam, pattern: RoutePattern) -> Result<String, RouteError> {
        self.slot_mut(param)
            .take()
            .filter(|value| !value.is_empty())
            .ok_or(RouteError::MissingParameter { param, template: pattern.template() })
    }
}

/// Params of [`RoutePattern::Review`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPathParams {
    pub project_id: String,
    pub review_id: String,
}

impl TryFrom<PathParams> for ReviewPathParams {
    type Error = RouteError;

    fn try_from(mut params: PathParams) -> Result<Self, Self::Error> {
        let pattern = RoutePattern::Review;
        Ok(Self {
            project_id: params.require(PathParam::ProjectId, pattern)?,
            review_id: params.require(PathParam::ReviewId, pattern)?,
        })
    }
}

/// Params shared by every `/view` route. Which fields are set depends on the route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerPathParams {
    pub gav: Option<String>,
    pub project_id: Option<String>,
    pub version_id: Option<String>,
    pub revision_id: Option<String>,
    pub entity_path: Option<String>,
}

impl From<PathParams> for ViewerPathParams {
    fn from(params: PathParams) -> Self {
        Self {
            gav: params.gav,
            project_id: params.project_id,
            version_id: params.version_id,
            revision_id: params.revision_id,
            entity_path: params.entity_path,
        }
    }
}

/// Params of [`RoutePattern::Edit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPathParams {
    pub project_id: String,
    pub workspace_id: String,
}

impl TryFrom<PathParams> for EditorPathParams {
    type Error = RouteError;

    fn try_from(mut params: PathParams) -> Result<Self, Self::Error> {
        let pattern = RoutePattern::Edit;
        Ok(Self {
            project_id: params.require(PathParam::ProjectId, pattern)?,
            workspace_id: params.require(PathParam::WorkspaceId, pattern)?,
        })
    }
}

/// Params of [`RoutePattern::EditGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEditorPathParams {
    pub project_id: String,
    pub group_workspace_id: String,
}

impl TryFrom<PathParams> for GroupEditorPathParams {
    type Error = RouteError;

    fn try_from(mut params: PathParams) -> Result<Self, Self::Error> {
        let pattern = RoutePattern::EditGroup;
        Ok(Self {
            project_id: params.require(PathParam::ProjectId, pattern)?,
            group_workspace_id: params.require(PathParam::GroupWorkspaceId, pattern)?,
        })
    }
}

/// Params of the setup routes; every field may be absent on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPathParams {
    pub project_id: Option<String>,
    pub workspace_id: Option<String>,
    pub group_workspace_id: Option<String>,
}

impl From<PathParams> for SetupPathParams {
    fn from(params: PathParams) -> Self {
        Self {
            project_id: params.project_id,
            workspace_id: params.workspace_id,
            group_workspace_id: params.group_workspace_id,
        }
    }
}
