//! The studio route table.
//!
//! Templates are the compatibility contract for bookmarked and shared links:
//! literal segment names and nesting order must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::RouteError;

/// Stand-in value for a path segment that must be present but carries no meaning.
pub const URL_PATH_PLACEHOLDER: &str = "-";

/// Named placeholders that appear in route templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathParam {
    ProjectId,
    WorkspaceId,
    GroupWorkspaceId,
    RevisionId,
    VersionId,
    ReviewId,
    EntityPath,
    Gav,
}

impl PathParam {
    pub const ALL: [PathParam; 8] = [
        PathParam::ProjectId,
        PathParam::WorkspaceId,
        PathParam::GroupWorkspaceId,
        PathParam::RevisionId,
        PathParam::VersionId,
        PathParam::ReviewId,
        PathParam::EntityPath,
        PathParam::Gav,
    ];

    /// Token as written after `:` in a template.
    pub fn token(self) -> &'static str {
        match self {
            PathParam::ProjectId => "projectId",
            PathParam::WorkspaceId => "workspaceId",
            PathParam::GroupWorkspaceId => "groupWorkspaceId",
            PathParam::RevisionId => "revisionId",
            PathParam::VersionId => "versionId",
            PathParam::ReviewId => "reviewId",
            PathParam::EntityPath => "entityPath",
            PathParam::Gav => "gav",
        }
    }

    pub fn from_token(token: &str) -> Option<PathParam> {
        PathParam::ALL.into_iter().find(|param| param.token() == token)
    }
}

impl fmt::Display for PathParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Placeholder { param: PathParam, optional: bool },
}

impl Segment {
    fn parse(raw: &'static str) -> Segment {
        let Some(token) = raw.strip_prefix(':') else {
            return Segment::Literal(raw);
        };
        let (token, optional) = match token.strip_suffix('?') {
            Some(stripped) => (stripped, true),
            None => (token, false),
        };
        match PathParam::from_token(token) {
            Some(param) => Segment::Placeholder { param, optional },
            None => Segment::Literal(raw),
        }
    }
}

/// Symbolic names for every studio route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutePattern {
    View,
    ViewByGav,
    ViewByGavEntity,
    ViewByEntity,
    ViewByRevision,
    ViewByVersion,
    ViewByRevisionEntity,
    ViewByVersionEntity,
    Review,
    Edit,
    EditGroup,
    Setup,
    SetupGroup,
}

impl RoutePattern {
    /// All routes in table order.
    pub const ALL: [RoutePattern; 13] = [
        RoutePattern::View,
        RoutePattern::ViewByGav,
        RoutePattern::ViewByGavEntity,
        RoutePattern::ViewByEntity,
        RoutePattern::ViewByRevision,
        RoutePattern::ViewByVersion,
        RoutePattern::ViewByRevisionEntity,
        RoutePattern::ViewByVersionEntity,
        RoutePattern::Review,
        RoutePattern::Edit,
        RoutePattern::EditGroup,
        RoutePattern::Setup,
        RoutePattern::SetupGroup,
    ];

    pub fn template(self) -> &'static str {
        match self {
            RoutePattern::View => "/view/:projectId",
            RoutePattern::ViewByGav => "/view/archive/:gav",
            RoutePattern::ViewByGavEntity => "/view/archive/:gav/entity/:entityPath",
            RoutePattern::ViewByEntity => "/view/:projectId/entity/:entityPath",
            RoutePattern::ViewByRevision => "/view/:projectId/revision/:revisionId",
            RoutePattern::ViewByVersion => "/view/:projectId/version/:versionId",
            RoutePattern::ViewByRevisionEntity => {
                "/view/:projectId/revision/:revisionId/entity/:entityPath"
            }
            RoutePattern::ViewByVersionEntity => {
                "/view/:projectId/version/:versionId/entity/:entityPath"
            }
            RoutePattern::Review => "/review/:projectId/:reviewId",
            RoutePattern::Edit => "/edit/:projectId/:workspaceId/",
            RoutePattern::EditGroup => "/edit/:projectId/groupWorkspace/:groupWorkspaceId/",
            RoutePattern::Setup => "/setup/:projectId?/:workspaceId?",
            RoutePattern::SetupGroup => "/setup/:projectId/groupWorkspace/:groupWorkspaceId/",
        }
    }

    /// Symbolic name, e.g. `VIEW_BY_GAV`.
    pub fn name(self) -> &'static str {
        match self {
            RoutePattern::View => "VIEW",
            RoutePattern::ViewByGav => "VIEW_BY_GAV",
            RoutePattern::ViewByGavEntity => "VIEW_BY_GAV_ENTITY",
            RoutePattern::ViewByEntity => "VIEW_BY_ENTITY",
            RoutePattern::ViewByRevision => "VIEW_BY_REVISION",
            RoutePattern::ViewByVersion => "VIEW_BY_VERSION",
            RoutePattern::ViewByRevisionEntity => "VIEW_BY_REVISION_ENTITY",
            RoutePattern::ViewByVersionEntity => "VIEW_BY_VERSION_ENTITY",
            RoutePattern::Review => "REVIEW",
            RoutePattern::Edit => "EDIT",
            RoutePattern::EditGroup => "EDIT_GROUP",
            RoutePattern::Setup => "SETUP",
            RoutePattern::SetupGroup => "SETUP_GROUP",
        }
    }

    /// Template split into segments, without the leading root.
    pub fn segments(self) -> Vec<Segment> {
        let template = self.template();
        let body = template.strip_prefix('/').unwrap_or(template);
        let body = body.strip_suffix('/').unwrap_or(body);
        body.split('/').map(Segment::parse).collect()
    }

    pub fn has_trailing_slash(self) -> bool {
        self.template().len() > 1 && self.template().ends_with('/')
    }

    /// Placeholders in template order.
    pub fn placeholders(self) -> Vec<(PathParam, bool)> {
        self.segments()
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { param, optional } => Some((param, optional)),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// The counterpart that addresses a single entity, if this route has one.
    pub fn entity_variant(self) -> Option<RoutePattern> {
        match self {
            RoutePattern::View => Some(RoutePattern::ViewByEntity),
            RoutePattern::ViewByGav => Some(RoutePattern::ViewByGavEntity),
            RoutePattern::ViewByRevision => Some(RoutePattern::ViewByRevisionEntity),
            RoutePattern::ViewByVersion => Some(RoutePattern::ViewByVersionEntity),
            _ => None,
        }
    }

    /// Number of literal segments; higher wins when several templates match a path.
    pub(crate) fn specificity(self) -> usize {
        self.segments().iter().filter(|segment| matches!(segment, Segment::Literal(_))).count()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutePattern {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoutePattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RouteError::UnknownRoute(s.to_string()))
    }
}
