//! Path builders for each studio navigation target.

use crate::domain::identities::{WorkspaceKind, generate_gav_coordinates};
use crate::domain::routes::{PathParam, PathParams, RoutePattern, generate_path};
use crate::domain::RouteError;

/// Route to the setup page.
///
/// Group workspaces need both ids. The individual form is a browse page:
/// either id may be absent, but a workspace id alone cannot be expressed.
pub fn generate_setup_route(
    project_id: Option<&str>,
    workspace_id: Option<&str>,
    kind: Option<WorkspaceKind>,
) -> Result<String, RouteError> {
    match kind {
        Some(WorkspaceKind::Group) => {
            let group_workspace_id = require_group_workspace(workspace_id)?;
            generate_path(
                RoutePattern::SetupGroup,
                &PathParams::new()
                    .with_opt(PathParam::ProjectId, project_id)
                    .group_workspace_id(group_workspace_id),
            )
        }
        Some(WorkspaceKind::Individual) | None => {
            if project_id.is_none() && workspace_id.is_some() {
                return Err(RouteError::invalid_argument(
                    "setup route needs a project id when a workspace id is given",
                ));
            }
            generate_path(
                RoutePattern::Setup,
                &PathParams::new()
                    .with_opt(PathParam::ProjectId, project_id)
                    .with_opt(PathParam::WorkspaceId, workspace_id),
            )
        }
    }
}

/// Route to the editor for a workspace.
pub fn generate_editor_route(
    project_id: &str,
    workspace_id: &str,
    kind: WorkspaceKind,
) -> Result<String, RouteError> {
    match kind {
        WorkspaceKind::Group => {
            let group_workspace_id = require_group_workspace(Some(workspace_id))?;
            generate_path(
                RoutePattern::EditGroup,
                &PathParams::new().project_id(project_id).group_workspace_id(group_workspace_id),
            )
        }
        WorkspaceKind::Individual => generate_path(
            RoutePattern::Edit,
            &PathParams::new().project_id(project_id).workspace_id(workspace_id),
        ),
    }
}

pub fn generate_review_route(project_id: &str, review_id: &str) -> Result<String, RouteError> {
    generate_path(RoutePattern::Review, &PathParams::new().project_id(project_id).review_id(review_id))
}

pub fn generate_view_project_route(project_id: &str) -> Result<String, RouteError> {
    generate_path(RoutePattern::View, &PathParams::new().project_id(project_id))
}

pub fn generate_view_entity_route(project_id: &str, entity_path: &str) -> Result<String, RouteError> {
    generate_path(
        RoutePattern::ViewByEntity,
        &PathParams::new().project_id(project_id).entity_path(entity_path),
    )
}

/// Route to a published project version addressed by its GAV coordinates.
///
/// An empty entity path is `MissingParameter`; pass `None` for the project route.
pub fn generate_view_project_by_gav_route(
    group_id: &str,
    artifact_id: &str,
    version_id: &str,
    entity_path: Option<&str>,
) -> Result<String, RouteError> {
    let params = PathParams::new().gav(generate_gav_coordinates(group_id, artifact_id, version_id));
    with_entity(RoutePattern::ViewByGav, RoutePattern::ViewByGavEntity, params, entity_path)
}

/// Archive route without an entity, kept so existing links keep resolving.
pub fn generate_view_project_entity_by_gav_route(
    group_id: &str,
    artifact_id: &str,
    version_id: &str,
) -> Result<String, RouteError> {
    generate_view_project_by_gav_route(group_id, artifact_id, version_id, None)
}

/// An empty entity path is `MissingParameter`; pass `None` for the version route.
pub fn generate_view_version_route(
    project_id: &str,
    version_id: &str,
    entity_path: Option<&str>,
) -> Result<String, RouteError> {
    let params = PathParams::new().project_id(project_id).version_id(version_id);
    with_entity(RoutePattern::ViewByVersion, RoutePattern::ViewByVersionEntity, params, entity_path)
}

/// An empty entity path is `MissingParameter`; pass `None` for the revision route.
pub fn generate_view_revision_route(
    project_id: &str,
    revision_id: &str,
    entity_path: Option<&str>,
) -> Result<String, RouteError> {
    let params = PathParams::new().project_id(project_id).revision_id(revision_id);
    with_entity(
        RoutePattern::ViewByRevision,
        RoutePattern::ViewByRevisionEntity,
        params,
        entity_path,
    )
}

/// Pick `base` or `entity_route` depending on whether an entity path is given.
fn with_entity(
    base: RoutePattern,
    entity_route: RoutePattern,
    params: PathParams,
    entity_path: Option<&str>,
) -> Result<String, RouteError> {
    match entity_path {
        Some(entity_path) => generate_path(entity_route, &params.entity_path(entity_path)),
        None => generate_path(base, &params),
    }
}

fn require_group_workspace(workspace_id: Option<&str>) -> Result<&str, RouteError> {
    workspace_id.filter(|id| !id.is_empty()).ok_or_else(|| {
        RouteError::invalid_argument("group workspace route requires a group workspace id")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routes::{encode_path_value, match_path};
    use proptest::prelude::*;

    #[test]
    fn editor_route_for_individual_workspace() {
        assert_eq!(
            generate_editor_route("PROD-12", "my-ws", WorkspaceKind::Individual).unwrap(),
            "/edit/PROD-12/my-ws/"
        );
    }

    #[test]
    fn editor_route_for_group_workspace() {
        assert_eq!(
            generate_editor_route("PROD-12", "team-ws", WorkspaceKind::Group).unwrap(),
            "/edit/PROD-12/groupWorkspace/team-ws/"
        );
    }

    #[test]
    fn editor_route_rejects_empty_group_id() {
        assert!(matches!(
            generate_editor_route("PROD-12", "", WorkspaceKind::Group),
            Err(RouteError::InvalidArgument(_))
        ));
    }

    #[test]
    fn editor_route_reports_missing_individual_workspace() {
        assert_eq!(
            generate_editor_route("PROD-12", "", WorkspaceKind::Individual),
            Err(RouteError::MissingParameter {
                param: PathParam::WorkspaceId,
                template: "/edit/:projectId/:workspaceId/",
            })
        );
    }

    #[test]
    fn setup_route_for_group_requires_workspace_id() {
        let err = generate_setup_route(Some("PROD-12"), None, Some(WorkspaceKind::Group)).unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument(_)));
    }

    #[test]
    fn setup_route_for_group_requires_project_id() {
        assert_eq!(
            generate_setup_route(None, Some("team"), Some(WorkspaceKind::Group)),
            Err(RouteError::MissingParameter {
                param: PathParam::ProjectId,
                template: "/setup/:projectId/groupWorkspace/:groupWorkspaceId/",
            })
        );
    }

    #[test]
    fn setup_route_for_group_workspace() {
        assert_eq!(
            generate_setup_route(Some("PROD-12"), Some("team"), Some(WorkspaceKind::Group)).unwrap(),
            "/setup/PROD-12/groupWorkspace/team/"
        );
    }

    #[test]
    fn setup_browse_route_accepts_partial_ids() {
        assert_eq!(generate_setup_route(None, None, None).unwrap(), "/setup");
        assert_eq!(generate_setup_route(Some("PROD-12"), None, None).unwrap(), "/setup/PROD-12");
        assert_eq!(
            generate_setup_route(Some("PROD-12"), Some("ws"), Some(WorkspaceKind::Individual))
                .unwrap(),
            "/setup/PROD-12/ws"
        );
    }

    #[test]
    fn setup_browse_route_rejects_workspace_without_project() {
        assert!(matches!(
            generate_setup_route(None, Some("ws"), None),
            Err(RouteError::InvalidArgument(_))
        ));
    }

    #[test]
    fn review_and_view_routes() {
        assert_eq!(generate_review_route("PROD-12", "7").unwrap(), "/review/PROD-12/7");
        assert_eq!(generate_view_project_route("PROD-12").unwrap(), "/view/PROD-12");
        assert_eq!(
            generate_view_entity_route("PROD-12", "model::Person").unwrap(),
            "/view/PROD-12/entity/model::Person"
        );
    }

    #[test]
    fn gav_route_with_and_without_entity() {
        assert_eq!(
            generate_view_project_by_gav_route("org.finos", "demo", "1.0.0", None).unwrap(),
            "/view/archive/org.finos:demo:1.0.0"
        );
        assert_eq!(
            generate_view_project_by_gav_route("org.finos", "demo", "1.0.0", Some("model::Person"))
                .unwrap(),
            "/view/archive/org.finos:demo:1.0.0/entity/model::Person"
        );
        assert_eq!(
            generate_view_project_entity_by_gav_route("org.finos", "demo", "1.0.0").unwrap(),
            "/view/archive/org.finos:demo:1.0.0"
        );
    }

    #[test]
    fn version_route_with_and_without_entity() {
        assert_eq!(
            generate_view_version_route("PROD-12", "2.1.0", None).unwrap(),
            "/view/PROD-12/version/2.1.0"
        );
        assert_eq!(
            generate_view_version_route("PROD-12", "2.1.0", Some("Person")).unwrap(),
            "/view/PROD-12/version/2.1.0/entity/Person"
        );
    }

    #[test]
    fn revision_route_with_and_without_entity() {
        assert_eq!(
            generate_view_revision_route("PROD-12", "abc123", None).unwrap(),
            "/view/PROD-12/revision/abc123"
        );
        assert_eq!(
            generate_view_revision_route("PROD-12", "abc123", Some("Person")).unwrap(),
            "/view/PROD-12/revision/abc123/entity/Person"
        );
    }

    #[test]
    fn empty_entity_path_is_missing_not_dropped() {
        let results = [
            generate_view_version_route("PROD-12", "2.1.0", Some("")),
            generate_view_revision_route("PROD-12", "abc123", Some("")),
            generate_view_project_by_gav_route("g", "a", "v", Some("")),
        ];
        for result in results {
            assert!(matches!(
                result,
                Err(RouteError::MissingParameter { param: PathParam::EntityPath, .. })
            ));
        }
    }

    #[test]
    fn entity_builders_pick_the_table_entity_variant() {
        let cases = [
            (RoutePattern::ViewByGav, generate_view_project_by_gav_route("g", "a", "v", Some("E"))),
            (RoutePattern::ViewByVersion, generate_view_version_route("p", "1", Some("E"))),
            (RoutePattern::ViewByRevision, generate_view_revision_route("p", "r", Some("E"))),
        ];
        for (base, path) in cases {
            let entity_route = base.entity_variant().unwrap();
            assert!(match_path(entity_route, &path.unwrap()).unwrap().is_some(), "{}", base);
        }
    }

    #[test]
    fn builders_are_deterministic() {
        let first = generate_view_project_by_gav_route("g", "a", "v", Some("e")).unwrap();
        let second = generate_view_project_by_gav_route("g", "a", "v", Some("e")).unwrap();
        assert_eq!(first, second);
    }

    fn identifier() -> impl Strategy<Value = String> {
        // Opaque ids: include separators and non-ASCII to exercise encoding.
        "[a-zA-Z0-9_.:/ %?#é-]{1,24}"
    }

    proptest! {
        #[test]
        fn individual_editor_route_roundtrips(project in identifier(), workspace in identifier()) {
            let path = generate_editor_route(&project, &workspace, WorkspaceKind::Individual).unwrap();
            prop_assert!(path.starts_with("/edit/"));
            prop_assert!(path.ends_with('/'));
            prop_assert_eq!(path.matches('/').count(), 4);

            let params = match_path(RoutePattern::Edit, &path).unwrap().unwrap();
            prop_assert_eq!(params.project_id.as_deref(), Some(project.as_str()));
            prop_assert_eq!(params.workspace_id.as_deref(), Some(workspace.as_str()));
        }

        #[test]
        fn group_editor_route_roundtrips(project in identifier(), group in identifier()) {
            let path = generate_editor_route(&project, &group, WorkspaceKind::Group).unwrap();
            let expected_prefix = format!("/edit/{}/groupWorkspace/", encode_path_value(&project));
            prop_assert!(path.starts_with(&expected_prefix));

            let params = match_path(RoutePattern::EditGroup, &path).unwrap().unwrap();
            prop_assert_eq!(params.project_id.as_deref(), Some(project.as_str()));
            prop_assert_eq!(params.group_workspace_id.as_deref(), Some(group.as_str()));
        }

        #[test]
        fn gav_route_recovers_coordinates(
            group in "[a-z][a-z0-9.]{0,12}",
            artifact in "[a-z][a-z0-9-]{0,12}",
            version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
            entity in proptest::option::of(identifier()),
        ) {
            let path = generate_view_project_by_gav_route(&group, &artifact, &version, entity.as_deref()).unwrap();
            let pattern = if entity.is_some() { RoutePattern::ViewByGavEntity } else { RoutePattern::ViewByGav };
            let params = match_path(pattern, &path).unwrap().unwrap();
            let gav = crate::domain::identities::parse_gav_coordinates(params.gav.as_deref().unwrap()).unwrap();
            prop_assert_eq!(gav.group_id, group);
            prop_assert_eq!(gav.artifact_id, artifact);
            prop_assert_eq!(gav.version_id, version);
            prop_assert_eq!(params.entity_path, entity);
        }
    }
}
