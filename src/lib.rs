//! studio-router: route templates and typed path builders for the studio client-side router.

pub mod app;
pub mod domain;
pub mod ports;
pub mod testing;

pub use domain::identities::{generate_gav_coordinates, parse_gav_coordinates};
pub use domain::routes::{
    EditorPathParams, GroupEditorPathParams, ReviewPathParams, SetupPathParams, ViewerPathParams,
    encode_path_value, generate_editor_route, generate_path, generate_review_route, generate_setup_route,
    generate_view_entity_route, generate_view_project_by_gav_route,
    generate_view_project_entity_by_gav_route, generate_view_project_route,
    generate_view_revision_route, generate_view_version_route, match_path, match_route,
};
pub use domain::{
    AppError, ApplicationStore, ApplicationVersion, EditorStore, GavCoordinates, PathParam,
    PathParams, PluginInfo, RouteError, RoutePattern, ServiceEndpointData, StudioConfig,
    StudioConfigData, StudioPluginManager, URL_PATH_PLACEHOLDER, WorkspaceKind, load_config,
    parse_config_content,
};
