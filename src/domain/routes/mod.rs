//! Studio route table, typed substitution, and path builders.

pub mod builders;
pub mod params;
pub mod pattern;
pub mod substitution;

pub use builders::{
    generate_editor_route, generate_review_route, generate_setup_route,
    generate_view_entity_route, generate_view_project_by_gav_route,
    generate_view_project_entity_by_gav_route, generate_view_project_route,
    generate_view_revision_route, generate_view_version_route,
};
pub use params::{
    EditorPathParams, GroupEditorPathParams, PathParams, ReviewPathParams, SetupPathParams,
    ViewerPathParams,
};
pub use pattern::{PathParam, RoutePattern, Segment, URL_PATH_PLACEHOLDER};
pub use substitution::{encode_path_value, generate_path, match_path, match_route};
