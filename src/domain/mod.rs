pub mod configuration;
pub mod error;
pub mod identities;
pub mod routes;
pub mod store;

pub use configuration::{
    ApplicationVersion, ServiceEndpointData, StudioConfig, StudioConfigData, load_config,
    parse_config_content,
};
pub use error::{AppError, RouteError};
pub use identities::{GavCoordinates, WorkspaceKind};
pub use routes::{PathParam, PathParams, RoutePattern, URL_PATH_PLACEHOLDER};
pub use store::{ApplicationStore, EditorStore, PluginInfo, StudioPluginManager};
