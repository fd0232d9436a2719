pub mod loader;
pub mod studio_config;

pub use loader::{load_config, parse_config_content};
pub use studio_config::{ApplicationVersion, ServiceEndpointData, StudioConfig, StudioConfigData};
