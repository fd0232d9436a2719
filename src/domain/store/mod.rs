pub mod application_store;
pub mod editor_store;
pub mod plugin_manager;

pub use application_store::ApplicationStore;
pub use editor_store::EditorStore;
pub use plugin_manager::{PluginInfo, StudioPluginManager};
