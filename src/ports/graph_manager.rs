use std::fmt;
use std::sync::Arc;

use crate::domain::StudioPluginManager;

/// Port for the in-memory model graph the editor operates on.
pub trait GraphManagerStatePort: fmt::Debug + Send + Sync {
    /// Plugin manager the graph was built with.
    fn plugin_manager(&self) -> &Arc<StudioPluginManager>;

    /// Paths of every entity currently in the graph.
    fn entity_paths(&self) -> Vec<String>;
}
