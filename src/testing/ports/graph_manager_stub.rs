use std::sync::{Arc, Mutex};

use crate::domain::StudioPluginManager;
use crate::ports::GraphManagerStatePort;

/// Graph manager state holding a plain list of entity paths.
#[derive(Debug)]
pub struct FakeGraphManagerState {
    plugin_manager: Arc<StudioPluginManager>,
    pub entities: Mutex<Vec<String>>,
}

impl FakeGraphManagerState {
    pub fn new(plugin_manager: Arc<StudioPluginManager>) -> Self {
        Self { plugin_manager, entities: Mutex::new(Vec::new()) }
    }

    pub fn add_entity(&self, path: &str) {
        self.entities.lock().unwrap().push(path.to_string());
    }
}

impl GraphManagerStatePort for FakeGraphManagerState {
    fn plugin_manager(&self) -> &Arc<StudioPluginManager> {
        &self.plugin_manager
    }

    fn entity_paths(&self) -> Vec<String> {
        self.entities.lock().unwrap().clone()
    }
}
