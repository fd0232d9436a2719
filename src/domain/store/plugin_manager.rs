use serde::Serialize;

/// Identity of a registered studio plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
}

impl PluginInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }
}

/// Registry of plugins shared by the graph manager and the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudioPluginManager {
    plugins: Vec<PluginInfo>,
}

impl StudioPluginManager {
    /// Name of the plugin every manager starts with.
    pub const CORE_PLUGIN: &'static str = "studio-core";

    /// Manager with the core plugin registered.
    pub fn create() -> Self {
        Self { plugins: vec![PluginInfo::new(Self::CORE_PLUGIN, env!("CARGO_PKG_VERSION"))] }
    }

    /// Register `plugin`, replacing any plugin of the same name.
    pub fn with_plugin(mut self, plugin: PluginInfo) -> Self {
        self.plugins.retain(|existing| existing.name != plugin.name);
        self.plugins.push(plugin);
        self
    }

    pub fn plugins(&self) -> &[PluginInfo] {
        &self.plugins
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name == name)
    }
}
