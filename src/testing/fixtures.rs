//! Baseline configuration and editor store for tests.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    ApplicationStore, ApplicationVersion, EditorStore, ServiceEndpointData, StudioConfig,
    StudioConfigData, StudioPluginManager, URL_PATH_PLACEHOLDER,
};

use super::ports::{FakeDepotServer, FakeGraphManagerState, FakeSdlcServer};

pub const TEST_DATA_APP_NAME: &str = "test-studio-app";
pub const TEST_DATA_ENV: &str = "test-env";
pub const TEST_DATA_SDLC_URL: &str = "https://testSdlcUrl";
pub const TEST_DATA_ENGINE_URL: &str = "https://testEngineUrl";
pub const TEST_DATA_DEPOT_URL: &str = "https://testMetadataUrl";
pub const TEST_DATA_DOCUMENTATION_URL: &str = "https://testDocUrl";
pub const TEST_DATA_BASE_URL: &str = "/studio/";

/// Sample config record every test config starts from.
pub fn test_data_studio_config() -> StudioConfigData {
    StudioConfigData {
        app_name: TEST_DATA_APP_NAME.to_string(),
        env: TEST_DATA_ENV.to_string(),
        sdlc: endpoint("sdlc", TEST_DATA_SDLC_URL),
        engine: endpoint("engine", TEST_DATA_ENGINE_URL),
        depot: endpoint("depot", TEST_DATA_DEPOT_URL),
        documentation: endpoint("documentation", TEST_DATA_DOCUMENTATION_URL),
    }
}

pub fn test_data_application_version() -> ApplicationVersion {
    ApplicationVersion {
        version: "test-version".to_string(),
        build_time: "2001-01-01T00:00:00-0000".to_string(),
        commit_sha: "test-commit-id".to_string(),
    }
}

/// Parse an endpoint from a literal that is known to be valid.
pub fn endpoint(field: &str, url: &str) -> ServiceEndpointData {
    ServiceEndpointData::parse(field, url).expect("test endpoint URL should be valid")
}

/// Top-level keys of the sample config that a test may replace wholesale.
#[derive(Debug, Clone, Default)]
pub struct StudioConfigOverrides {
    pub app_name: Option<String>,
    pub env: Option<String>,
    pub sdlc: Option<ServiceEndpointData>,
    pub engine: Option<ServiceEndpointData>,
    pub depot: Option<ServiceEndpointData>,
    pub documentation: Option<ServiceEndpointData>,
}

impl StudioConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    pub fn sdlc_url(mut self, url: &str) -> Self {
        self.sdlc = Some(endpoint("sdlc", url));
        self
    }

    pub fn engine_url(mut self, url: &str) -> Self {
        self.engine = Some(endpoint("engine", url));
        self
    }

    pub fn depot_url(mut self, url: &str) -> Self {
        self.depot = Some(endpoint("depot", url));
        self
    }

    pub fn documentation_url(mut self, url: &str) -> Self {
        self.documentation = Some(endpoint("documentation", url));
        self
    }

    /// Shallow merge: each present override replaces the whole baseline key.
    pub fn apply(self, base: StudioConfigData) -> StudioConfigData {
        StudioConfigData {
            app_name: self.app_name.unwrap_or(base.app_name),
            env: self.env.unwrap_or(base.env),
            sdlc: self.sdlc.unwrap_or(base.sdlc),
            engine: self.engine.unwrap_or(base.engine),
            depot: self.depot.unwrap_or(base.depot),
            documentation: self.documentation.unwrap_or(base.documentation),
        }
    }
}

/// Sample config with `overrides` applied, served from `/studio/` with the placeholder SDLC server key.
pub fn make_test_config(overrides: StudioConfigOverrides) -> StudioConfig {
    let data = overrides.apply(test_data_studio_config());
    StudioConfig::new(
        data,
        test_data_application_version(),
        TEST_DATA_BASE_URL,
        URL_PATH_PLACEHOLDER,
    )
    .expect("test studio config should be valid")
}

/// Fresh editor store over in-memory collaborators.
///
/// A default plugin manager is created when none is given; the graph
/// manager state and the store share the same one.
pub fn make_test_store(plugin_manager: Option<Arc<StudioPluginManager>>) -> EditorStore {
    let plugin_manager =
        plugin_manager.unwrap_or_else(|| Arc::new(StudioPluginManager::create()));
    let config = make_test_config(StudioConfigOverrides::default());
    let sdlc = Arc::new(FakeSdlcServer::new(config.sdlc_url().clone()));
    let depot = Arc::new(FakeDepotServer::new(config.depot_url().clone()));
    let graph = Arc::new(FakeGraphManagerState::new(Arc::clone(&plugin_manager)));
    debug!(plugins = plugin_manager.plugins().len(), "assembled test editor store");

    EditorStore::new(ApplicationStore::new(config), sdlc, depot, graph, plugin_manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PluginInfo;
    use tracing_test::traced_test;

    #[test]
    fn engine_override_replaces_only_engine() {
        let config = make_test_config(StudioConfigOverrides::new().engine_url("https://x"));
        let baseline = make_test_config(StudioConfigOverrides::default());

        assert_eq!(config.engine_url().as_str(), "https://x/");
        assert_eq!(config.sdlc_url(), baseline.sdlc_url());
        assert_eq!(config.depot_url(), baseline.depot_url());
        assert_eq!(config.documentation_url(), baseline.documentation_url());
        assert_eq!(config.app_name(), TEST_DATA_APP_NAME);
        assert_eq!(config.env(), TEST_DATA_ENV);
    }

    #[test]
    fn test_config_is_fully_configured_at_construction() {
        let config = make_test_config(StudioConfigOverrides::default());
        assert_eq!(config.sdlc_server_key(), URL_PATH_PLACEHOLDER);
        assert_eq!(config.base_url(), TEST_DATA_BASE_URL);
        assert_eq!(config.version(), &test_data_application_version());
        assert_eq!(config.sdlc_url().as_str(), "https://testsdlcurl/");
    }

    #[test]
    fn test_config_is_deterministic() {
        let overrides = StudioConfigOverrides::new().app_name("other").env("ci");
        assert_eq!(make_test_config(overrides.clone()), make_test_config(overrides));
    }

    #[test]
    fn test_stores_are_independent() {
        let first = make_test_store(None);
        let second = make_test_store(None);

        assert_eq!(first.application_store().config(), second.application_store().config());
        assert!(!Arc::ptr_eq(first.sdlc_server_client(), second.sdlc_server_client()));
        assert!(!Arc::ptr_eq(first.depot_server_client(), second.depot_server_client()));
        assert!(!Arc::ptr_eq(first.graph_manager_state(), second.graph_manager_state()));
        assert!(!Arc::ptr_eq(first.plugin_manager(), second.plugin_manager()));
    }

    #[test]
    fn supplied_plugin_manager_is_shared_with_graph() {
        let manager =
            Arc::new(StudioPluginManager::create().with_plugin(PluginInfo::new("query", "1.0.0")));
        let store = make_test_store(Some(Arc::clone(&manager)));

        assert!(Arc::ptr_eq(store.plugin_manager(), &manager));
        assert!(Arc::ptr_eq(store.graph_manager_state().plugin_manager(), &manager));
        assert!(store.plugin_manager().has_plugin("query"));
    }

    #[test]
    fn default_plugin_manager_has_core_plugin() {
        let store = make_test_store(None);
        assert!(store.plugin_manager().has_plugin(StudioPluginManager::CORE_PLUGIN));
        assert!(Arc::ptr_eq(store.graph_manager_state().plugin_manager(), store.plugin_manager()));
    }

    #[test]
    fn clients_point_at_configured_endpoints() {
        let store = make_test_store(None);
        let config = store.application_store().config();
        assert_eq!(store.sdlc_server_client().base_url(), config.sdlc_url());
        assert_eq!(store.depot_server_client().base_url(), config.depot_url());
    }

    #[test]
    #[traced_test]
    fn store_assembly_is_logged() {
        make_test_store(None);
        assert!(logs_contain("assembled test editor store"));
    }
}
