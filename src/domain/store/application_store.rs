use crate::domain::StudioConfig;

/// Application-wide state: the configuration the studio was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStore {
    config: StudioConfig,
}

impl ApplicationStore {
    pub fn new(config: StudioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Prefix a route path with the deployed base path.
    pub fn navigation_url(&self, route: &str) -> String {
        let base = self.config.base_url().trim_end_matches('/');
        format!("{}/{}", base, route.trim_start_matches('/'))
    }
}
