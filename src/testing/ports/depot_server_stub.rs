use std::collections::BTreeMap;
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::DepotServerPort;

/// In-memory depot keyed by `(group_id, artifact_id)`.
#[derive(Debug)]
pub struct FakeDepotServer {
    base_url: Url,
    pub versions: Mutex<BTreeMap<(String, String), Vec<String>>>,
}

impl FakeDepotServer {
    pub fn new(base_url: Url) -> Self {
        Self { base_url, versions: Mutex::new(BTreeMap::new()) }
    }

    pub fn publish(&self, group_id: &str, artifact_id: &str, version_id: &str) {
        self.versions
            .lock()
            .unwrap()
            .entry((group_id.to_string(), artifact_id.to_string()))
            .or_default()
            .push(version_id.to_string());
    }
}

impl DepotServerPort for FakeDepotServer {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_versions(&self, group_id: &str, artifact_id: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .versions
            .lock()
            .unwrap()
            .get(&(group_id.to_string(), artifact_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
