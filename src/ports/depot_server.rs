//! Artifact depot server port definition.

use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Port for the depot that serves published project versions.
pub trait DepotServerPort: fmt::Debug + Send + Sync {
    /// Base URL requests are issued against.
    fn base_url(&self) -> &Url;

    /// Published versions of an artifact, oldest first.
    fn get_versions(&self, group_id: &str, artifact_id: &str) -> Result<Vec<String>, AppError>;
}
