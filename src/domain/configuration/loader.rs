//! Studio configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::domain::configuration::StudioConfigData;

/// Load and parse a studio config file.
pub fn load_config(path: &Path) -> Result<StudioConfigData, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::ConfigMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;
    debug!(path = %path.display(), "loaded studio config");
    parse_config_content(&content)
}

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<StudioConfigData, AppError> {
    let data: StudioConfigData = toml::from_str(content)?;
    Ok(data)
}
