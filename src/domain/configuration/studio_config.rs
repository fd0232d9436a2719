//! Studio deployment configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::routes::URL_PATH_PLACEHOLDER;

/// Location of one external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEndpointData {
    pub url: Url,
}

impl ServiceEndpointData {
    /// Parse `url`, reporting failures against `field`.
    pub fn parse(field: &str, url: &str) -> Result<Self, AppError> {
        let url = Url::parse(url).map_err(|e| AppError::InvalidUrl {
            field: field.to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { url })
    }
}

/// Raw configuration record as deployed alongside the studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudioConfigData {
    pub app_name: String,
    pub env: String,
    /// Source-control service.
    pub sdlc: ServiceEndpointData,
    /// Execution engine.
    pub engine: ServiceEndpointData,
    /// Artifact depot.
    pub depot: ServiceEndpointData,
    pub documentation: ServiceEndpointData,
}

/// Build metadata of the running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationVersion {
    pub version: String,
    pub build_time: String,
    #[serde(rename = "commitSHA")]
    pub commit_sha: String,
}

impl ApplicationVersion {
    /// Version info of this crate build, without build time or commit.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_time: String::new(),
            commit_sha: String::new(),
        }
    }
}

/// Validated studio configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    app_name: String,
    env: String,
    sdlc_url: Url,
    engine_url: Url,
    depot_url: Url,
    documentation_url: Url,
    version: ApplicationVersion,
    base_url: String,
    sdlc_server_key: String,
}

impl StudioConfig {
    /// Build a configuration for the deployment at `base_url`.
    ///
    /// `sdlc_server_key` selects which SDLC server the studio talks to;
    /// [`URL_PATH_PLACEHOLDER`] means the configured URL is used as is.
    pub fn new(
        data: StudioConfigData,
        version: ApplicationVersion,
        base_url: &str,
        sdlc_server_key: &str,
    ) -> Result<Self, AppError> {
        if data.app_name.trim().is_empty() {
            return Err(AppError::config_error("appName must not be empty"));
        }
        if data.env.trim().is_empty() {
            return Err(AppError::config_error("env must not be empty"));
        }
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(AppError::config_error(format!(
                "base URL '{}' must start and end with '/'",
                base_url
            )));
        }
        if sdlc_server_key.is_empty() || sdlc_server_key.contains('/') {
            return Err(AppError::config_error(format!(
                "SDLC server key '{}' must be a single non-empty path segment",
                sdlc_server_key
            )));
        }
        for (field, endpoint) in [
            ("sdlc", &data.sdlc),
            ("engine", &data.engine),
            ("depot", &data.depot),
            ("documentation", &data.documentation),
        ] {
            if !matches!(endpoint.url.scheme(), "http" | "https") {
                return Err(AppError::InvalidUrl {
                    field: field.to_string(),
                    details: format!("unsupported scheme '{}'", endpoint.url.scheme()),
                });
            }
        }

        Ok(Self {
            app_name: data.app_name,
            env: data.env,
            sdlc_url: data.sdlc.url,
            engine_url: data.engine.url,
            depot_url: data.depot.url,
            documentation_url: data.documentation.url,
            version,
            base_url: base_url.to_string(),
            sdlc_server_key: sdlc_server_key.to_string(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn sdlc_url(&self) -> &Url {
        &self.sdlc_url
    }

    pub fn engine_url(&self) -> &Url {
        &self.engine_url
    }

    pub fn depot_url(&self) -> &Url {
        &self.depot_url
    }

    pub fn documentation_url(&self) -> &Url {
        &self.documentation_url
    }

    pub fn version(&self) -> &ApplicationVersion {
        &self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sdlc_server_key(&self) -> &str {
        &self.sdlc_server_key
    }

    /// SDLC URL with the server key appended as a trailing segment.
    pub fn sdlc_server_url(&self) -> Result<Url, AppError> {
        if self.sdlc_server_key == URL_PATH_PLACEHOLDER {
            return Ok(self.sdlc_url.clone());
        }
        let mut url = self.sdlc_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl {
                field: "sdlc".to_string(),
                details: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push(&self.sdlc_server_key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> StudioConfigData {
        StudioConfigData {
            app_name: "studio".to_string(),
            env: "dev".to_string(),
            sdlc: ServiceEndpointData::parse("sdlc", "https://sdlc.example.com/api").unwrap(),
            engine: ServiceEndpointData::parse("engine", "https://engine.example.com").unwrap(),
            depot: ServiceEndpointData::parse("depot", "https://depot.example.com").unwrap(),
            documentation: ServiceEndpointData::parse("documentation", "https://docs.example.com")
                .unwrap(),
        }
    }

    #[test]
    fn builds_with_valid_values() {
        let config =
            StudioConfig::new(data(), ApplicationVersion::current(), "/studio/", "-").unwrap();
        assert_eq!(config.app_name(), "studio");
        assert_eq!(config.base_url(), "/studio/");
        assert_eq!(config.sdlc_server_key(), "-");
        assert_eq!(config.engine_url().as_str(), "https://engine.example.com/");
    }

    #[test]
    fn rejects_empty_app_name() {
        let data = StudioConfigData { app_name: " ".to_string(), ..data() };
        assert!(StudioConfig::new(data, ApplicationVersion::current(), "/", "-").is_err());
    }

    #[test]
    fn rejects_base_url_without_slashes() {
        for base in ["studio/", "/studio", ""] {
            assert!(
                StudioConfig::new(data(), ApplicationVersion::current(), base, "-").is_err(),
                "{}",
                base
            );
        }
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let data = StudioConfigData {
            depot: ServiceEndpointData::parse("depot", "ftp://depot.example.com").unwrap(),
            ..data()
        };
        let err = StudioConfig::new(data, ApplicationVersion::current(), "/", "-").unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { ref field, .. } if field == "depot"));
    }

    #[test]
    fn invalid_endpoint_names_the_field() {
        let err = ServiceEndpointData::parse("engine", "not a url").unwrap_err();
        assert!(err.to_string().contains("'engine'"));
    }

    #[test]
    fn server_url_ignores_placeholder_key() {
        let config =
            StudioConfig::new(data(), ApplicationVersion::current(), "/", URL_PATH_PLACEHOLDER)
                .unwrap();
        assert_eq!(config.sdlc_server_url().unwrap().as_str(), "https://sdlc.example.com/api");
    }

    #[test]
    fn server_url_appends_key() {
        let config = StudioConfig::new(data(), ApplicationVersion::current(), "/", "prod").unwrap();
        assert_eq!(config.sdlc_server_url().unwrap().as_str(), "https://sdlc.example.com/api/prod");
    }

    #[test]
    fn rejects_multi_segment_server_key() {
        assert!(StudioConfig::new(data(), ApplicationVersion::current(), "/", "a/b").is_err());
    }
}
