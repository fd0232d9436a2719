use std::io;

use thiserror::Error;

use crate::domain::routes::PathParam;

/// Failure while building or matching a route path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A required placeholder had no value at substitution time.
    #[error("Missing value for path parameter '{param}' in route template '{template}'")]
    MissingParameter { param: PathParam, template: &'static str },

    /// The arguments select a route that cannot be built from them.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A GAV coordinate string does not split into group, artifact and version.
    #[error("Invalid GAV coordinates '{0}': expected 'groupId:artifactId:versionId'")]
    InvalidGavCoordinates(String),

    /// A path segment did not percent-decode to UTF-8.
    #[error("Path segment '{segment}' is not valid percent-encoded UTF-8")]
    InvalidEncoding { segment: String },

    /// A symbolic route name is not part of the route table.
    #[error("Unknown route '{0}'")]
    UnknownRoute(String),
}

impl RouteError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        RouteError::InvalidArgument(message.into())
    }
}

/// Library-wide error type for studio-router operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Route construction or matching failed.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Configuration values are present but unusable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file does not exist.
    #[error("Studio config not found: {0}")]
    ConfigMissing(String),

    /// A configured endpoint is not a valid absolute URL.
    #[error("Invalid URL for '{field}': {details}")]
    InvalidUrl { field: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
