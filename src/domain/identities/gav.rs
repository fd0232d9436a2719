use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::RouteError;

/// Separator between group, artifact and version in a coordinate string.
pub const GAV_DELIMITER: char = ':';

/// Address of one published artifact version in the depot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GavCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version_id: String,
}

impl GavCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version_id: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version_id: version_id.into(),
        }
    }
}

impl fmt::Display for GavCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.group_id, GAV_DELIMITER, self.artifact_id, GAV_DELIMITER, self.version_id
        )
    }
}

impl FromStr for GavCoordinates {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(GAV_DELIMITER).collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group, *artifact, *version))
            }
            _ => Err(RouteError::InvalidGavCoordinates(s.to_string())),
        }
    }
}

/// Join group, artifact and version into the coordinate string used in archive routes.
pub fn generate_gav_coordinates(group_id: &str, artifact_id: &str, version_id: &str) -> String {
    GavCoordinates::new(group_id, artifact_id, version_id).to_string()
}

pub fn parse_gav_coordinates(gav: &str) -> Result<GavCoordinates, RouteError> {
    gav.parse()
}
