use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::RouteError;

/// Ownership of an SDLC workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceKind {
    /// Owned by a single user.
    #[default]
    Individual,
    /// Shared among the members of a project.
    Group,
}

impl WorkspaceKind {
    pub fn label(self) -> &'static str {
        match self {
            WorkspaceKind::Individual => "individual",
            WorkspaceKind::Group => "group",
        }
    }
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkspaceKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "individual" | "user" => Ok(WorkspaceKind::Individual),
            "group" => Ok(WorkspaceKind::Group),
            _ => Err(RouteError::invalid_argument(format!(
                "Invalid workspace kind '{}'. Expected 'individual' or 'group'.",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for kind in [WorkspaceKind::Individual, WorkspaceKind::Group] {
            assert_eq!(kind.label().parse::<WorkspaceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serde_uses_sdlc_names() {
        assert_eq!(serde_json::to_string(&WorkspaceKind::Group).unwrap(), "\"GROUP\"");
        let kind: WorkspaceKind = serde_json::from_str("\"INDIVIDUAL\"").unwrap();
        assert_eq!(kind, WorkspaceKind::Individual);
    }

    #[test]
    fn unknown_kind_is_invalid_argument() {
        assert!(matches!("shared".parse::<WorkspaceKind>(), Err(RouteError::InvalidArgument(_))));
    }
}
