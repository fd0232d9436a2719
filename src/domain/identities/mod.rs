pub mod gav;
pub mod workspace_kind;

pub use gav::{GAV_DELIMITER, GavCoordinates, generate_gav_coordinates, parse_gav_coordinates};
pub use workspace_kind::WorkspaceKind;
