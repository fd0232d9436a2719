mod depot_server;
mod graph_manager;
mod sdlc_server;

pub use depot_server::DepotServerPort;
pub use graph_manager::GraphManagerStatePort;
pub use sdlc_server::{SdlcServerPort, Workspace};
