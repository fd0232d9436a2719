mod depot_server_stub;
mod graph_manager_stub;
mod sdlc_server_stub;

pub use self::depot_server_stub::FakeDepotServer;
pub use self::graph_manager_stub::FakeGraphManagerState;
pub use self::sdlc_server_stub::FakeSdlcServer;
