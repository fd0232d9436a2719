//! Test doubles and fixture factories for code that builds on the studio store.

pub mod fixtures;
pub mod ports;

pub use fixtures::{StudioConfigOverrides, make_test_config, make_test_store};
pub use ports::{FakeDepotServer, FakeGraphManagerState, FakeSdlcServer};
