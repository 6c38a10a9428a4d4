//! simnautica — interactive front end for the maritime simulation.
//!
//! The binary reads a port file, builds a [`World`][sn_sim::World], then
//! hands it to a [`Controller`] which reads one command per line:
//!
//! ```text
//! Time 0: Enter command: create Ever Freighter (0, 0) 3 10
//! Time 0: Enter command: Ever destination Nagoya 20
//! Time 0: Enter command: go
//! Time 1: Enter command: status
//! ```
//!
//! Everything the controller prints goes to caller-supplied writers, so a
//! whole session can be driven from a string in tests.

pub mod controller;
pub mod error;
pub mod setup;


pub use controller::{Controller, Flow};
pub use error::{CommandError, CommandResult};
pub use setup::load_world;
