//! `sn-loader` — reads the port bootstrap file and registers its ports.
//!
//! # File format
//!
//! One port per line; blank lines are skipped.
//!
//! ```text
//! Haifa (10, 20) 5000 25
//! Kobe (-3.5,7) 100 0
//! ```
//!
//! The fields are name, location, initial fuel (kl) and production rate
//! (kl per tick).  The coordinate pair may be written as one token or split
//! after the comma.
//!
//! Parsing ([`load_ports_file`], [`load_ports_reader`]) and registration
//! ([`register_ports`]) are separate steps so a file can be validated without
//! touching a world.

pub mod coords;
pub mod error;
pub mod loader;


pub use coords::{parse_point, take_point};
pub use error::{LoadError, LoadResult};
pub use loader::{PortRecord, load_ports_file, load_ports_reader, register_ports};
