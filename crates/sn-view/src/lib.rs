//! `sn-view` — renders ports and vessels onto a square ASCII chart.
//!
//! The renderer only needs a name and a location for each object, so it
//! takes `&dyn Entity` and knows nothing about ports, vessels, or the world.

pub mod error;
pub mod map;


pub use error::{ViewError, ViewResult};
pub use map::MapView;
