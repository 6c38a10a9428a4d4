//! `sn-sim` — the world registry and tick loop for simnautica.
//!
//! # Tick order
//!
//! ```text
//! advance():
//!   ① Ports    — every port produces fuel, in name order.
//!   ② Vessels  — every vessel updates, in creation order.
//!   ③ Clock    — the tick counter increments.
//! ```
//!
//! Fuel produced in ① is available to a vessel refuelling later in the same
//! tick.  Vessel order is pinned to creation order so that a replayed command
//! sequence reproduces every position and fuel level exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sn_core::{Point, SimConfig};
//! use sn_sim::World;
//!
//! let mut world = World::with_config(SimConfig::default())?;
//! world.add_freighter("Ever", Point::new(0.0, 0.0), 3, 10)?;
//! world.set_port_destination("Ever", "Nagoya", 20.0)?;
//! world.run_ticks(3, &mut sn_sim::NoopObserver);
//! world.print_status(&mut std::io::stdout())?;
//! ```

pub mod error;
pub mod observer;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use world::{DockOutcome, PortMap, World};
