//! `sn-core` — foundational types for the `simnautica` maritime simulation.
//!
//! This crate is a dependency of every other `sn-*` crate.  It intentionally
//! has no `sn-*` dependencies and a single external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, compass bearing and planar distance          |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `HomePort`                               |
//! | [`entity`]      | `Entity` trait shared by ports and vessels            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod entity;
pub mod error;
pub mod geo;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HomePort, SimConfig};
pub use entity::Entity;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, checked_heading};
pub use time::{SimClock, Tick};
