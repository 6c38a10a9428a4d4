//! `sn-fleet` — ports, vessels, and the per-vessel navigation/fuel state
//! machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`hull`]      | `HullSpec` — per-kind speed, tank and burn-rate constants       |
//! | [`nav`]       | `NavState`, `Destination`, `Navigation`                         |
//! | [`fuel`]      | `FuelTank` — clamped fuel level and per-nm consumption          |
//! | [`vessel`]    | `Vessel`, `VesselKind`, `VesselClass`, `Cargo`, combat          |
//! | [`port`]      | `Port` — fuel production and first-come-first-served dispensing |
//! | [`status`]    | `Display` impls producing the one-line status reports           |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                                  |
//!
//! # Movement model (hourly tick)
//!
//! One tick is one hour, so a vessel moving at `speed` nm/hr covers `speed`
//! nm per [`Vessel::update`]:
//!
//! 1. Stopped, docked and dead-in-the-water vessels do nothing.
//! 2. A vessel with a burn rate and an empty tank goes dead in the water.
//! 3. A vessel bound for a destination re-aims at it and caps the step at
//!    the remaining distance, landing exactly on the destination.
//! 4. The step is applied along the heading and `step × burn rate` fuel is
//!    deducted, floored at zero.
//!
//! Docking, refuelling and combat are commands issued from outside; the
//! state machine never triggers them on its own.

pub mod error;
pub mod fuel;
pub mod hull;
pub mod nav;
pub mod port;
pub mod status;
pub mod vessel;


pub use error::{FleetError, FleetResult};
pub use fuel::FuelTank;
pub use hull::HullSpec;
pub use nav::{Destination, NavState, Navigation};
pub use port::Port;
pub use vessel::{Cargo, CombatOutcome, TickOutcome, Vessel, VesselClass, VesselKind};
