//! Observer hooks for tracing and data collection.

use sn_core::Tick;
use sn_fleet::Vessel;

use crate::PortMap;

/// What happened during one call to [`World::advance_with`][crate::World::advance_with].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    /// Vessels that changed position this tick.
    pub moved:           usize,
    /// Vessels that landed on their destination this tick.
    pub arrived:         usize,
    /// Vessels that went dead in the water this tick.
    pub stranded:        usize,
    /// Vessels still Moving or on a Course once the tick finished.
    pub moving_vessels:  usize,
    /// Total fuel held by all ports once the tick finished.
    pub port_fuel_total: f64,
}

/// Callbacks invoked by [`World::advance_with`][crate::World::advance_with].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct Arrivals;
///
/// impl SimObserver for Arrivals {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if summary.arrived > 0 {
///             println!("tick {tick}: {} arrivals", summary.arrived);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any port produces.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every port and vessel has been updated.  `tick` is the
    /// tick that was just processed.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called after `on_tick_end` with read-only access to the whole world
    /// state as it stands at the end of `tick`.
    fn on_snapshot(&mut self, _tick: Tick, _ports: &PortMap, _vessels: &[Vessel]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
