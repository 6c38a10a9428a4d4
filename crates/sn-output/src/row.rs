//! Plain data rows written by trace backends.

use serde::Serialize;
use sn_core::{Entity, Tick};
use sn_fleet::Vessel;

/// One vessel's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselSnapshotRow {
    pub tick:        u64,
    pub name:        String,
    pub kind:        &'static str,
    pub x:           f64,
    pub y:           f64,
    pub state:       &'static str,
    pub speed:       f64,
    pub heading:     f64,
    /// Always 0 for vessels whose fuel is not simulated.
    pub fuel:        f64,
    /// Resistance, or force for a cruiser.
    pub combat_stat: i32,
}

impl VesselSnapshotRow {
    pub fn capture(tick: Tick, vessel: &Vessel) -> Self {
        let at = vessel.location();
        Self {
            tick:        tick.0,
            name:        vessel.name().to_owned(),
            kind:        vessel.class().as_str(),
            x:           at.x,
            y:           at.y,
            state:       vessel.state().as_str(),
            speed:       vessel.speed(),
            heading:     vessel.heading(),
            fuel:        vessel.fuel(),
            combat_stat: vessel.combat_stat(),
        }
    }
}

/// World-wide totals for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub moving_vessels:  u64,
    pub port_fuel_total: f64,
}
