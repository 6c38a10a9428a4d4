//! Top-level simulation configuration.
//!
//! Built by the application crate (from command-line flags) and passed to
//! the world when it is constructed.

use crate::{CoreError, CoreResult, Point};

/// A port registered automatically when a world is created.
#[derive(Clone, Debug, PartialEq)]
pub struct HomePort {
    pub name:         String,
    pub location:     Point,
    pub initial_fuel: f64,
    pub fuel_rate:    f64,
}

impl Default for HomePort {
    fn default() -> Self {
        Self {
            name:         "Nagoya".to_owned(),
            location:     Point::new(50.0, 5.0),
            initial_fuel: 1_000_000.0,
            fuel_rate:    1_000.0,
        }
    }
}

/// Simulation configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Seconds per tick.  Movement arithmetic treats speeds as nm per tick,
    /// so this only affects reporting.  Default: 3600.
    pub tick_duration_secs: u32,

    /// How close (nm) a vessel must be to a port before it may dock there.
    pub dock_tolerance_nm: f64,

    /// Longest accepted entity name.
    pub max_name_len: usize,

    /// Port created together with the world, if any.
    pub home_port: Option<HomePort>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 3_600,
            dock_tolerance_nm:  0.1,
            max_name_len:       12,
            home_port:          Some(HomePort::default()),
        }
    }
}

impl SimConfig {
    /// Reject settings the simulation cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be positive".into()));
        }
        if !(self.dock_tolerance_nm.is_finite() && self.dock_tolerance_nm >= 0.0) {
            return Err(CoreError::Config(format!(
                "dock tolerance must be a non-negative distance, got {}",
                self.dock_tolerance_nm
            )));
        }
        if self.max_name_len == 0 {
            return Err(CoreError::Config("max_name_len must be at least 1".into()));
        }
        Ok(())
    }
}
