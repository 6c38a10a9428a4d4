//! Fuel bookkeeping.

use crate::HullSpec;

/// A vessel's fuel tank.
///
/// The level is kept in `[0, capacity]` at all times: burning floors at zero
/// and refuelling caps at capacity.  Over- and under-flow are physical limits,
/// not errors, so nothing here fails.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelTank {
    level:       f64,
    capacity:    f64,
    consumption: f64,
}

impl FuelTank {
    /// A tank for `hull`, filled to capacity.
    pub fn full(hull: &HullSpec) -> Self {
        Self {
            level:       hull.max_fuel,
            capacity:    hull.max_fuel,
            consumption: hull.fuel_consumption,
        }
    }

    /// A tank for `hull` holding `level` kl (clamped into range).
    pub fn with_level(hull: &HullSpec, level: f64) -> Self {
        Self {
            level:       level.clamp(0.0, hull.max_fuel),
            capacity:    hull.max_fuel,
            consumption: hull.fuel_consumption,
        }
    }

    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// `true` for hulls whose fuel is simulated.
    #[inline]
    pub fn is_metered(&self) -> bool {
        self.consumption > 0.0
    }

    /// A metered tank with nothing left in it.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.is_metered() && self.level <= 0.0
    }

    /// Free space left in the tank.
    #[inline]
    pub fn headroom(&self) -> f64 {
        self.capacity - self.level
    }

    /// Deduct the fuel needed to travel `distance` nm, flooring at zero.
    pub fn burn(&mut self, distance: f64) {
        if self.is_metered() {
            self.level = (self.level - distance * self.consumption).max(0.0);
        }
    }

    /// Add up to `amount` kl, capped at capacity.  Returns what was taken.
    pub fn refuel(&mut self, amount: f64) -> f64 {
        let before = self.level;
        self.level = (self.level + amount.max(0.0)).min(self.capacity);
        self.level - before
    }
}
