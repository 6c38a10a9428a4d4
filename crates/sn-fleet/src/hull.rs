//! Per-kind hull constants.

/// Fixed performance figures of a vessel kind, set at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HullSpec {
    /// Top speed in nm/hr.
    pub max_speed:        f64,
    /// Tank capacity in kl.
    pub max_fuel:         f64,
    /// Fuel burnt per nautical mile travelled, in kl.  Zero means the
    /// vessel's fuel is not simulated at all.
    pub fuel_consumption: f64,
}

impl HullSpec {
    pub const FREIGHTER: HullSpec = HullSpec {
        max_speed:        40.0,
        max_fuel:         500.0,
        fuel_consumption: 1.0,
    };

    pub const PATROL_BOAT: HullSpec = HullSpec {
        max_speed:        15.0,
        max_fuel:         900.0,
        fuel_consumption: 2.0,
    };

    pub const CRUISER: HullSpec = HullSpec {
        max_speed:        75.0,
        max_fuel:         0.0,
        fuel_consumption: 0.0,
    };

    /// `true` if `speed` is a legal ordered speed for this hull.
    #[inline]
    pub fn accepts_speed(&self, speed: f64) -> bool {
        speed > 0.0 && speed <= self.max_speed
    }
}
