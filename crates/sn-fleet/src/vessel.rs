//! Vessels: the shared navigation/fuel record plus kind-specific payloads.

use std::fmt;

use sn_core::{Entity, Point};
use tracing::debug;

use crate::{Destination, FleetError, FleetResult, FuelTank, HullSpec, NavState, Navigation};

// ── Kinds ─────────────────────────────────────────────────────────────────────

/// The three vessel kinds, without payload.  Used for typed lookup and error
/// reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VesselClass {
    Freighter,
    PatrolBoat,
    Cruiser,
}

impl VesselClass {
    /// The word used for this kind in commands and status lines.
    pub fn as_str(self) -> &'static str {
        match self {
            VesselClass::Freighter  => "Freighter",
            VesselClass::PatrolBoat => "Patrol_boat",
            VesselClass::Cruiser    => "Cruiser",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Freighter"   => Some(VesselClass::Freighter),
            "Patrol_boat" => Some(VesselClass::PatrolBoat),
            "Cruiser"     => Some(VesselClass::Cruiser),
            _ => None,
        }
    }

    pub fn hull(self) -> HullSpec {
        match self {
            VesselClass::Freighter  => HullSpec::FREIGHTER,
            VesselClass::PatrolBoat => HullSpec::PATROL_BOAT,
            VesselClass::Cruiser    => HullSpec::CRUISER,
        }
    }
}

impl fmt::Display for VesselClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cargo hold of a freighter, with its standing load/unload orders.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Cargo {
    pub(crate) containers:     u32,
    pub(crate) max_containers: u32,
    pub(crate) load_port:      Option<String>,
    pub(crate) unload_port:    Option<String>,
    pub(crate) unload_count:   u32,
}

impl Cargo {
    pub fn empty(max_containers: u32) -> Self {
        Self { max_containers, ..Self::default() }
    }

    #[inline]
    pub fn containers(&self) -> u32 {
        self.containers
    }

    #[inline]
    pub fn max_containers(&self) -> u32 {
        self.max_containers
    }

    pub fn load_port(&self) -> Option<&str> {
        self.load_port.as_deref()
    }

    pub fn unload_port(&self) -> Option<&str> {
        self.unload_port.as_deref()
    }

    pub fn unload_count(&self) -> u32 {
        self.unload_count
    }
}

/// Kind-specific payload carried by a [`Vessel`].
#[derive(Clone, Debug, PartialEq)]
pub enum VesselKind {
    Freighter(Cargo),
    PatrolBoat,
    /// Pirate cruiser.  The range is informational: callers decide whether a
    /// target is close enough before ordering an attack.
    Cruiser { attack_range: u32 },
}

impl VesselKind {
    pub fn class(&self) -> VesselClass {
        match self {
            VesselKind::Freighter(_)  => VesselClass::Freighter,
            VesselKind::PatrolBoat    => VesselClass::PatrolBoat,
            VesselKind::Cruiser { .. } => VesselClass::Cruiser,
        }
    }
}

// ── Tick and combat results ───────────────────────────────────────────────────

/// What a single [`Vessel::update`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Stationary; nothing happened.
    Idle,
    /// Travelled `distance` nm.
    Moved { distance: f64 },
    /// Travelled `distance` nm and landed on the destination.
    Arrived { distance: f64 },
    /// Ran dry and is now dead in the water (after travelling `distance`).
    Stranded { distance: f64 },
}

/// Result of one cruiser attack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    /// `true` when the pirate won.
    pub victory:         bool,
    pub attacker_stat:   i32,
    pub target_stat:     i32,
    pub containers_lost: u32,
}

// ── Vessel ────────────────────────────────────────────────────────────────────

/// One ship of any kind.
///
/// `combat_stat` is resistance for freighters and patrol boats and attack
/// force for cruisers.  It has no bounds and may go negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Vessel {
    name:        String,
    location:    Point,
    nav:         Navigation,
    fuel:        FuelTank,
    hull:        HullSpec,
    combat_stat: i32,
    kind:        VesselKind,
}

impl Vessel {
    fn build(name: String, location: Point, combat_stat: i32, kind: VesselKind) -> Self {
        let hull = kind.class().hull();
        Self {
            name,
            location,
            nav: Navigation::stopped(),
            fuel: FuelTank::full(&hull),
            hull,
            combat_stat,
            kind,
        }
    }

    /// A freighter with an empty hold and a full tank.
    pub fn freighter(name: impl Into<String>, location: Point, resistance: i32, max_containers: u32) -> Self {
        Self::build(name.into(), location, resistance, VesselKind::Freighter(Cargo::empty(max_containers)))
    }

    /// A patrol boat with a full tank.
    pub fn patrol_boat(name: impl Into<String>, location: Point, resistance: i32) -> Self {
        Self::build(name.into(), location, resistance, VesselKind::PatrolBoat)
    }

    /// A pirate cruiser.  Its fuel is not simulated.
    pub fn cruiser(name: impl Into<String>, location: Point, force: i32, attack_range: u32) -> Self {
        Self::build(name.into(), location, force, VesselKind::Cruiser { attack_range })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.nav.speed()
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.nav.heading()
    }

    #[inline]
    pub fn fuel(&self) -> f64 {
        self.fuel.level()
    }

    #[inline]
    pub fn max_fuel(&self) -> f64 {
        self.hull.max_fuel
    }

    #[inline]
    pub fn max_speed(&self) -> f64 {
        self.hull.max_speed
    }

    #[inline]
    pub fn fuel_consumption(&self) -> f64 {
        self.hull.fuel_consumption
    }

    pub fn hull(&self) -> &HullSpec {
        &self.hull
    }

    #[inline]
    pub fn combat_stat(&self) -> i32 {
        self.combat_stat
    }

    pub fn kind(&self) -> &VesselKind {
        &self.kind
    }

    #[inline]
    pub fn class(&self) -> VesselClass {
        self.kind.class()
    }

    /// The cargo hold, for freighters.
    pub fn cargo(&self) -> Option<&Cargo> {
        match &self.kind {
            VesselKind::Freighter(cargo) => Some(cargo),
            _ => None,
        }
    }

    /// Attack range in nm, for cruisers.
    pub fn attack_range(&self) -> Option<u32> {
        match self.kind {
            VesselKind::Cruiser { attack_range } => Some(attack_range),
            _ => None,
        }
    }

    fn wrong_kind(&self, expected: VesselClass) -> FleetError {
        FleetError::WrongKind { name: self.name.clone(), expected }
    }

    fn cargo_mut(&mut self) -> FleetResult<&mut Cargo> {
        match &mut self.kind {
            VesselKind::Freighter(cargo) => Ok(cargo),
            _ => Err(FleetError::WrongKind {
                name:     self.name.clone(),
                expected: VesselClass::Freighter,
            }),
        }
    }

    // ── Navigation commands ───────────────────────────────────────────────

    pub fn stop(&mut self) {
        self.nav.stop();
    }

    pub fn set_course(&mut self, heading: f64, speed: f64) {
        self.nav.set_course(heading, speed);
    }

    pub fn set_destination(&mut self, point: Point, speed: f64) {
        self.nav.set_destination(self.location, Destination::coordinates(point), speed);
    }

    pub fn set_port_destination(&mut self, point: Point, speed: f64, port: &str) {
        self.nav.set_destination(self.location, Destination::port(point, port), speed);
    }

    /// Tie up at `port`, snapping onto its location.
    ///
    /// Whether the vessel is close enough to dock is the caller's decision.
    pub fn dock(&mut self, port: &str, port_location: Point) {
        self.location = port_location;
        self.nav.dock(port);
    }

    /// Add up to `amount` kl, capped at the tank capacity.  Returns the
    /// amount actually taken on.
    pub fn refuel(&mut self, amount: f64) -> f64 {
        self.fuel.refuel(amount)
    }

    /// Fuel required to fill the tank.
    #[inline]
    pub fn fuel_needed(&self) -> f64 {
        self.fuel.headroom()
    }

    /// Advance this vessel by one tick.
    pub fn update(&mut self) -> TickOutcome {
        if !self.nav.is_underway() {
            return TickOutcome::Idle;
        }
        if self.fuel.is_exhausted() {
            self.nav.strand();
            debug!(vessel = %self.name, "dead in the water");
            return TickOutcome::Stranded { distance: 0.0 };
        }

        let mut step = self.nav.speed;
        let mut landing = None;

        if self.nav.state == NavState::Moving {
            if let Some(target) = self.nav.destination.as_ref().map(|d| d.point) {
                let remaining = self.location.distance_to(target);
                if remaining > 0.0 {
                    self.nav.heading = self.location.bearing_to(target);
                }
                if step >= remaining {
                    step = remaining;
                    landing = Some(target);
                }
            }
        }

        self.location = match landing {
            Some(target) => target,
            None => self.location.advanced(self.nav.heading, step),
        };
        self.fuel.burn(step);

        if self.fuel.is_exhausted() {
            self.nav.strand();
            debug!(vessel = %self.name, distance = step, "ran out of fuel");
            return TickOutcome::Stranded { distance: step };
        }
        if landing.is_some() && step > 0.0 {
            debug!(vessel = %self.name, at = %self.location, "reached destination");
            return TickOutcome::Arrived { distance: step };
        }
        TickOutcome::Moved { distance: step }
    }

    // ── Combat ────────────────────────────────────────────────────────────

    /// Adjust this vessel after an attack in which the pirate won
    /// (`victory`) or lost.
    ///
    /// Freighters lose their whole cargo on defeat; patrol boats lose one
    /// point of resistance on defeat and gain one on success; a cruiser,
    /// adjusting itself after attacking, gains or loses one point of force.
    /// Stats saturate at the `i32` limits.
    pub fn apply_combat_result(&mut self, victory: bool) {
        match &mut self.kind {
            VesselKind::Freighter(cargo) => {
                if victory {
                    cargo.containers = 0;
                }
            }
            VesselKind::PatrolBoat => {
                self.combat_stat = self.combat_stat.saturating_add(if victory { -1 } else { 1 });
            }
            VesselKind::Cruiser { .. } => {
                self.combat_stat = self.combat_stat.saturating_add(if victory { 1 } else { -1 });
            }
        }
    }

    /// Attack `target` with this cruiser.
    ///
    /// The pirate wins when its force strictly exceeds the target's
    /// resistance.  Either way the target is stopped.  Range is not checked.
    pub fn attack(&mut self, target: &mut Vessel) -> FleetResult<CombatOutcome> {
        if self.class() != VesselClass::Cruiser {
            return Err(self.wrong_kind(VesselClass::Cruiser));
        }
        if target.class() == VesselClass::Cruiser {
            return Err(FleetError::InvalidTarget {
                attacker: self.name.clone(),
                target:   target.name.clone(),
            });
        }

        let victory = self.combat_stat > target.combat_stat;
        let containers_before = target.cargo().map_or(0, Cargo::containers);

        target.apply_combat_result(victory);
        self.apply_combat_result(victory);
        target.stop();

        let containers_after = target.cargo().map_or(0, Cargo::containers);
        Ok(CombatOutcome {
            victory,
            attacker_stat:   self.combat_stat,
            target_stat:     target.combat_stat,
            containers_lost: containers_before - containers_after,
        })
    }

    // ── Cargo ─────────────────────────────────────────────────────────────

    /// Fill the hold to capacity.  Returns the number of containers loaded.
    pub fn load_cargo(&mut self) -> FleetResult<u32> {
        let cargo = self.cargo_mut()?;
        let loaded = cargo.max_containers - cargo.containers.min(cargo.max_containers);
        cargo.containers = cargo.max_containers;
        Ok(loaded)
    }

    /// Remove up to `amount` containers; any excess is discarded.  Returns
    /// the number actually unloaded.
    pub fn unload_cargo(&mut self, amount: u32) -> FleetResult<u32> {
        let cargo = self.cargo_mut()?;
        let unloaded = amount.min(cargo.containers);
        cargo.containers -= unloaded;
        Ok(unloaded)
    }

    /// Standing order: load whenever docked at `port`.
    pub fn set_load_port(&mut self, port: &str) -> FleetResult<()> {
        self.cargo_mut()?.load_port = Some(port.to_owned());
        Ok(())
    }

    /// Standing order: unload `count` containers whenever docked at `port`.
    pub fn set_unload_port(&mut self, port: &str, count: u32) -> FleetResult<()> {
        let cargo = self.cargo_mut()?;
        cargo.unload_port = Some(port.to_owned());
        cargo.unload_count = count;
        Ok(())
    }

    /// Carry out whichever standing cargo orders name `port`.
    ///
    /// Returns `(loaded, unloaded)`.  Non-freighters report `(0, 0)`.
    pub fn handle_cargo_at(&mut self, port: &str) -> (u32, u32) {
        let VesselKind::Freighter(cargo) = &self.kind else {
            return (0, 0);
        };
        let load_here = cargo.load_port.as_deref() == Some(port);
        let unload_here = cargo.unload_port.as_deref() == Some(port);
        let count = cargo.unload_count;

        let loaded = if load_here { self.load_cargo().unwrap_or(0) } else { 0 };
        let unloaded = if unload_here { self.unload_cargo(count).unwrap_or(0) } else { 0 };
        (loaded, unloaded)
    }
}

impl Entity for Vessel {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Point {
        self.location
    }
}
