//! The `World` struct: sole owner of every port and vessel, and of the clock.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};

use sn_core::{Entity, Point, SimClock, SimConfig, Tick, checked_heading};
use sn_fleet::{CombatOutcome, FleetError, NavState, Port, TickOutcome, Vessel, VesselClass};
use tracing::{debug, info};

use crate::{NoopObserver, SimError, SimObserver, SimResult, TickSummary};

/// Ports keyed by name.  Iteration order (sorted by name) is the order in
/// which ports produce and are reported.
pub type PortMap = BTreeMap<String, Port>;

/// Result of [`World::dock_at`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DockOutcome {
    /// The vessel was close enough and is now tied up.  Counts are the
    /// containers its standing orders loaded and unloaded there.
    Docked { loaded: u32, unloaded: u32 },
    /// The vessel was too far away and is now heading for the port at top
    /// speed.
    Underway { distance: f64 },
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The registry of everything afloat.
///
/// Ports and vessels share one namespace.  Vessels live in a `Vec` in
/// creation order, with a name → index map for lookup; that order is the
/// update order of [`advance`][World::advance] and the report order of
/// [`print_status`][World::print_status].
#[derive(Debug)]
pub struct World {
    config:       SimConfig,
    clock:        SimClock,
    ports:        PortMap,
    vessels:      Vec<Vessel>,
    vessel_index: HashMap<String, usize>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// An empty world with default settings and no ports.
    pub fn new() -> Self {
        let config = SimConfig { home_port: None, ..SimConfig::default() };
        Self {
            clock: SimClock::new(config.tick_duration_secs),
            config,
            ports: PortMap::new(),
            vessels: Vec::new(),
            vessel_index: HashMap::new(),
        }
    }

    /// A world built from `config`, with its home port already registered.
    pub fn with_config(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let home = config.home_port.clone();
        let mut world = Self {
            clock: SimClock::new(config.tick_duration_secs),
            config,
            ports: PortMap::new(),
            vessels: Vec::new(),
            vessel_index: HashMap::new(),
        };
        if let Some(home) = home {
            world.add_port(&home.name, home.location, home.initial_fuel, home.fuel_rate)?;
        }
        Ok(world)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks advanced so far.
    #[inline]
    pub fn time(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn ports(&self) -> &PortMap {
        &self.ports
    }

    /// All vessels in creation order.
    #[inline]
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// `true` if any port or vessel is called `name`.
    pub fn name_exists(&self, name: &str) -> bool {
        self.ports.contains_key(name) || self.vessel_index.contains_key(name)
    }

    pub fn vessel_exists(&self, name: &str) -> bool {
        self.vessel_index.contains_key(name)
    }

    /// Every port followed by every vessel, for map rendering.
    pub fn all_entities(&self) -> Vec<&dyn Entity> {
        let ports = self.ports.values().map(|p| p as &dyn Entity);
        let vessels = self.vessels.iter().map(|v| v as &dyn Entity);
        ports.chain(vessels).collect()
    }

    /// One status line per entity: ports first, then vessels in creation
    /// order.
    pub fn status_lines(&self) -> Vec<String> {
        let ports = self.ports.values().map(ToString::to_string);
        let vessels = self.vessels.iter().map(ToString::to_string);
        ports.chain(vessels).collect()
    }

    pub fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.status_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    // ── Creation ──────────────────────────────────────────────────────────

    fn claim_name(&self, name: &str) -> SimResult<()> {
        if self.name_exists(name) {
            return Err(SimError::NameConflict(name.to_owned()));
        }
        Ok(())
    }

    pub fn add_port(
        &mut self,
        name:         &str,
        location:     Point,
        initial_fuel: f64,
        fuel_rate:    f64,
    ) -> SimResult<&Port> {
        self.claim_name(name)?;
        let location = Point::checked(location.x, location.y)?;
        info!(port = name, at = %location, initial_fuel, fuel_rate, "port added");
        let port = self
            .ports
            .entry(name.to_owned())
            .or_insert_with(|| Port::new(name, location, initial_fuel, fuel_rate));
        Ok(port)
    }

    fn add_vessel(&mut self, vessel: Vessel) -> SimResult<&Vessel> {
        self.claim_name(vessel.name())?;
        Point::checked(vessel.location().x, vessel.location().y)?;
        info!(vessel = vessel.name(), class = %vessel.class(), at = %vessel.location(), "vessel added");
        let idx = self.vessels.len();
        self.vessel_index.insert(vessel.name().to_owned(), idx);
        self.vessels.push(vessel);
        Ok(&self.vessels[idx])
    }

    pub fn add_freighter(
        &mut self,
        name:           &str,
        location:       Point,
        resistance:     i32,
        max_containers: u32,
    ) -> SimResult<&Vessel> {
        self.add_vessel(Vessel::freighter(name, location, resistance, max_containers))
    }

    pub fn add_patrol(&mut self, name: &str, location: Point, resistance: i32) -> SimResult<&Vessel> {
        self.add_vessel(Vessel::patrol_boat(name, location, resistance))
    }

    pub fn add_cruiser(
        &mut self,
        name:         &str,
        location:     Point,
        force:        i32,
        attack_range: u32,
    ) -> SimResult<&Vessel> {
        self.add_vessel(Vessel::cruiser(name, location, force, attack_range))
    }

    // ── Typed lookup ──────────────────────────────────────────────────────

    fn vessel_idx(&self, name: &str) -> SimResult<usize> {
        self.vessel_index
            .get(name)
            .copied()
            .ok_or_else(|| SimError::NotFound { kind: "vessel", name: name.to_owned() })
    }

    fn typed_idx(&self, name: &str, class: VesselClass, kind: &'static str) -> SimResult<usize> {
        match self.vessel_index.get(name) {
            Some(&idx) if self.vessels[idx].class() == class => Ok(idx),
            _ => Err(SimError::NotFound { kind, name: name.to_owned() }),
        }
    }

    pub fn get_port(&self, name: &str) -> SimResult<&Port> {
        self.ports
            .get(name)
            .ok_or_else(|| SimError::NotFound { kind: "port", name: name.to_owned() })
    }

    pub fn get_port_mut(&mut self, name: &str) -> SimResult<&mut Port> {
        self.ports
            .get_mut(name)
            .ok_or_else(|| SimError::NotFound { kind: "port", name: name.to_owned() })
    }

    pub fn get_vessel(&self, name: &str) -> SimResult<&Vessel> {
        Ok(&self.vessels[self.vessel_idx(name)?])
    }

    pub fn get_vessel_mut(&mut self, name: &str) -> SimResult<&mut Vessel> {
        let idx = self.vessel_idx(name)?;
        Ok(&mut self.vessels[idx])
    }

    pub fn get_freighter(&self, name: &str) -> SimResult<&Vessel> {
        Ok(&self.vessels[self.typed_idx(name, VesselClass::Freighter, "freighter")?])
    }

    pub fn get_patrol(&self, name: &str) -> SimResult<&Vessel> {
        Ok(&self.vessels[self.typed_idx(name, VesselClass::PatrolBoat, "patrol boat")?])
    }

    pub fn get_cruiser(&self, name: &str) -> SimResult<&Vessel> {
        Ok(&self.vessels[self.typed_idx(name, VesselClass::Cruiser, "cruiser")?])
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the world by one tick.
    pub fn advance(&mut self) -> TickSummary {
        self.advance_with(&mut NoopObserver)
    }

    /// Advance by one tick, reporting to `observer`.
    pub fn advance_with<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        for port in self.ports.values_mut() {
            port.produce();
        }

        let mut summary = TickSummary::default();
        for vessel in &mut self.vessels {
            match vessel.update() {
                TickOutcome::Idle => {}
                TickOutcome::Moved { distance } => {
                    if distance > 0.0 {
                        summary.moved += 1;
                    }
                }
                TickOutcome::Arrived { .. } => {
                    summary.moved += 1;
                    summary.arrived += 1;
                }
                TickOutcome::Stranded { distance } => {
                    if distance > 0.0 {
                        summary.moved += 1;
                    }
                    summary.stranded += 1;
                }
            }
        }
        summary.moving_vessels = self.vessels.iter().filter(|v| v.navigation().is_underway()).count();
        summary.port_fuel_total = self.ports.values().map(Port::fuel_stock).sum();

        self.clock.advance();
        debug!(
            tick = now.0,
            clock = %self.clock,
            moved = summary.moved,
            arrived = summary.arrived,
            stranded = summary.stranded,
            "tick complete"
        );

        observer.on_tick_end(now, &summary);
        observer.on_snapshot(now, &self.ports, &self.vessels);
        summary
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance_with(observer);
        }
    }

    // ── Vessel orders ─────────────────────────────────────────────────────

    fn check_speed(vessel: &Vessel, speed: f64) -> SimResult<()> {
        if vessel.hull().accepts_speed(speed) {
            Ok(())
        } else {
            Err(SimError::InvalidSpeed {
                name: vessel.name().to_owned(),
                speed,
                max: vessel.max_speed(),
            })
        }
    }

    pub fn stop(&mut self, vessel: &str) -> SimResult<()> {
        self.get_vessel_mut(vessel)?.stop();
        Ok(())
    }

    pub fn set_course(&mut self, vessel: &str, heading: f64, speed: f64) -> SimResult<()> {
        let heading = checked_heading(heading)?;
        let v = self.get_vessel_mut(vessel)?;
        Self::check_speed(v, speed)?;
        v.set_course(heading, speed);
        Ok(())
    }

    pub fn set_destination(&mut self, vessel: &str, point: Point, speed: f64) -> SimResult<()> {
        let point = Point::checked(point.x, point.y)?;
        let v = self.get_vessel_mut(vessel)?;
        Self::check_speed(v, speed)?;
        v.set_destination(point, speed);
        Ok(())
    }

    pub fn set_port_destination(&mut self, vessel: &str, port: &str, speed: f64) -> SimResult<()> {
        let idx = self.vessel_idx(vessel)?;
        let target = self.get_port(port)?.location();
        let v = &mut self.vessels[idx];
        Self::check_speed(v, speed)?;
        v.set_port_destination(target, speed, port);
        Ok(())
    }

    /// Standing order for a freighter to load whenever it docks at `port`.
    pub fn load_at(&mut self, vessel: &str, port: &str) -> SimResult<()> {
        let idx = self.vessel_idx(vessel)?;
        if self.vessels[idx].class() != VesselClass::Freighter {
            return Err(self.wrong_kind(idx, VesselClass::Freighter));
        }
        self.get_port(port)?;
        self.vessels[idx].set_load_port(port)?;
        Ok(())
    }

    /// Standing order for a freighter to unload `count` containers whenever
    /// it docks at `port`.
    pub fn unload_at(&mut self, vessel: &str, port: &str, count: u32) -> SimResult<()> {
        let idx = self.vessel_idx(vessel)?;
        if self.vessels[idx].class() != VesselClass::Freighter {
            return Err(self.wrong_kind(idx, VesselClass::Freighter));
        }
        self.get_port(port)?;
        self.vessels[idx].set_unload_port(port, count)?;
        Ok(())
    }

    /// Dock a freighter at `port` if it is within the configured tolerance,
    /// otherwise send it there at top speed.
    ///
    /// Docking snaps the vessel onto the port and carries out its standing
    /// cargo orders for that port.
    pub fn dock_at(&mut self, vessel: &str, port: &str) -> SimResult<DockOutcome> {
        let idx = self.vessel_idx(vessel)?;
        if self.vessels[idx].class() != VesselClass::Freighter {
            return Err(self.wrong_kind(idx, VesselClass::Freighter));
        }
        let target = self.get_port(port)?.location();
        let tolerance = self.config.dock_tolerance_nm;
        let v = &mut self.vessels[idx];

        if v.location().within(target, tolerance) {
            v.dock(port, target);
            let (loaded, unloaded) = v.handle_cargo_at(port);
            info!(vessel, port, loaded, unloaded, "docked");
            Ok(DockOutcome::Docked { loaded, unloaded })
        } else {
            let distance = v.location().distance_to(target);
            let speed = v.max_speed();
            v.set_port_destination(target, speed, port);
            debug!(vessel, port, distance, "heading in to dock");
            Ok(DockOutcome::Underway { distance })
        }
    }

    /// Top up a docked vessel from the port it is docked at.  Returns the
    /// amount transferred, which may be less than requested if the port is
    /// short.
    pub fn refuel_docked(&mut self, vessel: &str) -> SimResult<f64> {
        let idx = self.vessel_idx(vessel)?;
        let v = &self.vessels[idx];
        let berth = match (v.state(), v.navigation().berth()) {
            (NavState::Docked, Some(berth)) => berth.to_owned(),
            _ => return Err(SimError::NotDocked(vessel.to_owned())),
        };

        let needed = v.fuel_needed();
        let port = self.get_port_mut(&berth)?;
        let dispensed = port.dispense(needed);
        let taken = self.vessels[idx].refuel(dispensed);
        info!(vessel, port = %berth, needed, taken, "refuelled");
        Ok(taken)
    }

    /// Have cruiser `attacker` attack `target`.
    pub fn attack(&mut self, attacker: &str, target: &str) -> SimResult<CombatOutcome> {
        let a = self.vessel_idx(attacker)?;
        if self.vessels[a].class() != VesselClass::Cruiser {
            return Err(self.wrong_kind(a, VesselClass::Cruiser));
        }
        let t = self.vessel_idx(target)?;
        if a == t {
            return Err(FleetError::InvalidTarget {
                attacker: attacker.to_owned(),
                target:   target.to_owned(),
            }
            .into());
        }

        let (pirate, victim) = self.pair_mut(a, t);
        let outcome = pirate.attack(victim)?;
        info!(
            attacker,
            target,
            victory = outcome.victory,
            attacker_stat = outcome.attacker_stat,
            target_stat = outcome.target_stat,
            "attack resolved"
        );
        Ok(outcome)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn wrong_kind(&self, idx: usize, expected: VesselClass) -> SimError {
        FleetError::WrongKind { name: self.vessels[idx].name().to_owned(), expected }.into()
    }

    /// Mutable borrows of two distinct vessels at once.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Vessel, &mut Vessel) {
        debug_assert_ne!(a, b);
        if a < b {
            let (lo, hi) = self.vessels.split_at_mut(b);
            (&mut lo[a], &mut hi[0])
        } else {
            let (lo, hi) = self.vessels.split_at_mut(a);
            (&mut hi[0], &mut lo[b])
        }
    }
}
