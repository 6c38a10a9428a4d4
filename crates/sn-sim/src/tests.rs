//! Unit tests for sn-sim.

use sn_core::{CoreError, Entity, HomePort, Point, SimConfig, Tick};
use sn_fleet::{FleetError, NavState, Port, Vessel, VesselClass};

use crate::{DockOutcome, PortMap, SimError, SimObserver, TickSummary, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Default world: Nagoya at (50, 5).
fn world() -> World {
    World::with_config(SimConfig::default()).unwrap()
}

/// A fixed sequence of creations and orders, used for replay checks.
fn scripted_run() -> World {
    let mut w = world();
    w.add_port("Haifa", Point::new(10.0, 10.0), 200.0, 5.0).unwrap();
    w.add_freighter("Ever", Point::new(0.0, 0.0), 3, 10).unwrap();
    w.add_patrol("Hawk", Point::new(-5.0, 2.5), 4).unwrap();
    w.add_cruiser("Jolly", Point::new(20.0, -3.0), 5, 15).unwrap();

    w.set_port_destination("Ever", "Nagoya", 17.3).unwrap();
    w.set_course("Hawk", 33.3, 11.1).unwrap();
    w.set_destination("Jolly", Point::new(-7.7, 19.1), 41.0).unwrap();
    for _ in 0..4 {
        w.advance();
    }
    w.attack("Jolly", "Hawk").unwrap();
    w.set_course("Hawk", 271.0, 14.9).unwrap();
    for _ in 0..5 {
        w.advance();
    }
    w
}

#[derive(Default)]
struct Recorder {
    events:    Vec<String>,
    summaries: Vec<TickSummary>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.events.push(format!("start {tick}"));
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.events.push(format!("end {tick}"));
        self.summaries.push(*summary);
    }

    fn on_snapshot(&mut self, tick: Tick, ports: &PortMap, vessels: &[Vessel]) {
        self.events.push(format!("snapshot {tick} {} {}", ports.len(), vessels.len()));
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn new_world_is_empty() {
        let w = World::new();
        assert_eq!(w.time(), Tick::ZERO);
        assert!(w.ports().is_empty());
        assert!(w.vessels().is_empty());
    }

    #[test]
    fn default_config_registers_nagoya() {
        let w = world();
        let nagoya = w.get_port("Nagoya").unwrap();
        assert_eq!(nagoya.location(), Point::new(50.0, 5.0));
        assert_eq!(nagoya.fuel_stock(), 1_000_000.0);
        assert_eq!(nagoya.production_rate(), 1_000.0);
    }

    #[test]
    fn custom_home_port() {
        let cfg = SimConfig {
            home_port: Some(HomePort {
                name:         "Kobe".into(),
                location:     Point::new(1.0, 2.0),
                initial_fuel: 10.0,
                fuel_rate:    1.0,
            }),
            ..SimConfig::default()
        };
        let w = World::with_config(cfg).unwrap();
        assert!(w.name_exists("Kobe"));
        assert!(!w.name_exists("Nagoya"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SimConfig { dock_tolerance_nm: -1.0, ..SimConfig::default() };
        assert!(matches!(World::with_config(cfg), Err(SimError::Core(_))));
    }
}

// ── Names and lookup ──────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn vessel_name_taken_by_port() {
        let mut w = world();
        let err = w.add_freighter("Nagoya", Point::ORIGIN, 1, 1).unwrap_err();
        assert_eq!(err, SimError::NameConflict("Nagoya".into()));
        assert!(w.vessels().is_empty());
        assert!(!w.vessel_exists("Nagoya"));
    }

    #[test]
    fn port_name_taken_by_vessel() {
        let mut w = world();
        w.add_patrol("Hawk", Point::ORIGIN, 2).unwrap();
        let ports_before = w.ports().clone();
        assert!(matches!(
            w.add_port("Hawk", Point::new(1.0, 1.0), 5.0, 1.0),
            Err(SimError::NameConflict(_))
        ));
        assert_eq!(w.ports(), &ports_before);
        assert_eq!(w.get_patrol("Hawk").unwrap().location(), Point::ORIGIN);
    }

    #[test]
    fn duplicate_vessel_leaves_original_untouched() {
        let mut w = world();
        w.add_cruiser("Jolly", Point::new(1.0, 1.0), 5, 10).unwrap();
        assert!(w.add_cruiser("Jolly", Point::new(9.0, 9.0), 1, 1).is_err());
        assert_eq!(w.vessels().len(), 1);
        assert_eq!(w.get_cruiser("Jolly").unwrap().combat_stat(), 5);
    }

    #[test]
    fn non_finite_location_is_rejected() {
        let mut w = world();
        assert!(matches!(
            w.add_freighter("Ever", Point::new(f64::NAN, 0.0), 1, 1),
            Err(SimError::Core(_))
        ));
        assert!(!w.name_exists("Ever"));
    }

    #[test]
    fn membership_predicates() {
        let mut w = world();
        w.add_patrol("Hawk", Point::ORIGIN, 2).unwrap();
        assert!(w.name_exists("Nagoya"));
        assert!(w.name_exists("Hawk"));
        assert!(w.vessel_exists("Hawk"));
        assert!(!w.vessel_exists("Nagoya"));
        assert!(!w.name_exists("Nobody"));
    }

    #[test]
    fn typed_lookup_rejects_wrong_kind() {
        let mut w = world();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();

        assert_eq!(w.get_freighter("Ever").unwrap().class(), VesselClass::Freighter);
        assert_eq!(w.get_vessel("Ever").unwrap().name(), "Ever");
        assert_eq!(
            w.get_cruiser("Ever").unwrap_err(),
            SimError::NotFound { kind: "cruiser", name: "Ever".into() }
        );
        assert!(matches!(w.get_patrol("Ever"), Err(SimError::NotFound { .. })));
        assert!(matches!(w.get_vessel("Nagoya"), Err(SimError::NotFound { kind: "vessel", .. })));
        assert!(matches!(w.get_port("Ever"), Err(SimError::NotFound { kind: "port", .. })));
    }

    #[test]
    fn all_entities_lists_ports_then_vessels() {
        let mut w = world();
        w.add_cruiser("Zed", Point::ORIGIN, 1, 1).unwrap();
        w.add_freighter("Able", Point::ORIGIN, 1, 1).unwrap();
        w.add_port("Haifa", Point::new(1.0, 1.0), 0.0, 0.0).unwrap();

        let entities = w.all_entities();
        let names: Vec<&str> = entities.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Haifa", "Nagoya", "Zed", "Able"]);
    }

    #[test]
    fn status_report_order() {
        let mut w = world();
        w.add_patrol("Hawk", Point::new(1.0, 2.0), 4).unwrap();
        w.add_port("Haifa", Point::new(3.0, 4.0), 10.0, 0.0).unwrap();

        let mut out = Vec::new();
        w.print_status(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Port Haifa at position (3.00, 4.00), Fuel available: 10.0 kl\n\
             Port Nagoya at position (50.00, 5.00), Fuel available: 1000000.0 kl\n\
             Patrol_boat Hawk at (1.00, 2.00), fuel: 900.00 kl, resistance: 4, Stopped\n"
        );
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ticks {
    use super::*;

    #[test]
    fn advance_produces_moves_and_counts() {
        let mut w = world();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();
        w.set_destination("Ever", Point::new(0.0, 10.0), 5.0).unwrap();

        let summary = w.advance();
        assert_eq!(w.time(), Tick(1));
        assert_eq!(w.get_port("Nagoya").unwrap().fuel_stock(), 1_001_000.0);
        assert_eq!(w.get_vessel("Ever").unwrap().location(), Point::new(0.0, 5.0));
        assert_eq!(summary.moved, 1);
        assert_eq!(summary.moving_vessels, 1);
        assert_eq!(summary.port_fuel_total, 1_001_000.0);
    }

    #[test]
    fn refuel_draws_fuel_produced_this_tick() {
        let mut w = World::new();
        w.add_port("Dry", Point::ORIGIN, 0.0, 30.0).unwrap();
        w.add_patrol("Hawk", Point::ORIGIN, 1).unwrap();
        w.set_course("Hawk", 0.0, 10.0).unwrap();
        w.advance();
        w.dock_at_unchecked("Hawk", "Dry");

        assert_eq!(w.refuel_docked("Hawk").unwrap(), 20.0);
        assert_eq!(w.get_port("Dry").unwrap().fuel_stock(), 10.0);
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        let mut w = world();
        w.add_cruiser("Jolly", Point::ORIGIN, 1, 1).unwrap();
        let mut rec = Recorder::default();
        w.run_ticks(2, &mut rec);

        assert_eq!(
            rec.events,
            ["start 0", "end 0", "snapshot 0 1 1", "start 1", "end 1", "snapshot 1 1 1"]
        );
        assert_eq!(w.time(), Tick(2));
    }

    #[test]
    fn summary_counts_arrivals_and_strandings() {
        let mut w = World::new();
        w.add_freighter("Ever", Point::ORIGIN, 1, 1).unwrap();
        w.add_patrol("Hawk", Point::ORIGIN, 1).unwrap();
        w.set_destination("Ever", Point::new(0.0, 3.0), 10.0).unwrap();
        w.set_course("Hawk", 90.0, 15.0).unwrap();

        let mut rec = Recorder::default();
        w.run_ticks(31, &mut rec);

        assert_eq!(rec.summaries[0].arrived, 1);
        assert_eq!(rec.summaries[0].moved, 2);
        // 900 kl at 2 kl/nm and 15 nm/hr lasts exactly 30 ticks.
        assert_eq!(rec.summaries[29].stranded, 1);
        assert_eq!(rec.summaries[30].stranded, 0);
        assert_eq!(w.get_patrol("Hawk").unwrap().state(), NavState::DeadInTheWater);
        // Ever reached its destination but stays Moving.
        assert_eq!(rec.summaries[30].moving_vessels, 1);
    }

    #[test]
    fn replay_is_bit_identical() {
        let a = scripted_run();
        let b = scripted_run();
        assert_eq!(a.time(), b.time());
        assert_eq!(a.ports(), b.ports());
        assert_eq!(a.vessels(), b.vessels());
        for (va, vb) in a.vessels().iter().zip(b.vessels()) {
            assert_eq!(va.location().x.to_bits(), vb.location().x.to_bits());
            assert_eq!(va.location().y.to_bits(), vb.location().y.to_bits());
            assert_eq!(va.fuel().to_bits(), vb.fuel().to_bits());
        }
    }

    #[test]
    fn fuel_and_speed_invariants_hold_every_tick() {
        let mut w = scripted_run();
        for _ in 0..60 {
            w.advance();
            for v in w.vessels() {
                assert!(v.fuel() >= 0.0 && v.fuel() <= v.max_fuel());
                if v.state().is_stationary() {
                    assert_eq!(v.speed(), 0.0);
                }
            }
        }
    }
}

// ── Orders ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod orders {
    use super::*;

    #[test]
    fn speed_must_be_positive_and_within_hull_limit() {
        let mut w = world();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();
        assert!(matches!(w.set_course("Ever", 0.0, 0.0), Err(SimError::InvalidSpeed { .. })));
        assert!(matches!(w.set_course("Ever", 0.0, 40.5), Err(SimError::InvalidSpeed { .. })));
        assert!(matches!(
            w.set_port_destination("Ever", "Nagoya", -1.0),
            Err(SimError::InvalidSpeed { .. })
        ));
        assert_eq!(w.get_vessel("Ever").unwrap().state(), NavState::Stopped);

        w.set_course("Ever", 0.0, 40.0).unwrap();
        assert_eq!(w.get_vessel("Ever").unwrap().state(), NavState::Course);
    }

    #[test]
    fn non_finite_heading_is_rejected() {
        let mut w = world();
        w.add_patrol("Hawk", Point::ORIGIN, 4).unwrap();
        assert!(matches!(
            w.set_course("Hawk", f64::NAN, 5.0),
            Err(SimError::Core(CoreError::NonFiniteHeading(_)))
        ));
        assert_eq!(
            w.set_course("Hawk", f64::INFINITY, 5.0).unwrap_err(),
            SimError::Core(CoreError::NonFiniteHeading(f64::INFINITY))
        );

        w.advance();
        let hawk = w.get_vessel("Hawk").unwrap();
        assert_eq!(hawk.state(), NavState::Stopped);
        assert_eq!(hawk.location(), Point::ORIGIN);
        assert_eq!(hawk.fuel(), 900.0);
    }

    #[test]
    fn port_destination_requires_known_port() {
        let mut w = world();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();
        assert_eq!(
            w.set_port_destination("Ever", "Atlantis", 10.0).unwrap_err(),
            SimError::NotFound { kind: "port", name: "Atlantis".into() }
        );
    }

    #[test]
    fn dock_within_tolerance_runs_cargo_orders() {
        let mut w = world();
        w.add_freighter("Ever", Point::new(50.05, 5.05), 3, 10).unwrap();
        w.load_at("Ever", "Nagoya").unwrap();

        let outcome = w.dock_at("Ever", "Nagoya").unwrap();
        assert_eq!(outcome, DockOutcome::Docked { loaded: 10, unloaded: 0 });
        let ever = w.get_freighter("Ever").unwrap();
        assert_eq!(ever.state(), NavState::Docked);
        assert_eq!(ever.location(), Point::new(50.0, 5.0));
        assert_eq!(ever.cargo().unwrap().containers(), 10);
    }

    #[test]
    fn dock_out_of_range_heads_for_port() {
        let mut w = world();
        w.add_freighter("Ever", Point::new(50.0, 45.0), 3, 10).unwrap();

        let outcome = w.dock_at("Ever", "Nagoya").unwrap();
        assert_eq!(outcome, DockOutcome::Underway { distance: 40.0 });
        let ever = w.get_vessel("Ever").unwrap();
        assert_eq!(ever.state(), NavState::Moving);
        assert_eq!(ever.speed(), 40.0);
        assert!((ever.heading() - 180.0).abs() < 1e-9);

        w.advance();
        assert_eq!(w.get_vessel("Ever").unwrap().location(), Point::new(50.0, 5.0));
        assert!(matches!(w.dock_at("Ever", "Nagoya").unwrap(), DockOutcome::Docked { .. }));
    }

    #[test]
    fn freighter_only_orders() {
        let mut w = world();
        w.add_patrol("Hawk", Point::new(50.0, 5.0), 4).unwrap();
        let wrong = SimError::Fleet(FleetError::WrongKind {
            name:     "Hawk".into(),
            expected: VesselClass::Freighter,
        });
        assert_eq!(w.dock_at("Hawk", "Nagoya").unwrap_err(), wrong);
        assert_eq!(w.load_at("Hawk", "Nagoya").unwrap_err(), wrong);
        assert_eq!(w.unload_at("Hawk", "Nagoya", 1).unwrap_err(), wrong);
        assert_eq!(w.get_vessel("Hawk").unwrap().state(), NavState::Stopped);
    }

    #[test]
    fn refuel_requires_dock() {
        let mut w = world();
        w.add_patrol("Hawk", Point::new(50.0, 5.0), 4).unwrap();
        assert_eq!(w.refuel_docked("Hawk").unwrap_err(), SimError::NotDocked("Hawk".into()));
    }

    #[test]
    fn refuel_draws_from_berth_port() {
        let mut w = world();
        w.add_freighter("Ever", Point::new(50.0, 25.0), 3, 10).unwrap();
        w.set_port_destination("Ever", "Nagoya", 20.0).unwrap();
        w.advance();
        w.dock_at("Ever", "Nagoya").unwrap();

        assert_eq!(w.refuel_docked("Ever").unwrap(), 20.0);
        assert_eq!(w.get_vessel("Ever").unwrap().fuel(), 500.0);
        assert_eq!(w.get_port("Nagoya").unwrap().fuel_stock(), 1_001_000.0 - 20.0);
    }

    #[test]
    fn attack_resolves_and_stops_target() {
        let mut w = world();
        w.add_patrol("Hawk", Point::ORIGIN, 4).unwrap();
        w.add_cruiser("Jolly", Point::ORIGIN, 2, 10).unwrap();
        w.set_course("Hawk", 10.0, 10.0).unwrap();

        let outcome = w.attack("Jolly", "Hawk").unwrap();
        assert!(!outcome.victory);
        assert_eq!(w.get_patrol("Hawk").unwrap().combat_stat(), 5);
        assert_eq!(w.get_cruiser("Jolly").unwrap().combat_stat(), 1);
        assert_eq!(w.get_patrol("Hawk").unwrap().state(), NavState::Stopped);
    }

    #[test]
    fn attack_with_later_created_target() {
        let mut w = world();
        w.add_cruiser("Jolly", Point::ORIGIN, 9, 10).unwrap();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();
        assert!(w.attack("Jolly", "Ever").unwrap().victory);
        assert_eq!(w.get_cruiser("Jolly").unwrap().combat_stat(), 10);
    }

    #[test]
    fn attack_at_maximum_force_does_not_overflow() {
        let mut w = world();
        w.add_cruiser("Jolly", Point::ORIGIN, i32::MAX, 5).unwrap();
        w.add_freighter("Ever", Point::ORIGIN, 0, 5).unwrap();
        assert!(w.attack("Jolly", "Ever").unwrap().victory);
        assert_eq!(w.get_cruiser("Jolly").unwrap().combat_stat(), i32::MAX);
    }

    #[test]
    fn attack_failures_leave_world_unchanged() {
        let mut w = world();
        w.add_cruiser("Jolly", Point::ORIGIN, 5, 10).unwrap();
        w.add_cruiser("Black", Point::ORIGIN, 1, 10).unwrap();
        w.add_freighter("Ever", Point::ORIGIN, 3, 10).unwrap();

        assert!(matches!(
            w.attack("Ever", "Jolly"),
            Err(SimError::Fleet(FleetError::WrongKind { .. }))
        ));
        assert!(matches!(
            w.attack("Jolly", "Black"),
            Err(SimError::Fleet(FleetError::InvalidTarget { .. }))
        ));
        assert!(matches!(
            w.attack("Jolly", "Jolly"),
            Err(SimError::Fleet(FleetError::InvalidTarget { .. }))
        ));
        assert!(matches!(w.attack("Jolly", "Ghost"), Err(SimError::NotFound { .. })));
        assert_eq!(w.get_cruiser("Jolly").unwrap().combat_stat(), 5);
        assert_eq!(w.get_cruiser("Black").unwrap().combat_stat(), 1);
    }
}

// ── Test-only helpers on World ────────────────────────────────────────────────

impl World {
    /// Dock regardless of distance.
    fn dock_at_unchecked(&mut self, vessel: &str, port: &str) {
        let at = self.get_port(port).map(Port::location).unwrap();
        self.get_vessel_mut(vessel).unwrap().dock(port, at);
    }
}
