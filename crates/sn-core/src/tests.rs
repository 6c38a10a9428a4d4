//! Unit tests for sn-core primitives.

#[cfg(test)]
mod geo {
    use crate::{CoreError, Point, checked_heading};
    use crate::geo::normalize_heading;

    #[test]
    fn zero_distance() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let d = Point::ORIGIN.distance_to(Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn bearing_cardinal_points() {
        let o = Point::ORIGIN;
        assert_eq!(o.bearing_to(Point::new(0.0, 10.0)), 0.0);
        assert!((o.bearing_to(Point::new(10.0, 0.0)) - 90.0).abs() < 1e-12);
        assert!((o.bearing_to(Point::new(0.0, -10.0)) - 180.0).abs() < 1e-12);
        assert!((o.bearing_to(Point::new(-10.0, 0.0)) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn bearing_north_west_is_in_range() {
        let h = Point::ORIGIN.bearing_to(Point::new(-1.0, 1.0));
        assert!((h - 315.0).abs() < 1e-9, "got {h}");
    }

    #[test]
    fn advanced_due_north_is_exact() {
        let p = Point::ORIGIN.advanced(0.0, 5.0);
        assert_eq!(p, Point::new(0.0, 5.0));
    }

    #[test]
    fn advanced_due_east() {
        let p = Point::ORIGIN.advanced(90.0, 5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
    }

    #[test]
    fn within_tolerance() {
        let port = Point::new(50.0, 5.0);
        assert!(Point::new(50.05, 5.05).within(port, 0.1));
        assert!(!Point::new(50.2, 5.0).within(port, 0.1));
    }

    #[test]
    fn checked_rejects_nan() {
        assert!(Point::checked(f64::NAN, 0.0).is_err());
        assert!(Point::checked(1.0, f64::INFINITY).is_err());
        assert_eq!(Point::checked(1.0, 2.0).unwrap(), Point::new(1.0, 2.0));
    }

    #[test]
    fn checked_heading_normalises_finite_values() {
        assert_eq!(checked_heading(-90.0), Ok(270.0));
        assert_eq!(checked_heading(f64::NEG_INFINITY), Err(CoreError::NonFiniteHeading(f64::NEG_INFINITY)));
        assert!(checked_heading(f64::NAN).is_err());
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Point::new(1.0, -2.346).to_string(), "(1.00, -2.35)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_displays_bare_number() {
        assert_eq!(Tick(42).to_string(), "42");
    }

    #[test]
    fn clock_starts_at_zero_and_advances() {
        let mut clock = SimClock::default();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 7_200);
    }

    #[test]
    fn elapsed_days_and_hours() {
        let mut clock = SimClock::default();
        for _ in 0..27 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_dh(), (1, 3));
        assert_eq!(clock.to_string(), "T27 (day 1 03:00)");
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid_and_has_home_port() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        let home = cfg.home_port.expect("home port");
        assert_eq!(home.name, "Nagoya");
        assert_eq!(home.fuel_rate, 1_000.0);
    }

    #[test]
    fn negative_tolerance_rejected() {
        let cfg = SimConfig { dock_tolerance_nm: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_name_len_rejected() {
        let cfg = SimConfig { max_name_len: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
