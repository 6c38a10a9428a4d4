//! Per-vessel navigation state.

use sn_core::Point;
use sn_core::geo::normalize_heading;

/// Where a vessel is in its navigation life cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavState {
    /// Not moving.  Every vessel starts here.
    #[default]
    Stopped,
    /// Tied up at a port.
    Docked,
    /// Out of fuel and immobile.  Nothing in the state machine leaves this
    /// state on its own.
    DeadInTheWater,
    /// Heading for a destination; the bearing is recomputed every tick.
    Moving,
    /// Holding a fixed compass course indefinitely.
    Course,
}

impl NavState {
    /// `true` for the states in which speed is forced to zero.
    #[inline]
    pub fn is_stationary(self) -> bool {
        matches!(self, NavState::Stopped | NavState::Docked | NavState::DeadInTheWater)
    }

    /// Short machine-readable name, used in trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            NavState::Stopped        => "stopped",
            NavState::Docked         => "docked",
            NavState::DeadInTheWater => "dead_in_the_water",
            NavState::Moving         => "moving",
            NavState::Course         => "course",
        }
    }
}

/// A movement target: raw coordinates, optionally tagged with the port that
/// lives there.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub point: Point,
    pub port:  Option<String>,
}

impl Destination {
    pub fn coordinates(point: Point) -> Self {
        Self { point, port: None }
    }

    pub fn port(point: Point, name: impl Into<String>) -> Self {
        Self { point, port: Some(name.into()) }
    }
}

/// Speed, heading and destination of one vessel.
///
/// All transitions are instantaneous.  Entering a stationary state zeroes
/// the speed and clears the destination; `berth` remembers the port a docked
/// vessel is tied up at and is cleared by every other transition.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Navigation {
    pub(crate) state:       NavState,
    pub(crate) speed:       f64,
    pub(crate) heading:     f64,
    pub(crate) destination: Option<Destination>,
    pub(crate) berth:       Option<String>,
}

impl Navigation {
    /// A stopped vessel facing north.
    pub fn stopped() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Compass heading in degrees, `[0, 360)`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Port the vessel is docked at, if any.
    #[inline]
    pub fn berth(&self) -> Option<&str> {
        self.berth.as_deref()
    }

    /// `true` while the vessel is Moving or on a Course.
    #[inline]
    pub fn is_underway(&self) -> bool {
        !self.state.is_stationary()
    }

    fn halt(&mut self, state: NavState) {
        debug_assert!(state.is_stationary());
        self.state = state;
        self.speed = 0.0;
        self.destination = None;
        self.berth = None;
    }

    pub fn stop(&mut self) {
        self.halt(NavState::Stopped);
    }

    pub fn set_course(&mut self, heading: f64, speed: f64) {
        self.state = NavState::Course;
        self.heading = normalize_heading(heading);
        self.speed = speed;
        self.destination = None;
        self.berth = None;
    }

    /// Head for `destination` from `from`, aiming straight at it.
    pub fn set_destination(&mut self, from: Point, destination: Destination, speed: f64) {
        self.state = NavState::Moving;
        self.heading = from.bearing_to(destination.point);
        self.speed = speed;
        self.destination = Some(destination);
        self.berth = None;
    }

    pub fn dock(&mut self, port: &str) {
        self.halt(NavState::Docked);
        self.berth = Some(port.to_owned());
    }

    pub fn strand(&mut self) {
        self.halt(NavState::DeadInTheWater);
    }
}
