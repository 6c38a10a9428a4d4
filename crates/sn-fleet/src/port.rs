//! Fuel-producing ports.

use sn_core::{Entity, Point};

/// A stationary port with a fuel depot.
///
/// Stock grows by `production_rate` every tick and is handed out first come,
/// first served.  There are no reservations.
#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    name:            String,
    location:        Point,
    fuel_stock:      f64,
    production_rate: f64,
}

impl Port {
    pub fn new(name: impl Into<String>, location: Point, initial_fuel: f64, production_rate: f64) -> Self {
        Self {
            name: name.into(),
            location,
            fuel_stock: initial_fuel.max(0.0),
            production_rate: production_rate.max(0.0),
        }
    }

    #[inline]
    pub fn fuel_stock(&self) -> f64 {
        self.fuel_stock
    }

    #[inline]
    pub fn production_rate(&self) -> f64 {
        self.production_rate
    }

    /// One tick of fuel production.
    pub fn produce(&mut self) {
        self.fuel_stock += self.production_rate;
    }

    /// Hand out as much of `requested` as the stock allows and return it.
    ///
    /// Negative requests dispense nothing.
    pub fn dispense(&mut self, requested: f64) -> f64 {
        let given = requested.max(0.0).min(self.fuel_stock);
        self.fuel_stock -= given;
        given
    }
}

impl Entity for Port {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Point {
        self.location
    }
}
