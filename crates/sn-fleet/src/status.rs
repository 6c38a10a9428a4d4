//! One-line status reports.
//!
//! ```text
//! Port Nagoya at position (50.00, 5.00), Fuel available: 1001000.0 kl
//! Freighter Ever at (0.00, 5.00), fuel: 495.00 kl, resistance: 3, Moving to (0.00, 10.00) on course 0.00 deg, speed 5.00 nm/hr, containers: 0/10
//! Patrol_boat Hawk at (1.00, 2.00), fuel: 900.00 kl, resistance: 4, Stopped
//! Cruiser Jolly at (3.00, 3.00), force: 6, Docked at Nagoya
//! ```

use std::fmt;

use sn_core::Entity;

use crate::{NavState, Navigation, Port, Vessel, VesselKind};

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            NavState::Stopped => f.write_str("Stopped"),
            NavState::Docked => match &self.berth {
                Some(port) => write!(f, "Docked at {port}"),
                None => f.write_str("Docked"),
            },
            NavState::DeadInTheWater => f.write_str("Dead in the water"),
            NavState::Moving => {
                f.write_str("Moving to ")?;
                match &self.destination {
                    Some(dest) => match &dest.port {
                        Some(port) => f.write_str(port)?,
                        None => write!(f, "{}", dest.point)?,
                    },
                    None => f.write_str("nowhere")?,
                }
                write!(f, " on course {:.2} deg, speed {:.2} nm/hr", self.heading, self.speed)
            }
            NavState::Course => write!(
                f,
                "Moving on course {:.2} deg, speed {:.2} nm/hr",
                self.heading, self.speed
            ),
        }
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.class(), self.name(), self.location())?;
        match self.kind() {
            VesselKind::Freighter(cargo) => write!(
                f,
                ", fuel: {:.2} kl, resistance: {}, {}, containers: {}/{}",
                self.fuel(),
                self.combat_stat(),
                self.navigation(),
                cargo.containers(),
                cargo.max_containers(),
            ),
            VesselKind::PatrolBoat => write!(
                f,
                ", fuel: {:.2} kl, resistance: {}, {}",
                self.fuel(),
                self.combat_stat(),
                self.navigation(),
            ),
            VesselKind::Cruiser { .. } => {
                write!(f, ", force: {}, {}", self.combat_stat(), self.navigation())
            }
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Port {} at position {}, Fuel available: {:.1} kl",
            self.name(),
            self.location(),
            self.fuel_stock(),
        )
    }
}
