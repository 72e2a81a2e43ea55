//! Serializable projection of a trip for display or API output.
//!
//! The caller picks the wire format; these types only fix the shape.

use serde::{Deserialize, Serialize};

use super::{Bus, ClockTime, Trip};

/// A trip with its references flattened to display values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRepresentation {
    /// Origin city name
    pub from: String,

    /// Destination city name
    pub to: String,

    /// Departure, serialized as "HH:MM"
    pub start_time: ClockTime,

    pub duration_minutes: u64,

    pub price_cents: u64,

    pub bus: BusRepresentation,
}

/// The assigned bus, with service names in association order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRepresentation {
    pub number: String,
    pub model: String,
    pub services: Vec<String>,
}

impl From<&Bus> for BusRepresentation {
    fn from(bus: &Bus) -> Self {
        Self {
            number: bus.number.clone(),
            model: bus.model.clone(),
            services: bus.service_names().map(str::to_string).collect(),
        }
    }
}

impl From<&Trip> for TripRepresentation {
    fn from(trip: &Trip) -> Self {
        Self {
            from: trip.from().name.clone(),
            to: trip.to().name.clone(),
            start_time: trip.start_time(),
            duration_minutes: trip.duration_minutes(),
            price_cents: trip.price_cents(),
            bus: BusRepresentation::from(trip.bus()),
        }
    }
}
