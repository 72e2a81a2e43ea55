//! Domain types for bus trips.
//!
//! Cities, buses and their services are owned by the storage layer and
//! treated as read-only here. A `Trip` can only be built by passing the
//! validation rules, so code that receives one can trust every attribute.

mod bus;
mod city;
mod draft;
mod representation;
mod time;
mod trip;
mod validation;

pub use bus::{Bus, BusId, Service, ServiceId};
pub use city::{City, CityId};
pub use draft::{TripDraft, validate};
pub use representation::{BusRepresentation, TripRepresentation};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use trip::{CENTS_PER_DOLLAR, MINUTES_PER_HOUR, Price, TravelTime, Trip};
pub(crate) use trip::to_attribute;
pub use validation::{Field, FieldError, ValidationErrors, Violation};
