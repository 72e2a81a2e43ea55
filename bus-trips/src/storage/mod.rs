//! Storage boundary for trips.
//!
//! The application layer resolves stored references through a
//! [`Catalog`], validates the result, and only then writes through a
//! [`TripRepository`]. [`Timetable`] packages that sequence;
//! [`InMemoryStore`] implements both traits without a database.

mod catalog;
mod config;
mod error;
mod memory;
mod record;
mod timetable;


pub use catalog::{Catalog, TripRepository};
pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use record::{TripId, TripRecord};
pub use timetable::Timetable;
