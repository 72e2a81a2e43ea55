//! Storage interfaces the application layer talks to.
//!
//! Persistence, querying and referential integrity belong to whatever
//! implements these traits. The domain layer never calls them itself.

use crate::domain::{Bus, BusId, City, CityId};

use super::{StoreError, TripId, TripRecord};

/// Read access to the externally owned city and bus rows.
pub trait Catalog {
    /// Look up a city by id.
    fn city(&self, id: CityId) -> Option<City>;

    /// Look up a bus by id, with its services loaded in association order.
    fn bus(&self, id: BusId) -> Option<Bus>;
}

/// Persistence for trip records.
///
/// Implementations store what they are given. Validation happens before
/// these methods are called; see [`super::Timetable`].
pub trait TripRepository {
    /// Store a new record and assign it an id.
    fn insert(&mut self, record: TripRecord) -> Result<TripId, StoreError>;

    /// Replace an existing record.
    fn update(&mut self, id: TripId, record: TripRecord) -> Result<(), StoreError>;

    /// Fetch a record by id.
    fn get(&self, id: TripId) -> Result<TripRecord, StoreError>;

    /// Remove a record, returning what was stored.
    fn delete(&mut self, id: TripId) -> Result<TripRecord, StoreError>;
}
