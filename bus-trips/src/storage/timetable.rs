//! The application path for trips: resolve, validate, then persist.

use tracing::debug;

use crate::domain::{Trip, TripRepresentation};

use super::{Catalog, StoreError, TripId, TripRecord, TripRepository};

/// Validating front end over a catalog and trip repository.
///
/// Every write runs the trip rules first; a record that fails them is
/// never handed to the repository.
///
/// # Examples
///
/// ```
/// use bus_trips::domain::{Bus, City, CityId, BusId};
/// use bus_trips::storage::{InMemoryStore, Timetable, TripRecord};
///
/// let mut store = InMemoryStore::default();
/// store.add_city(City::new(1, "A"));
/// store.add_city(City::new(2, "B"));
/// store.add_bus(Bus::new(1, "X1", "Volvo"));
///
/// let mut timetable = Timetable::new(store);
/// let id = timetable
///     .create(TripRecord {
///         from_id: CityId(1),
///         to_id: CityId(2),
///         bus_id: BusId(1),
///         start_time: "09:00".to_string(),
///         duration_minutes: 90,
///         price_cents: 1599,
///     })
///     .unwrap();
///
/// assert_eq!(timetable.load(id).unwrap().arrival_time().to_string(), "10:30");
/// ```
#[derive(Debug)]
pub struct Timetable<S> {
    store: S,
}

impl<S: Catalog + TripRepository> Timetable<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store, e.g. to seed the catalog.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Validate and store a new trip.
    pub fn create(&mut self, record: TripRecord) -> Result<TripId, StoreError> {
        self.check(&record)?;
        let id = self.store.insert(record)?;
        debug!(trip_id = %id, "trip created");
        Ok(id)
    }

    /// Validate and store an already-built trip.
    ///
    /// The trip's references are looked up again, so a city or bus that
    /// the catalog does not know is rejected.
    pub fn create_from(&mut self, trip: &Trip) -> Result<TripId, StoreError> {
        self.create(TripRecord::from(trip))
    }

    /// Validate a record and overwrite the trip stored under `id`.
    pub fn update(&mut self, id: TripId, record: TripRecord) -> Result<Trip, StoreError> {
        self.store.get(id)?;
        let trip = self.check(&record)?;
        self.store.update(id, record)?;
        debug!(trip_id = %id, "trip updated");
        Ok(trip)
    }

    /// Remove a trip.
    pub fn delete(&mut self, id: TripId) -> Result<(), StoreError> {
        self.store.delete(id)?;
        debug!(trip_id = %id, "trip deleted");
        Ok(())
    }

    /// Fetch a stored trip, resolve its references and validate it.
    ///
    /// Fails with [`StoreError::Invalid`] if a referenced city or bus has
    /// since disappeared from the catalog.
    pub fn load(&self, id: TripId) -> Result<Trip, StoreError> {
        let record = self.store.get(id)?;
        self.check(&record)
    }

    /// Load a trip and project it for output.
    pub fn represent(&self, id: TripId) -> Result<TripRepresentation, StoreError> {
        Ok(self.load(id)?.to_representation())
    }

    fn check(&self, record: &TripRecord) -> Result<Trip, StoreError> {
        record.resolve(&self.store).build().map_err(|errors| {
            debug!(error_count = errors.len(), %errors, "trip rejected");
            StoreError::Invalid(errors)
        })
    }
}
