//! In-memory storage for development and tests.
//!
//! Holds cities, buses and trip records in plain maps. Nothing survives
//! the process; real deployments implement [`Catalog`] and
//! [`TripRepository`] over their own database.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Bus, BusId, City, CityId, Service};

use super::{Catalog, StoreConfig, StoreError, TripId, TripRecord, TripRepository};

/// Catalog and trip repository backed by in-process maps.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    cities: HashMap<CityId, City>,
    buses: HashMap<BusId, Bus>,

    /// Ordered so iteration follows insertion (ids are monotonic).
    trips: BTreeMap<TripId, TripRecord>,

    next_id: u64,
    config: StoreConfig,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            cities: HashMap::new(),
            buses: HashMap::new(),
            trips: BTreeMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Add or replace a city.
    pub fn add_city(&mut self, city: City) {
        self.cities.insert(city.id, city);
    }

    /// Add or replace a bus, including its services.
    pub fn add_bus(&mut self, bus: Bus) {
        self.buses.insert(bus.id, bus);
    }

    /// Append a service to an existing bus.
    pub fn add_service(&mut self, bus_id: BusId, service: Service) -> Result<(), StoreError> {
        let bus = self
            .buses
            .get_mut(&bus_id)
            .ok_or(StoreError::UnknownBus(bus_id))?;
        bus.services.push(service);
        Ok(())
    }

    /// Remove a city. Trips referencing it will no longer validate.
    pub fn remove_city(&mut self, id: CityId) -> Option<City> {
        self.cities.remove(&id)
    }

    /// Remove a bus. Trips referencing it will no longer validate.
    pub fn remove_bus(&mut self, id: BusId) -> Option<Bus> {
        self.buses.remove(&id)
    }

    /// Ids of all stored trips, in ascending order.
    pub fn trip_ids(&self) -> Vec<TripId> {
        self.trips.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl Catalog for InMemoryStore {
    fn city(&self, id: CityId) -> Option<City> {
        self.cities.get(&id).cloned()
    }

    fn bus(&self, id: BusId) -> Option<Bus> {
        self.buses.get(&id).cloned()
    }
}

impl TripRepository for InMemoryStore {
    fn insert(&mut self, record: TripRecord) -> Result<TripId, StoreError> {
        if self.trips.len() >= self.config.max_trips {
            return Err(StoreError::Full {
                capacity: self.config.max_trips,
            });
        }

        let id = TripId(self.next_id);
        self.next_id += 1;
        self.trips.insert(id, record);
        Ok(id)
    }

    fn update(&mut self, id: TripId, record: TripRecord) -> Result<(), StoreError> {
        let slot = self.trips.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = record;
        Ok(())
    }

    fn get(&self, id: TripId) -> Result<TripRecord, StoreError> {
        self.trips.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn delete(&mut self, id: TripId) -> Result<TripRecord, StoreError> {
        self.trips.remove(&id).ok_or(StoreError::NotFound(id))
    }
}
