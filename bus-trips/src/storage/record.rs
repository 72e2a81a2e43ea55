//! Persisted trip layout.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{BusId, CityId, Trip, TripDraft, to_attribute};

use super::Catalog;

/// Storage identifier of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub u64);

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trip as a storage backend holds it: references by id, scalars raw.
///
/// Records are not validated on their own. Resolve one against a
/// [`Catalog`] and build the resulting draft to get a [`Trip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub from_id: CityId,
    pub to_id: CityId,
    pub bus_id: BusId,
    pub start_time: String,
    pub duration_minutes: i64,
    pub price_cents: i64,
}

impl TripRecord {
    /// Look up the referenced city and bus rows.
    ///
    /// An id with no matching row becomes `None` in the draft, which
    /// validation reports as a presence error.
    pub fn resolve<C: Catalog + ?Sized>(&self, catalog: &C) -> TripDraft {
        let from = catalog.city(self.from_id);
        if from.is_none() {
            trace!(city_id = %self.from_id, "origin city not found");
        }
        let to = catalog.city(self.to_id);
        if to.is_none() {
            trace!(city_id = %self.to_id, "destination city not found");
        }
        let bus = catalog.bus(self.bus_id);
        if bus.is_none() {
            trace!(bus_id = %self.bus_id, "bus not found");
        }

        TripDraft {
            from,
            to,
            bus,
            start_time: Some(self.start_time.clone()),
            duration_minutes: Some(self.duration_minutes),
            price_cents: Some(self.price_cents),
        }
    }
}

impl From<&Trip> for TripRecord {
    fn from(trip: &Trip) -> Self {
        Self {
            from_id: trip.from().id,
            to_id: trip.to().id,
            bus_id: trip.bus().id,
            start_time: trip.start_time().to_string(),
            duration_minutes: to_attribute(trip.duration_minutes()),
            price_cents: to_attribute(trip.price_cents()),
        }
    }
}
