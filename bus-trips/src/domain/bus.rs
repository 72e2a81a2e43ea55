//! Bus records and the services (amenities) offered on them.

use serde::{Deserialize, Serialize};

/// Storage identifier of a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusId(pub u64);

impl std::fmt::Display for BusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BusId {
    fn from(value: u64) -> Self {
        BusId(value)
    }
}

/// Storage identifier of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl From<u64> for ServiceId {
    fn from(value: u64) -> Self {
        ServiceId(value)
    }
}

/// A named amenity offered on a bus (e.g. "WiFi", "AC").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
}

impl Service {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ServiceId(id),
            name: name.into(),
        }
    }
}

/// A vehicle that can be assigned to trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    pub id: BusId,

    /// Registration or fleet number
    pub number: String,

    /// Manufacturer model
    pub model: String,

    /// Services in association order
    pub services: Vec<Service>,
}

impl Bus {
    /// Create a bus with no services.
    pub fn new(id: u64, number: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: BusId(id),
            number: number.into(),
            model: model.into(),
            services: Vec::new(),
        }
    }

    /// Builder-style helper appending a service.
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Names of the services, in association order.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.name.as_str())
    }
}
