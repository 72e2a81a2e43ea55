//! City records referenced as trip origin and destination.

use serde::{Deserialize, Serialize};

/// Storage identifier of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u64);

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CityId {
    fn from(value: u64) -> Self {
        CityId(value)
    }
}

/// A named location a trip can start or end at.
///
/// Cities are owned by the storage layer; trips only read their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

impl City {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CityId(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_city() {
        let city = City::new(3, "Lviv");
        assert_eq!(city.id, CityId(3));
        assert_eq!(city.name, "Lviv");
    }

    #[test]
    fn id_is_transparent_in_json() {
        assert_eq!(serde_json::to_string(&CityId(42)).unwrap(), "42");
        assert_eq!(CityId(42).to_string(), "42");
    }
}
