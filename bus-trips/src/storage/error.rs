//! Storage error types.

use crate::domain::{BusId, ValidationErrors};

use super::TripId;

/// Errors that can occur at the storage boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No trip with this id
    #[error("trip {0} not found")]
    NotFound(TripId),

    /// No bus with this id
    #[error("bus {0} not found")]
    UnknownBus(BusId),

    /// The trip failed validation and was not stored
    #[error("invalid trip: {0}")]
    Invalid(#[from] ValidationErrors),

    /// The store reached its configured capacity
    #[error("store is full ({capacity} trips)")]
    Full { capacity: usize },
}
