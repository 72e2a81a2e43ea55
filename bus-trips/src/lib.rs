//! Scheduled bus trips between cities.
//!
//! Validates the attributes that define a trip and derives presentation
//! values from it: arrival time, travel time, a split price and a nested
//! record that includes the assigned bus and its services.

pub mod domain;
pub mod storage;
