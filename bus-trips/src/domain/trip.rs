//! The trip entity and its derived presentation values.
//!
//! A `Trip` is always valid: it can only be produced by running the
//! validation rules, so every derivation here is infallible.

use std::fmt;
use std::sync::OnceLock;

use super::draft::{Checked, TripDraft};
use super::validation::ValidationErrors;
use super::{Bus, City, ClockTime, TripRepresentation};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Minor currency units in one major unit.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// A trip duration split into whole hours and remaining minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TravelTime {
    pub hours: u64,
    pub minutes: u64,
}

impl TravelTime {
    pub fn from_minutes(total: u64) -> Self {
        Self {
            hours: total / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }
}

impl From<TravelTime> for (u64, u64) {
    fn from(value: TravelTime) -> Self {
        (value.hours, value.minutes)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.hours, self.minutes)
    }
}

/// A price split into major (dollars) and minor (cents) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    pub major: u64,
    pub minor: u64,
}

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self {
            major: cents / CENTS_PER_DOLLAR,
            minor: cents % CENTS_PER_DOLLAR,
        }
    }
}

impl From<Price> for (u64, u64) {
    fn from(value: Price) -> Self {
        (value.major, value.minor)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

/// A scheduled bus trip between two cities.
///
/// # Examples
///
/// ```
/// use bus_trips::domain::{Bus, City, Trip};
///
/// let trip = Trip::new(
///     City::new(1, "A"),
///     City::new(2, "B"),
///     Bus::new(1, "X1", "Volvo"),
///     "23:30",
///     45,
///     1599,
/// )
/// .unwrap();
///
/// assert_eq!(trip.arrival_time().to_string(), "00:15");
/// assert_eq!(trip.prices().to_string(), "15.99");
/// ```
#[derive(Debug, Clone)]
pub struct Trip {
    from: City,
    to: City,
    bus: Bus,
    start_time: ClockTime,
    duration_minutes: u64,
    price_cents: u64,

    // Computed on first access. Racing initialisers compute the same value.
    travel_time: OnceLock<TravelTime>,
    prices: OnceLock<Price>,
}

impl Trip {
    /// Create a trip from resolved references and raw attributes.
    ///
    /// Runs the same rules as [`super::validate`].
    pub fn new(
        from: City,
        to: City,
        bus: Bus,
        start_time: &str,
        duration_minutes: i64,
        price_cents: i64,
    ) -> Result<Self, ValidationErrors> {
        TripDraft {
            from: Some(from),
            to: Some(to),
            bus: Some(bus),
            start_time: Some(start_time.to_string()),
            duration_minutes: Some(duration_minutes),
            price_cents: Some(price_cents),
        }
        .build()
    }

    pub(crate) fn from_checked(checked: Checked<'_>) -> Self {
        Self {
            from: checked.from.clone(),
            to: checked.to.clone(),
            bus: checked.bus.clone(),
            start_time: checked.start_time,
            duration_minutes: checked.duration_minutes,
            price_cents: checked.price_cents,
            travel_time: OnceLock::new(),
            prices: OnceLock::new(),
        }
    }

    /// Origin city.
    pub fn from(&self) -> &City {
        &self.from
    }

    /// Destination city.
    pub fn to(&self) -> &City {
        &self.to
    }

    /// Assigned bus, with its services loaded.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    /// Time of day the trip arrives, wrapping past midnight.
    pub fn arrival_time(&self) -> ClockTime {
        self.start_time.add_minutes(self.duration_minutes)
    }

    /// Duration split into hours and minutes.
    pub fn travel_time(&self) -> TravelTime {
        *self
            .travel_time
            .get_or_init(|| TravelTime::from_minutes(self.duration_minutes))
    }

    /// Price split into dollars and cents.
    pub fn prices(&self) -> Price {
        *self
            .prices
            .get_or_init(|| Price::from_cents(self.price_cents))
    }

    /// Nested record of the trip, its bus and the bus's services.
    pub fn to_representation(&self) -> TripRepresentation {
        TripRepresentation::from(self)
    }

    /// Convert back into raw attributes, e.g. to edit and revalidate.
    pub fn to_draft(&self) -> TripDraft {
        TripDraft {
            from: Some(self.from.clone()),
            to: Some(self.to.clone()),
            bus: Some(self.bus.clone()),
            start_time: Some(self.start_time.to_string()),
            duration_minutes: Some(to_attribute(self.duration_minutes)),
            price_cents: Some(to_attribute(self.price_cents)),
        }
    }
}

/// Convert a validated count back to its raw attribute type.
///
/// Counts are built from positive `i64` values, so this never saturates.
pub(crate) fn to_attribute(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Service;

    fn trip(start: &str, duration: i64, price: i64) -> Trip {
        Trip::new(
            City::new(1, "A"),
            City::new(2, "B"),
            Bus::new(1, "X1", "Volvo")
                .with_service(Service::new(1, "WiFi"))
                .with_service(Service::new(2, "AC")),
            start,
            duration,
            price,
        )
        .unwrap()
    }

    #[test]
    fn arrival_same_day() {
        assert_eq!(trip("09:00", 90, 100).arrival_time().to_string(), "10:30");
    }

    #[test]
    fn arrival_wraps_midnight() {
        assert_eq!(trip("23:30", 45, 100).arrival_time().to_string(), "00:15");
    }

    #[test]
    fn arrival_wraps_multiple_days() {
        assert_eq!(trip("08:00", 1500, 100).arrival_time().to_string(), "09:00");
        assert_eq!(trip("08:00", 2880, 100).arrival_time().to_string(), "08:00");
    }

    #[test]
    fn travel_time_split() {
        assert_eq!(trip("09:00", 125, 100).travel_time(), TravelTime { hours: 2, minutes: 5 });
        assert_eq!(<(u64, u64)>::from(trip("09:00", 60, 100).travel_time()), (1, 0));
        assert_eq!(<(u64, u64)>::from(trip("09:00", 59, 100).travel_time()), (0, 59));
        assert_eq!(trip("09:00", 125, 100).travel_time().to_string(), "2h 05m");
    }

    #[test]
    fn price_split() {
        assert_eq!(trip("09:00", 90, 1599).prices(), Price { major: 15, minor: 99 });
        assert_eq!(<(u64, u64)>::from(trip("09:00", 90, 100).prices()), (1, 0));
        assert_eq!(<(u64, u64)>::from(trip("09:00", 90, 5).prices()), (0, 5));
        assert_eq!(trip("09:00", 90, 1505).prices().to_string(), "15.05");
    }

    #[test]
    fn large_values_derive_without_overflow() {
        let t = trip("09:00", i64::MAX, i64::MAX);

        assert_eq!(t.arrival_time().to_string(), "03:07");
        assert_eq!(
            t.travel_time(),
            TravelTime { hours: 153_722_867_280_912_930, minutes: 7 }
        );
        assert_eq!(
            t.prices(),
            Price { major: 92_233_720_368_547_758, minor: 7 }
        );
        assert_eq!(t.to_draft().duration_minutes, Some(i64::MAX));
    }

    #[test]
    fn derivations_are_idempotent() {
        let t = trip("22:15", 185, 4250);

        assert_eq!(t.arrival_time(), t.arrival_time());
        assert_eq!(t.travel_time(), t.travel_time());
        assert_eq!(t.prices(), t.prices());
        assert_eq!(t.to_representation(), t.to_representation());
    }

    #[test]
    fn clone_keeps_derived_values() {
        let t = trip("09:00", 125, 1599);
        let before = t.travel_time();
        let cloned = t.clone();
        assert_eq!(cloned.travel_time(), before);
        assert_eq!(cloned.prices(), t.prices());
    }

    #[test]
    fn invalid_attributes_are_rejected() {
        let err = Trip::new(
            City::new(1, "A"),
            City::new(2, "B"),
            Bus::new(1, "X1", "Volvo"),
            "9:30",
            0,
            -1,
        )
        .unwrap_err();

        assert_eq!(
            err.messages(),
            vec![
                "Invalid time",
                "duration_minutes must be greater than 0",
                "price_cents must be greater than 0",
            ]
        );
    }

    #[test]
    fn draft_roundtrip() {
        let t = trip("07:05", 95, 2000);
        let rebuilt = t.to_draft().build().unwrap();
        assert_eq!(rebuilt.to_representation(), t.to_representation());
    }

    #[test]
    fn trip_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trip>();
    }
}
