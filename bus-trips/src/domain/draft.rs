//! Unvalidated trip attributes and the rules that check them.

use super::validation::{Field, FieldError, ValidationErrors, Violation};
use super::{Bus, City, ClockTime, Trip};

/// Trip attributes as supplied by a caller, before validation.
///
/// Every attribute is optional so that a missing value can be reported
/// rather than being unrepresentable. References are expected to be
/// resolved already; an id that matched nothing is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub from: Option<City>,
    pub to: Option<City>,
    pub bus: Option<Bus>,

    /// Departure in "HH:MM" form
    pub start_time: Option<String>,

    pub duration_minutes: Option<i64>,

    /// Price in minor currency units
    pub price_cents: Option<i64>,
}

/// Borrowed view of a draft whose attributes all passed validation.
pub(crate) struct Checked<'a> {
    pub from: &'a City,
    pub to: &'a City,
    pub bus: &'a Bus,
    pub start_time: ClockTime,
    pub duration_minutes: u64,
    pub price_cents: u64,
}

impl TripDraft {
    /// Validate the draft and convert it into a [`Trip`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_trips::domain::{Bus, City, TripDraft};
    ///
    /// let draft = TripDraft {
    ///     from: Some(City::new(1, "A")),
    ///     to: Some(City::new(2, "B")),
    ///     bus: Some(Bus::new(1, "X1", "Volvo")),
    ///     start_time: Some("09:00".to_string()),
    ///     duration_minutes: Some(90),
    ///     price_cents: Some(1599),
    /// };
    /// let trip = draft.build().unwrap();
    /// assert_eq!(trip.arrival_time().to_string(), "10:30");
    ///
    /// let errors = TripDraft::default().build().unwrap_err();
    /// assert_eq!(errors.len(), 6);
    /// ```
    pub fn build(&self) -> Result<Trip, ValidationErrors> {
        let checked = check(self)?;
        Ok(Trip::from_checked(checked))
    }
}

/// Check every rule against `draft`.
///
/// All violations are collected, in field order. A missing attribute
/// yields only its presence error.
pub fn validate(draft: &TripDraft) -> Result<(), ValidationErrors> {
    check(draft).map(|_| ())
}

pub(crate) fn check(draft: &TripDraft) -> Result<Checked<'_>, ValidationErrors> {
    let from = required(Field::From, draft.from.as_ref());
    let to = required(Field::To, draft.to.as_ref());
    let bus = required(Field::Bus, draft.bus.as_ref());
    let start_time = start_time(draft.start_time.as_deref());
    let duration_minutes = positive(Field::DurationMinutes, draft.duration_minutes);
    let price_cents = positive(Field::PriceCents, draft.price_cents);

    let errors: Vec<FieldError> = [
        from.as_ref().err(),
        to.as_ref().err(),
        bus.as_ref().err(),
        start_time.as_ref().err(),
        duration_minutes.as_ref().err(),
        price_cents.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();

    if let Some(errors) = ValidationErrors::from_errors(errors) {
        return Err(errors);
    }

    Ok(Checked {
        from: from?,
        to: to?,
        bus: bus?,
        start_time: start_time?,
        duration_minutes: duration_minutes?,
        price_cents: price_cents?,
    })
}

fn required<T>(field: Field, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::new(field, Violation::Blank))
}

fn start_time(value: Option<&str>) -> Result<ClockTime, FieldError> {
    let raw = required(Field::StartTime, value)?;
    ClockTime::parse_hhmm(raw).map_err(|_| FieldError::new(Field::StartTime, Violation::InvalidTime))
}

fn positive(field: Field, value: Option<i64>) -> Result<u64, FieldError> {
    let n = required(field, value)?;
    if n <= 0 {
        return Err(FieldError::new(field, Violation::NotPositive));
    }
    Ok(n.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TripDraft {
        TripDraft {
            from: Some(City::new(1, "A")),
            to: Some(City::new(2, "B")),
            bus: Some(Bus::new(1, "X1", "Volvo")),
            start_time: Some("09:00".to_string()),
            duration_minutes: Some(90),
            price_cents: Some(1599),
        }
    }

    fn single_error(draft: &TripDraft) -> FieldError {
        let errors = validate(draft).unwrap_err();
        assert_eq!(errors.len(), 1, "expected one error, got {:?}", errors);
        errors.errors()[0].clone()
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn missing_references() {
        let draft = TripDraft { from: None, ..valid_draft() };
        assert_eq!(single_error(&draft).to_string(), "from is required");

        let draft = TripDraft { to: None, ..valid_draft() };
        assert_eq!(single_error(&draft).to_string(), "to is required");

        let draft = TripDraft { bus: None, ..valid_draft() };
        assert_eq!(single_error(&draft).to_string(), "bus is required");
    }

    #[test]
    fn missing_scalars() {
        let draft = TripDraft { start_time: None, ..valid_draft() };
        assert_eq!(
            single_error(&draft),
            FieldError::new(Field::StartTime, Violation::Blank)
        );

        let draft = TripDraft { duration_minutes: None, ..valid_draft() };
        assert_eq!(single_error(&draft).to_string(), "duration_minutes is required");

        let draft = TripDraft { price_cents: None, ..valid_draft() };
        assert_eq!(single_error(&draft).to_string(), "price_cents is required");
    }

    #[test]
    fn malformed_start_times() {
        for bad in ["24:00", "9:30", "12:60", "ab:cd", "", "09:00 ", "0900"] {
            let draft = TripDraft {
                start_time: Some(bad.to_string()),
                ..valid_draft()
            };
            let err = single_error(&draft);
            assert_eq!(err.violation, Violation::InvalidTime, "{bad:?}");
            assert_eq!(err.to_string(), "Invalid time");
        }
    }

    #[test]
    fn boundary_start_times() {
        for good in ["00:00", "23:59", "19:59", "20:00"] {
            let draft = TripDraft {
                start_time: Some(good.to_string()),
                ..valid_draft()
            };
            assert!(validate(&draft).is_ok(), "{good:?}");
        }
    }

    #[test]
    fn non_positive_numbers() {
        for n in [0, -1, -90] {
            let draft = TripDraft { duration_minutes: Some(n), ..valid_draft() };
            assert_eq!(
                single_error(&draft).to_string(),
                "duration_minutes must be greater than 0"
            );

            let draft = TripDraft { price_cents: Some(n), ..valid_draft() };
            assert_eq!(
                single_error(&draft).to_string(),
                "price_cents must be greater than 0"
            );
        }
    }

    #[test]
    fn large_positive_numbers_are_valid() {
        let draft = TripDraft {
            duration_minutes: Some(5_000_000_000),
            price_cents: Some(5_000_000_000),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());

        let draft = TripDraft {
            duration_minutes: Some(i64::MAX),
            price_cents: Some(i64::MAX),
            ..valid_draft()
        };
        let trip = draft.build().unwrap();
        assert_eq!(trip.duration_minutes(), i64::MAX.unsigned_abs());
        assert_eq!(trip.price_cents(), i64::MAX.unsigned_abs());
    }

    #[test]
    fn every_violation_is_reported_in_field_order() {
        let draft = TripDraft {
            from: None,
            to: Some(City::new(2, "B")),
            bus: None,
            start_time: Some("25:00".to_string()),
            duration_minutes: Some(0),
            price_cents: None,
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "from is required",
                "bus is required",
                "Invalid time",
                "duration_minutes must be greater than 0",
                "price_cents is required",
            ]
        );
    }

    #[test]
    fn empty_draft_reports_all_six_presence_errors() {
        let errors = TripDraft::default().build().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.errors().iter().all(|e| e.violation == Violation::Blank));
    }

    #[test]
    fn same_origin_and_destination_is_allowed() {
        let draft = TripDraft {
            to: Some(City::new(1, "A")),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());
    }
}
