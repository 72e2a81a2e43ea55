//! Field-level validation errors for trips.
//!
//! Validation collects every violated rule rather than stopping at the
//! first, so a caller can report all problems with a submission at once.

use std::fmt;

/// A validated attribute of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    From,
    To,
    Bus,
    StartTime,
    DurationMinutes,
    PriceCents,
}

impl Field {
    /// Attribute name as used in persisted records and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::From => "from",
            Field::To => "to",
            Field::Bus => "bus",
            Field::StartTime => "start_time",
            Field::DurationMinutes => "duration_minutes",
            Field::PriceCents => "price_cents",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Presence: the value or reference is missing.
    Blank,

    /// Format: the start time is not "HH:MM".
    InvalidTime,

    /// Range: the number is zero or negative.
    NotPositive,
}

impl Violation {
    /// The bare message, without the field name.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::Blank => "is required",
            Violation::InvalidTime => "Invalid time",
            Violation::NotPositive => "must be greater than 0",
        }
    }
}

/// A single violated rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl FieldError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            // Downstream consumers match on this exact text.
            Violation::InvalidTime => f.write_str("Invalid time"),
            v => write!(f, "{} {}", self.field, v.message()),
        }
    }
}

/// Every rule a trip violated, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap collected errors. Returns `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// All errors in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Errors reported against one field.
    pub fn on(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// Returns true if `field` broke `violation`.
    pub fn contains(&self, field: Field, violation: Violation) -> bool {
        self.on(field).any(|e| e.violation == violation)
    }

    /// Rendered messages, one per error.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a `ValidationErrors` holds at least one error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
