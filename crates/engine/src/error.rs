//! The module contains the errors the engine can report.
//!
//! A submission fails as a whole with [`CapReached`] or with the
//! collected per-field failures in [`Validation`]; the field-level
//! cases are the [`ValidationError`] variants.
//!
//! [`CapReached`]: EngineError::CapReached
//! [`Validation`]: EngineError::Validation
use thiserror::Error;

/// The four form fields, used to key field-level validation results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    FromAccount,
    Date,
    Note,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [Field::Amount, Field::FromAccount, Field::Date, Field::Note];

    /// Label shown next to the input row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Amount => "Amount",
            Field::FromAccount => "From Account",
            Field::Date => "Date",
            Field::Note => "Note",
        }
    }
}

/// A single field-level validation failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingValue(Field),
    #[error("Enter a valid amount")]
    PatternMismatch,
    #[error("Account selection is required")]
    InvalidSelection,
    #[error("Enter a valid date")]
    UnresolvableDate,
    #[error("Note must be at most {max} characters")]
    LengthExceeded { max: usize },
}

impl ValidationError {
    /// The field the failure belongs to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingValue(field) => *field,
            ValidationError::PatternMismatch => Field::Amount,
            ValidationError::InvalidSelection => Field::FromAccount,
            ValidationError::UnresolvableDate => Field::Date,
            ValidationError::LengthExceeded { .. } => Field::Note,
        }
    }
}

fn missing_message(field: &Field) -> &'static str {
    match field {
        Field::Amount => "Amount is required",
        Field::FromAccount => "Account selection is required",
        Field::Date => "Date is required",
        Field::Note => "Note is required",
    }
}

/// Engine custom errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("You can only add {0} bills")]
    CapReached(usize),
    #[error("invalid bill")]
    Validation(Vec<ValidationError>),
}
