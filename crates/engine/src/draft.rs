//! Raw form input and its field-level validation.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    account::Account,
    error::{Field, ValidationError},
    money::MoneyCents,
};

/// Maximum number of characters a note may hold.
///
/// Enforced twice: the form drops keystrokes past the limit and
/// validation still checks the final value.
pub const NOTE_MAX_CHARS: usize = 31;

/// The raw text of the four form fields, as typed.
#[derive(Clone, Debug, Default)]
pub struct BillDraft {
    pub amount: String,
    pub from_account: String,
    pub date: String,
    pub note: String,
}

/// The typed values of a draft whose four fields all validated.
#[derive(Clone, Debug)]
pub struct ValidatedBill {
    pub amount: MoneyCents,
    pub from_account: Account,
    pub date: DateTime<Utc>,
    pub note: String,
}

impl BillDraft {
    /// Validates a single field, as done when focus leaves it.
    #[must_use]
    pub fn validate_field(&self, field: Field, tz: Tz) -> Option<ValidationError> {
        match field {
            Field::Amount => self.check_amount().err(),
            Field::FromAccount => self.check_from_account().err(),
            Field::Date => self.check_date(tz).err(),
            Field::Note => self.check_note().err(),
        }
    }

    /// Validates the whole draft.
    ///
    /// The four rules are independent: a draft with an empty amount
    /// and an over-long note reports both failures at once.
    pub fn validate(&self, tz: Tz) -> Result<ValidatedBill, Vec<ValidationError>> {
        let amount = self.check_amount();
        let from_account = self.check_from_account();
        let date = self.check_date(tz);
        let note = self.check_note();

        match (amount, from_account, date, note) {
            (Ok(amount), Ok(from_account), Ok(date), Ok(note)) => Ok(ValidatedBill {
                amount,
                from_account,
                date,
                note,
            }),
            (amount, from_account, date, note) => Err([
                amount.err(),
                from_account.err(),
                date.err(),
                note.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }

    fn check_amount(&self) -> Result<MoneyCents, ValidationError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingValue(Field::Amount));
        }
        raw.parse()
    }

    fn check_from_account(&self) -> Result<Account, ValidationError> {
        let raw = self.from_account.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingValue(Field::FromAccount));
        }
        Account::try_from(raw)
    }

    fn check_date(&self, tz: Tz) -> Result<DateTime<Utc>, ValidationError> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingValue(Field::Date));
        }
        resolve_date(raw, tz).ok_or(ValidationError::UnresolvableDate)
    }

    fn check_note(&self) -> Result<String, ValidationError> {
        if self.note.is_empty() {
            return Err(ValidationError::MissingValue(Field::Note));
        }
        if self.note.chars().count() > NOTE_MAX_CHARS {
            return Err(ValidationError::LengthExceeded {
                max: NOTE_MAX_CHARS,
            });
        }
        Ok(self.note.clone())
    }
}

/// Resolves `YYYY-MM-DD` text to local midnight in `tz`, as UTC.
fn resolve_date(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let local = tz.from_local_datetime(&midnight).earliest()?;
    Some(local.with_timezone(&Utc))
}
