//! The module contains the capped in-memory register of bills.
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    ResultEngine, account::Account, draft::BillDraft, entry::BillEntry, error::EngineError,
    money::MoneyCents,
};

/// How many bills the register holds before submission is disabled.
pub const DEFAULT_MAX_ENTRIES: usize = 5;

/// The in-memory list of submitted bills.
///
/// Entries keep insertion order; removal never reorders the rest. The
/// register lives for one session, nothing is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BillRegister {
    entries: Vec<BillEntry>,
    max_entries: usize,
}

impl Default for BillRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl BillRegister {
    /// Creates an empty register with the default cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Creates an empty register holding at most `max_entries` bills.
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Validates `draft` and appends the resulting bill.
    ///
    /// A full register fails with [`EngineError::CapReached`] before
    /// validation runs; an invalid draft fails with every field error
    /// collected in [`EngineError::Validation`]. The register is
    /// unchanged on any failure.
    pub fn submit(&mut self, draft: &BillDraft, tz: Tz) -> ResultEngine<&BillEntry> {
        if self.is_full() {
            return Err(EngineError::CapReached(self.max_entries));
        }

        let bill = draft.validate(tz).map_err(EngineError::Validation)?;
        self.add_entry(bill.amount, bill.from_account, bill.date, bill.note)
    }

    /// Appends an already validated bill.
    pub fn add_entry(
        &mut self,
        amount: MoneyCents,
        from_account: Account,
        date: DateTime<Utc>,
        note: String,
    ) -> ResultEngine<&BillEntry> {
        if self.is_full() {
            return Err(EngineError::CapReached(self.max_entries));
        }

        let entry = BillEntry::new(amount, from_account, date, note);
        tracing::debug!(id = %entry.id, %amount, "bill added");
        self.entries.push(entry);

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Removes the bill with `id`, returning it.
    ///
    /// Removing an id that is not present is a no-op, not an error.
    pub fn remove_entry(&mut self, id: Uuid) -> Option<BillEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(index);
        tracing::debug!(id = %entry.id, "bill removed");
        Some(entry)
    }

    /// The submitted bills, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[BillEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` once the cap is reached and submission is disabled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_entries
    }

    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn add_bill(register: &mut BillRegister, note: &str) -> Uuid {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        register
            .add_entry(MoneyCents::new(2500), Account::Own, date, note.to_string())
            .unwrap()
            .id
    }

    #[test]
    fn appends_until_the_cap_then_rejects() {
        let mut register = BillRegister::with_max_entries(2);

        add_bill(&mut register, "first");
        add_bill(&mut register, "second");
        assert!(register.is_full());

        let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let err = register
            .add_entry(MoneyCents::new(100), Account::Checking, date, "third".to_string())
            .unwrap_err();
        assert_eq!(err, EngineError::CapReached(2));
        assert_eq!(register.len(), 2);
    }

    #[test]
    fn ids_are_unique() {
        let mut register = BillRegister::new();
        let first = add_bill(&mut register, "a");
        let second = add_bill(&mut register, "b");
        assert_ne!(first, second);
    }

    #[test]
    fn removal_keeps_the_relative_order() {
        let mut register = BillRegister::new();
        add_bill(&mut register, "a");
        let middle = add_bill(&mut register, "b");
        add_bill(&mut register, "c");

        let removed = register.remove_entry(middle).unwrap();
        assert_eq!(removed.note, "b");

        let notes: Vec<_> = register.entries().iter().map(|e| e.note.as_str()).collect();
        assert_eq!(notes, ["a", "c"]);
    }

    #[test]
    fn removing_an_absent_id_is_a_no_op() {
        let mut register = BillRegister::new();
        add_bill(&mut register, "a");

        assert!(register.remove_entry(Uuid::new_v4()).is_none());
        assert_eq!(register.len(), 1);
    }
}
