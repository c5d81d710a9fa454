//! The module contains the `BillEntry` type, one submitted bill.
use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{account::Account, money::MoneyCents};

/// One validated, submitted bill held by the register.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BillEntry {
    pub id: Uuid,
    pub amount: MoneyCents,
    pub from_account: Account,
    pub date: DateTime<Utc>,
    pub note: String,
}

impl BillEntry {
    /// Builds an entry with a freshly generated id.
    pub fn new(
        amount: MoneyCents,
        from_account: Account,
        date: DateTime<Utc>,
        note: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            from_account,
            date,
            note,
        }
    }
}

impl fmt::Display for BillEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.from_account, self.note)
    }
}
