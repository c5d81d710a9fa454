use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Source account a bill is paid from.
///
/// The selector offers a fixed set of accounts; the labels below are
/// both the selector entries and the display strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Account {
    Checking,
    Own,
}

impl Account {
    /// Every selectable account, in selector order.
    pub const ALL: [Account; 2] = [Account::Checking, Account::Own];

    /// Canonical account label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Account::Checking => "Checking Account",
            Account::Own => "Own Account",
        }
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Account {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Checking Account" => Ok(Account::Checking),
            "Own Account" => Ok(Account::Own),
            _ => Err(ValidationError::InvalidSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for account in Account::ALL {
            assert_eq!(Account::try_from(account.label()), Ok(account));
        }
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            Account::try_from("Savings Account"),
            Err(ValidationError::InvalidSelection)
        );
    }
}
