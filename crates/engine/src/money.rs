use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Bill amount represented as **integer cents**.
///
/// Use this type for all monetary values so display and comparison
/// never go through floating point.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "$12.34");
/// ```
///
/// Parsing from form input (digits with an optional `.` and up to two
/// fraction digits; no sign, no separators):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("12".parse::<MoneyCents>().unwrap().cents(), 1200);
/// assert_eq!("12.3".parse::<MoneyCents>().unwrap().cents(), 1230);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}${dollars}.{cents:02}")
    }
}

impl FromStr for MoneyCents {
    type Err = ValidationError;

    /// Parses form text into cents.
    ///
    /// Implements the form rule `digits ( "." digits{0,2} )?`:
    /// - `"12"` → 1200, `"12.3"` → 1230, `"12.34"` → 1234, `"12."` → 1200
    /// - rejects signs, separators and more than two fraction digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::PatternMismatch);
        }

        let (dollars_str, cents_str) = match trimmed.split_once('.') {
            Some((dollars, cents)) => (dollars, Some(cents)),
            None => (trimmed, None),
        };

        if dollars_str.is_empty() || !dollars_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PatternMismatch);
        }
        let dollars: i64 = dollars_str
            .parse()
            .map_err(|_| ValidationError::PatternMismatch)?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::PatternMismatch);
                }
                let value: i64 = frac.parse().map_err(|_| ValidationError::PatternMismatch)?;
                if frac.len() == 1 { value * 10 } else { value }
            }
        };

        dollars
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(MoneyCents)
            .ok_or(ValidationError::PatternMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fraction_forms() {
        assert_eq!("12".parse::<MoneyCents>(), Ok(MoneyCents::new(1200)));
        assert_eq!("12.".parse::<MoneyCents>(), Ok(MoneyCents::new(1200)));
        assert_eq!("12.3".parse::<MoneyCents>(), Ok(MoneyCents::new(1230)));
        assert_eq!("12.34".parse::<MoneyCents>(), Ok(MoneyCents::new(1234)));
        assert_eq!("0.05".parse::<MoneyCents>(), Ok(MoneyCents::new(5)));
    }

    #[test]
    fn rejects_three_fraction_digits() {
        assert_eq!(
            "12.345".parse::<MoneyCents>(),
            Err(ValidationError::PatternMismatch)
        );
    }

    #[test]
    fn rejects_signs_separators_and_garbage() {
        for input in ["", " ", "-5", "+5", "1,5", "12.3.4", ".5", "12a", "a12"] {
            assert!(input.parse::<MoneyCents>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn rejects_overflowing_amounts() {
        assert!("92233720368547758079".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn formats_with_dollar_and_two_decimals() {
        assert_eq!(MoneyCents::new(700).to_string(), "$7.00");
        assert_eq!(MoneyCents::new(1234).to_string(), "$12.34");
        assert_eq!(MoneyCents::new(5).to_string(), "$0.05");
    }
}
