//! Money type for currency amounts
//!
//! Amounts are stored as integer minor units (cents, i64) so that summing
//! many transactions never accumulates floating-point drift. Floats only
//! appear when a ratio is computed for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Subtract, clamping the result at zero
    pub const fn saturating_sub_to_zero(&self, other: Self) -> Self {
        let diff = self.0 - other.0;
        if diff < 0 {
            Self(0)
        } else {
            Self(diff)
        }
    }

    /// Ratio of this amount over `total`, as a percentage
    ///
    /// Returns 0.0 when `total` is zero. The result is not clamped.
    pub fn percent_of(&self, total: Self) -> f64 {
        if total.0 == 0 {
            0.0
        } else {
            (self.0 as f64 / total.0 as f64) * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "$10.50" and whole amounts like "10".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        // The sign goes before the symbol ("-$10.50"), never after it
        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let mut parts = s.splitn(2, '.');
        let whole: i64 = parts
            .next()
            .unwrap_or("")
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        let frac = match parts.next() {
            None | Some("") => 0,
            Some(frac_str) => {
                if frac_str.len() > 2 || !frac_str.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }
                let frac: i64 = frac_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
                if frac_str.len() == 1 {
                    frac * 10
                } else {
                    frac
                }
            }
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let abs = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert!(m.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_saturating_sub_to_zero() {
        let limit = Money::from_cents(10000);
        let spent = Money::from_cents(15000);
        assert_eq!(limit.saturating_sub_to_zero(spent), Money::zero());
        assert_eq!(
            spent.saturating_sub_to_zero(limit),
            Money::from_cents(5000)
        );
    }

    #[test]
    fn test_percent_of() {
        let spent = Money::from_cents(5000);
        let limit = Money::from_cents(10000);
        assert!((spent.percent_of(limit) - 50.0).abs() < f64::EPSILON);
        assert_eq!(spent.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("10.505").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_sign_must_precede_symbol() {
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        assert!(Money::parse("$-10.50").is_err());
        assert!(Money::parse("$+10.50").is_err());
        assert!(Money::parse("+10.50").is_err());
        assert!(Money::parse("-$-10.50").is_err());
    }

    #[test]
    fn test_parse_overflow_rejected() {
        assert!(Money::parse("99999999999999999.99").is_err());
        assert!(Money::parse("-99999999999999999.99").is_err());
        // Well within range still parses
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
