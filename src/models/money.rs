//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, parsing of the decimal forms
//! found in exported spreadsheets, and BRL formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default currency symbol for display
pub const DEFAULT_SYMBOL: &str = "R$";

/// Largest absolute amount `parse` accepts: one trillion reais, in centavos
pub const MAX_PARSE_CENTS: i64 = 100_000_000_000_000;

/// Represents a monetary amount stored as centavos (hundredths of a real)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use gastos::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from reais and centavos
    ///
    /// # Examples
    /// ```
    /// use gastos::models::Money;
    /// let amount = Money::from_reais_cents(10, 50); // R$ 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_reais_cents(reais: i64, cents: i64) -> Self {
        Self(reais * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add, clamping at the bounds of the representation instead of overflowing
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Divide by a count, rounding half away from zero to the nearest centavo
    ///
    /// Returns `None` when `count` is zero; there is no meaningful average
    /// of nothing.
    pub fn div_round(&self, count: usize) -> Option<Self> {
        let n = i64::try_from(count).ok().filter(|n| *n > 0)?;
        let quotient = self.0 / n;
        let remainder = self.0 % n;
        let rounded = if remainder.abs() * 2 >= n {
            quotient + self.0.signum()
        } else {
            quotient
        };
        Some(Self(rounded))
    }

    /// Share of `whole` taken by this amount, in percent
    ///
    /// A zero `whole` yields 0.0 rather than NaN.
    pub fn percentage_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            (self.0 as f64 / whole.0 as f64) * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "R$ 10,50", "10", "10.5", "1.234,56" and
    /// "1,234.56". When both separators are present the last one is the
    /// decimal separator. Digits past the second fraction digit are rounded
    /// half away from zero. Amounts above [`MAX_PARSE_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let s = s.trim();
        let (mut negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        // Currency symbol, then possibly the sign again ("R$ -10.00")
        let s = s
            .strip_prefix(DEFAULT_SYMBOL)
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .trim_start();
        let s = match s.strip_prefix('-') {
            Some(stripped) if !negative => {
                negative = true;
                stripped
            }
            Some(_) => return Err(invalid()),
            None => s,
        };

        let (int_part, frac_part) = split_decimal(s).ok_or_else(invalid)?;
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let reais: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };

        let digits: Vec<i64> = frac_part
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .collect();
        let mut cents =
            digits.first().copied().unwrap_or(0) * 10 + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_PARSE_CENTS)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal form with two fraction digits and no symbol ("-10.50")
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.reais().abs(), self.cents_part())
    }

    /// Format with a currency symbol ("R$ 10.50", "R$ -10.50")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.to_decimal_string())
    }

    /// Short form used in messages: drops ".00" for whole amounts ("R$500")
    pub fn format_compact(&self, symbol: &str) -> String {
        if self.cents_part() == 0 {
            format!("{}{}", symbol, self.reais())
        } else {
            format!("{}{}", symbol, self.to_decimal_string())
        }
    }
}

/// Split "1.234,56" / "1,234.56" / "10.5" into integer and fraction digits
fn split_decimal(s: &str) -> Option<(String, String)> {
    let last_dot = s.rfind('.');
    let last_comma = s.rfind(',');

    let decimal_sep = match (last_dot, last_comma) {
        (Some(d), Some(c)) => Some(if d > c { '.' } else { ',' }),
        (Some(_), None) => (s.matches('.').count() == 1).then_some('.'),
        (None, Some(_)) => (s.matches(',').count() == 1).then_some(','),
        (None, None) => None,
    };

    match decimal_sep {
        Some(sep) => {
            let idx = s.rfind(sep)?;
            let int_part: String = s[..idx].chars().filter(|c| *c != '.' && *c != ',').collect();
            let frac_part = &s[idx + 1..];
            if frac_part.contains(['.', ',']) {
                return None;
            }
            Some((int_part, frac_part.to_string()))
        }
        None => {
            let int_part: String = s.chars().filter(|c| *c != '.' && *c != ',').collect();
            Some((int_part, String::new()))
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_SYMBOL))
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

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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
