//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. At the boundary (snapshot files, JSON output) amounts travel as
//! decimal numbers with two decimals.
//!
//! Input is coerced permissively: a non-finite float or an unparsable string
//! becomes zero instead of an error. Callers that need strict validation use
//! [`Money::parse`] and check the result themselves.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Cents per whole currency unit
pub const CENTS_PER_UNIT: i64 = 100;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use draagkracht::models::Money;
    /// let amount = Money::from_cents(3740); // €37.40
    /// assert_eq!(amount.to_string(), "€37.40");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use draagkracht::models::Money;
    /// assert_eq!(Money::from_units(1626).cents(), 162_600);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    /// Create a Money amount from a decimal number
    ///
    /// NaN and infinities become zero. Values are rounded to the nearest cent.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self((value * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// The amount as a decimal number, for serialization
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Clamp negative amounts to zero
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// Drop the cents, rounding toward negative infinity
    pub const fn floor_units(&self) -> Self {
        Self(self.0.div_euclid(CENTS_PER_UNIT) * CENTS_PER_UNIT)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "€10.50", "$10.50", "10,50",
    /// "1.626,50", "1,626.50" and "10". A lone comma is read as the decimal
    /// separator; when both separators occur the last one is decimal.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let rest = rest
            .trim_start_matches(['€', '$'])
            .trim()
            .replace(' ', "");

        let normalized = match (rest.rfind('.'), rest.rfind(',')) {
            (Some(dot), Some(comma)) if comma > dot => rest.replace('.', "").replace(',', "."),
            (Some(_), Some(_)) => rest.replace(',', ""),
            (None, Some(_)) => rest.replace(',', "."),
            _ => rest,
        };

        if normalized.is_empty() {
            return Err(invalid());
        }

        let cents = if let Some((whole, fraction)) = normalized.split_once('.') {
            let whole: i64 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };

            // Pad or truncate to 2 digits
            let fraction_cents: i64 = match fraction.len() {
                0 => 0,
                1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => fraction
                    .get(..2)
                    .ok_or_else(invalid)?
                    .parse()
                    .map_err(|_| invalid())?,
            };

            if fraction.chars().any(|c| !c.is_ascii_digit()) {
                return Err(invalid());
            }

            whole
                .checked_mul(CENTS_PER_UNIT)
                .and_then(|c| c.checked_add(fraction_cents))
                .ok_or_else(invalid)?
        } else {
            normalized
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(CENTS_PER_UNIT)
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse a money amount, treating anything unparsable as zero
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
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
        write!(f, "{}", self.format_with_symbol("€"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount, a whole amount or an amount string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Ok(Money::from_decimal(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(v.checked_mul(CENTS_PER_UNIT)
            .map(Money::from_cents)
            .unwrap_or_default())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(CENTS_PER_UNIT))
            .map(Money::from_cents)
            .unwrap_or_default())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Ok(Money::parse_lenient(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
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
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(37.4).cents(), 3740);
        assert_eq!(Money::from_decimal(1962.6).cents(), 196_260);
        assert_eq!(Money::from_decimal(-10.25).cents(), -1025);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
        assert_eq!(Money::from_decimal(f64::INFINITY), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "€10.50");
        assert_eq!(Money::zero().to_string(), "€0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-€10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("$"), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_non_negative_and_floor() {
        assert_eq!(Money::from_units(-100).non_negative(), Money::zero());
        assert_eq!(Money::from_cents(1099).non_negative().cents(), 1099);
        assert_eq!(Money::from_cents(1099).floor_units().cents(), 1000);
        assert_eq!(Money::from_cents(-1).floor_units().cents(), -100);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("€10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1.626,50").unwrap().cents(), 162_650);
        assert_eq!(Money::parse("1,626.50").unwrap().cents(), 162_650);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.5x").is_err());
        assert_eq!(Money::parse_lenient("abc"), Money::zero());
        assert_eq!(Money::parse_lenient(""), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(196_260);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1962.6");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_permissive_deserialization() {
        let whole: Money = serde_json::from_str("1626").unwrap();
        assert_eq!(whole.cents(), 162_600);

        let text: Money = serde_json::from_str("\"37,40\"").unwrap();
        assert_eq!(text.cents(), 3740);

        let garbage: Money = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(garbage, Money::zero());

        let null: Money = serde_json::from_str("null").unwrap();
        assert_eq!(null, Money::zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge: Money = serde_json::from_str("1e17").unwrap();
        assert_eq!(huge.cents(), i64::MAX);

        let total: Money = [huge, huge].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let min = Money::from_cents(i64::MIN);
        assert_eq!((min - Money::from_cents(1)).cents(), i64::MIN);
        assert_eq!((-min).cents(), i64::MAX);
        assert_eq!(min.abs().cents(), i64::MAX);

        let mut acc = huge;
        acc += Money::from_units(1);
        assert_eq!(acc, huge);
        acc -= Money::from_cents(i64::MAX);
        acc -= Money::from_cents(i64::MAX);
        assert_eq!(acc.cents(), -i64::MAX);
    }
}
