//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (hundredths of the currency unit)
//! as i64 so that running totals are exact. On the wire an amount is a plain
//! JSON number in major units (`50000`, `12.5`), which is what the persisted
//! transaction list has always contained.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const MINOR_PER_MAJOR: i64 = 100;

/// Default currency symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction may carry (₹10 lakh crore).
    /// Kept well below 2^53 minor units so the JSON number form round-trips
    /// exactly and totals over any realistic ledger stay inside `i64`.
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(major: i64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    /// Convert a floating point major-unit amount, rounding to the nearest
    /// minor unit. Returns `None` for NaN, infinities and values outside the
    /// representable range.
    ///
    /// ```
    /// use pocket_ledger::models::Money;
    /// assert_eq!(Money::from_f64(12.5), Some(Money::from_minor(1250)));
    /// assert_eq!(Money::from_f64(f64::NAN), None);
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor < i64::MIN as f64 || minor > i64::MAX as f64 {
            return None;
        }
        Some(Self(minor as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major units (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Get the minor part (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Amount in major units as a float, used for serialization
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// True if the magnitude does not exceed `Money::MAX`
    pub const fn is_within_limit(&self) -> bool {
        self.0 >= -Self::MAX.0 && self.0 <= Self::MAX.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10", "1,23,456.5".
    /// Extra fraction digits round to the nearest minor unit, the same way
    /// `from_f64` does. Magnitudes above `Money::MAX` are out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest
            .trim_start_matches(|c: char| c == '₹' || c == '$')
            .replace(',', "");

        if rest.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        // Two digits of fraction, rounded half away from zero on the third
        let digit = |i: usize| {
            fraction
                .as_bytes()
                .get(i)
                .map_or(0, |b| i64::from(b - b'0'))
        };
        let minor = digit(0) * 10 + digit(1) + i64::from(digit(2) >= 5);

        let total = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .filter(|total| *total <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol and Indian digit grouping
    /// (`₹1,23,456.5`). The fraction is shown only when non-zero, without
    /// trailing zeros.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_indian(self.major().unsigned_abs());
        let fraction = match self.minor_part() {
            0 => String::new(),
            p if p % 10 == 0 => format!(".{}", p / 10),
            p => format!(".{:02}", p),
        };
        format!("{}{}{}{}", sign, symbol, whole, fraction)
    }
}

/// Group digits the en-IN way: last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.minor_part() == 0 {
            serializer.serialize_i64(self.major())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(MINOR_PER_MAJOR)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(format!("amount out of range: {}", v)))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
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
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_from_f64_rounds_to_minor_units() {
        assert_eq!(Money::from_f64(0.1), Some(Money::from_minor(10)));
        assert_eq!(Money::from_f64(19.999), Some(Money::from_minor(2000)));
        assert_eq!(Money::from_f64(0.001), Some(Money::zero()));
        assert_eq!(Money::from_f64(f64::INFINITY), None);
        assert_eq!(Money::from_f64(1e300), None);
    }

    #[test]
    fn test_display_uses_indian_grouping() {
        assert_eq!(Money::from_major(0).to_string(), "₹0");
        assert_eq!(Money::from_major(999).to_string(), "₹999");
        assert_eq!(Money::from_major(1000).to_string(), "₹1,000");
        assert_eq!(Money::from_major(123_456).to_string(), "₹1,23,456");
        assert_eq!(Money::from_major(12_345_678).to_string(), "₹1,23,45,678");
        assert_eq!(Money::from_minor(123_450).to_string(), "₹1,234.5");
        assert_eq!(Money::from_minor(5).to_string(), "₹0.05");
        assert_eq!(Money::from_major(-35_000).to_string(), "-₹35,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_minor(1050).format_with_symbol("$"), "$10.5");
        assert_eq!(Money::from_minor(-1099).format_with_symbol("Rs "), "-Rs 10.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.minor(), 2000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("$10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("-10.5").unwrap().minor(), -1050);
        assert_eq!(Money::parse("1,23,456").unwrap().minor(), 12_345_600);
        assert_eq!(Money::parse(".75").unwrap().minor(), 75);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_rounds_like_from_f64() {
        assert_eq!(Money::parse("12.999").unwrap(), Money::from_f64(12.999).unwrap());
        assert_eq!(Money::parse("12.994").unwrap().minor(), 1299);
        assert_eq!(Money::parse("0.005").unwrap().minor(), 1);
        assert_eq!(Money::parse("-1.995").unwrap().minor(), -200);
    }

    #[test]
    fn test_parse_rejects_amounts_above_max() {
        assert_eq!(Money::parse("10000000000000").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("10000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("-10000000000001"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_max_amount_round_trips_through_json() {
        for minor in [Money::MAX.minor(), Money::MAX.minor() - 1, 999_999_999_999_971] {
            let amount = Money::from_minor(minor);
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "{}", json);
        }
    }

    #[test]
    fn test_limit_and_checked_ops() {
        assert!(Money::MAX.is_within_limit());
        assert!((-Money::MAX).is_within_limit());
        assert!(!Money::from_minor(Money::MAX.minor() + 1).is_within_limit());
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
        assert_eq!(Money::from_minor(i64::MIN).checked_sub(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_major(5).checked_sub(Money::from_major(7)),
            Some(Money::from_major(-2))
        );
    }

    #[test]
    fn test_serializes_as_major_units() {
        assert_eq!(serde_json::to_string(&Money::from_major(50000)).unwrap(), "50000");
        assert_eq!(serde_json::to_string(&Money::from_minor(1250)).unwrap(), "12.5");

        let whole: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(whole, Money::from_major(15000));
        let fractional: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(fractional, Money::from_minor(9999));
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
