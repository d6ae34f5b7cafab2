//! Monetary types for product prices.
//!
//! The catalog sends prices as display strings and mixes decimal separators
//! (`"51.00"`, `"12,5"`). [`Price`] parses both into a [`Decimal`] once, at the
//! boundary, and renders back to a period-separated string.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Unit price of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// Parse a price string with either `.` or `,` as the decimal separator.
    ///
    /// When both separators appear, the rightmost one is the decimal point and
    /// the other is treated as a thousands separator.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPrice`] if the text is not a number.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let invalid = || DomainError::InvalidPrice {
            raw: raw.to_string(),
        };
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
            (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
            (Some(_), Some(_)) => trimmed.replace(',', ""),
            (None, Some(_)) => trimmed.replace(',', "."),
            _ => trimmed.to_string(),
        };

        Decimal::from_str(&normalized)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a price as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Decimal::try_from(v).map(Price).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_period_and_comma_separators() {
        assert_eq!(Price::parse("51.00").unwrap().amount(), dec!(51.00));
        assert_eq!(Price::parse("12,5").unwrap().amount(), dec!(12.5));
        assert_eq!(Price::parse(" 100 ").unwrap().amount(), dec!(100));
    }

    #[test]
    fn rightmost_separator_is_the_decimal_point() {
        assert_eq!(Price::parse("1.234,50").unwrap().amount(), dec!(1234.50));
        assert_eq!(Price::parse("1,234.50").unwrap().amount(), dec!(1234.50));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(
            Price::parse("free"),
            Err(DomainError::InvalidPrice {
                raw: "free".to_string()
            })
        );
        assert!(Price::parse("").is_err());
    }

    #[test]
    fn deserializes_strings_and_numbers() {
        let from_text: Price = serde_json::from_str("\"7,25\"").unwrap();
        let from_int: Price = serde_json::from_str("7").unwrap();
        assert_eq!(from_text.amount(), dec!(7.25));
        assert_eq!(from_int.amount(), dec!(7));
    }

    #[test]
    fn serializes_as_period_string() {
        let price = Price::parse("3,10").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"3.10\"");
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(dec!(2.5)).times(3), dec!(7.5));
    }
}
