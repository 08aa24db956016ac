//! Numeric keyword values

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// A numeric keyword value (`maximum`, `multipleOf`, ...)
///
/// Keeps the JSON source text for display and an exact decimal for
/// comparison. Values outside the decimal range (e.g. `1e300`) fall back to
/// `f64` arithmetic.
#[derive(Debug, Clone)]
pub struct SchemaNumber {
    source: String,
    decimal: Option<Decimal>,
    float: f64,
}

impl SchemaNumber {
    pub fn from_json(number: &serde_json::Number) -> Self {
        let source = number.to_string();
        let decimal = Decimal::from_str_exact(&source)
            .or_else(|_| Decimal::from_scientific(&source))
            .ok();
        let float = number
            .as_f64()
            .or_else(|| source.parse().ok())
            .unwrap_or(f64::NAN);
        Self {
            source,
            decimal,
            float,
        }
    }

    /// Returns `None` for NaN and infinities, which JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(|n| Self::from_json(&n))
    }

    /// The number as written in the schema document
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        self.decimal
    }

    pub fn as_f64(&self) -> f64 {
        self.float
    }

    pub fn is_zero(&self) -> bool {
        match self.decimal {
            Some(d) => d.is_zero(),
            None => self.float == 0.0,
        }
    }

    /// Whether every multiple of `self` is also a multiple of `divisor`.
    ///
    /// Exact for decimal-representable values. Returns `None` when either
    /// value is zero or outside the decimal range.
    pub fn is_multiple_of(&self, divisor: &SchemaNumber) -> Option<bool> {
        let (value, divisor) = (self.decimal?, divisor.decimal?);
        if value.is_zero() || divisor.is_zero() {
            return None;
        }
        value.checked_rem(divisor).map(|r| r.is_zero())
    }
}

impl From<i64> for SchemaNumber {
    fn from(value: i64) -> Self {
        Self::from_json(&serde_json::Number::from(value))
    }
}

impl From<u64> for SchemaNumber {
    fn from(value: u64) -> Self {
        Self::from_json(&serde_json::Number::from(value))
    }
}

impl PartialEq for SchemaNumber {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for SchemaNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.decimal, other.decimal) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.float.partial_cmp(&other.float),
        }
    }
}

impl fmt::Display for SchemaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
