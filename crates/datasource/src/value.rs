//! Scalar values yielded by a data cursor

use serde::{Deserialize, Serialize};

/// A scalar value read from a data source column.
///
/// Consumers only ever need the text or numeric interpretation, so the
/// conversions are total: anything can be rendered as a string, and
/// anything can be coerced to a number (with 0.0 as the fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Missing value (unknown column, empty cell)
    Null,
}

impl Value {
    /// Check if the value is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric interpretation: numbers pass through, text is parsed
    /// (0.0 when it does not parse), null is 0.0.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse().unwrap_or(0.0),
            Value::Null => 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => {
                // Integral numbers print without a decimal point
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Null => Ok(()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_conversions() {
        assert_eq!(Value::Number(12.5).as_number(), 12.5);
        assert_eq!(Value::Text("42".to_string()).as_number(), 42.0);
        assert_eq!(Value::Text(" 3.5 ".to_string()).as_number(), 3.5);
        assert_eq!(Value::Text("abc".to_string()).as_number(), 0.0);
        assert_eq!(Value::Null.as_number(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Text("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Number(20.0).to_string(), "20");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Number(0.0).is_null());
    }
}
