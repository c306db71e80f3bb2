//! Height sequences and the text parser that produces them.
//!
//! Two spellings are accepted:
//! - an array literal: `[0,4,0,0,0,6,0,6,4,0]`
//! - a comma-separated list: `0, 4, 0, 0, 0, 6, 0, 6, 4, 0`
//!
//! Blank input is an empty sequence, not an error.

use crate::error::HeightsError;
use crate::water::WaterProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The demonstration profile loaded by the "example" action.
pub const EXAMPLE_HEIGHTS: [u32; 10] = [0, 4, 0, 0, 0, 6, 0, 6, 4, 0];

/// An ordered sequence of non-negative integer column heights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heights(Vec<u32>);

impl Heights {
    /// Wrap an already-validated sequence.
    #[must_use]
    pub const fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    /// The canonical demonstration sequence.
    #[must_use]
    pub fn example() -> Self {
        Self(EXAMPLE_HEIGHTS.to_vec())
    }

    /// Borrow the heights as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Run the water engine over this sequence.
    #[must_use]
    pub fn water_profile(&self) -> WaterProfile {
        WaterProfile::compute(&self.0)
    }
}

impl Deref for Heights {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl From<Vec<u32>> for Heights {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl FromStr for Heights {
    type Err = HeightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_heights(s)
    }
}

/// Formats as a compact array literal, e.g. `[0,4,0]`.
impl fmt::Display for Heights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, h) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{h}")?;
        }
        f.write_str("]")
    }
}

/// A value as read from the text, before validation.
#[derive(Debug, Clone, PartialEq)]
enum RawValue {
    Number(f64),
    Other(String),
}

/// Parse raw text into a validated height sequence.
///
/// # Errors
///
/// - [`HeightsError::InvalidFormat`] when bracketed text is not an array literal
/// - [`HeightsError::NonNumeric`] when a value is not a finite number
/// - [`HeightsError::NegativeHeight`] when a value is below zero
/// - [`HeightsError::NonIntegerHeight`] when a value has a fractional part
/// - [`HeightsError::HeightOutOfRange`] when a value does not fit a `u32`
///
/// Categories are checked in that order across the whole sequence, so
/// `"-1,x"` reports the non-numeric token rather than the negative value.
pub fn parse_heights(raw: &str) -> Result<Heights, HeightsError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Heights::default());
    }

    let values = if text.starts_with('[') || text.ends_with(']') {
        read_array_literal(text)?
    } else {
        read_comma_list(text)
    };

    validate(&values).map(Heights::new)
}

fn read_array_literal(text: &str) -> Result<Vec<RawValue>, HeightsError> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        // serde_json refuses literals such as `1e400`; read the elements one
        // by one so the overflowing value is reported as non-numeric.
        Err(e) if e.to_string().starts_with("number out of range") => {
            let inner = text.trim_start_matches('[').trim_end_matches(']');
            return Ok(read_comma_list(inner));
        }
        Err(e) => {
            return Err(HeightsError::InvalidFormat {
                reason: e.to_string(),
            })
        }
    };

    let serde_json::Value::Array(items) = value else {
        return Err(HeightsError::InvalidFormat {
            reason: "expected an array literal".to_string(),
        });
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map_or_else(|| RawValue::Other(n.to_string()), RawValue::Number),
            other => RawValue::Other(other.to_string()),
        })
        .collect())
}

fn read_comma_list(text: &str) -> Vec<RawValue> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(n) if n.is_finite() => RawValue::Number(n),
            _ => RawValue::Other(token.to_string()),
        })
        .collect()
}

fn validate(values: &[RawValue]) -> Result<Vec<u32>, HeightsError> {
    let mut numbers = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match value {
            RawValue::Number(n) if n.is_finite() => numbers.push(*n),
            RawValue::Number(n) => {
                return Err(HeightsError::NonNumeric {
                    index,
                    token: n.to_string(),
                })
            }
            RawValue::Other(token) => {
                return Err(HeightsError::NonNumeric {
                    index,
                    token: token.clone(),
                })
            }
        }
    }

    if let Some((index, &value)) = numbers.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(HeightsError::NegativeHeight { index, value });
    }

    if let Some((index, &value)) = numbers.iter().enumerate().find(|(_, v)| v.fract() != 0.0) {
        return Err(HeightsError::NonIntegerHeight { index, value });
    }

    numbers
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if value > f64::from(u32::MAX) {
                Err(HeightsError::HeightOutOfRange {
                    index,
                    value,
                    max: u32::MAX,
                })
            } else {
                Ok(value as u32)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_array_literal() {
        let h = parse_heights("[0,4,0,0,0,6,0,6,4,0]").unwrap();
        assert_eq!(h.as_slice(), &EXAMPLE_HEIGHTS);
    }

    #[test]
    fn test_parse_comma_list() {
        let h = parse_heights("0,4,0,0,0,6,0,6,4,0").unwrap();
        assert_eq!(h, Heights::example());
    }

    #[test]
    fn test_parse_comma_list_trims_and_drops_empty_tokens() {
        let h = parse_heights("  3 ,, 1,\t2 , ").unwrap();
        assert_eq!(h.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_heights("5").unwrap().as_slice(), &[5]);
    }

    #[test]
    fn test_parse_whitespace_is_empty() {
        assert!(parse_heights("").unwrap().is_empty());
        assert!(parse_heights("   \n\t").unwrap().is_empty());
        assert!(parse_heights(" , ,").unwrap().is_empty());
        assert!(parse_heights("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_whole_floats_accepted() {
        assert_eq!(parse_heights("[1.0, 2e1]").unwrap().as_slice(), &[1, 20]);
        assert_eq!(parse_heights("-0, +3").unwrap().as_slice(), &[0, 3]);
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(matches!(
            parse_heights("[1,2"),
            Err(HeightsError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_heights("1,2]"),
            Err(HeightsError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            parse_heights("a,b,c"),
            Err(HeightsError::NonNumeric {
                index: 0,
                token: "a".to_string()
            })
        );
        assert!(matches!(
            parse_heights("1, inf"),
            Err(HeightsError::NonNumeric { index: 1, .. })
        ));
        assert!(matches!(
            parse_heights("NaN"),
            Err(HeightsError::NonNumeric { index: 0, .. })
        ));
        assert!(matches!(
            parse_heights(r#"[1, "2"]"#),
            Err(HeightsError::NonNumeric { index: 1, .. })
        ));
        assert!(matches!(
            parse_heights("[null]"),
            Err(HeightsError::NonNumeric { index: 0, .. })
        ));
        assert!(matches!(
            parse_heights("[[1], 2]"),
            Err(HeightsError::NonNumeric { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_overflowing_literal_is_non_numeric() {
        assert_eq!(
            parse_heights("[1, 1e400]"),
            Err(HeightsError::NonNumeric {
                index: 1,
                token: "1e400".to_string()
            })
        );
        assert_eq!(
            parse_heights("2, -1e400"),
            Err(HeightsError::NonNumeric {
                index: 1,
                token: "-1e400".to_string()
            })
        );
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(
            parse_heights("-1,2,3"),
            Err(HeightsError::NegativeHeight {
                index: 0,
                value: -1.0
            })
        );
        assert!(matches!(
            parse_heights("[1, -2]"),
            Err(HeightsError::NegativeHeight { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_non_integer() {
        assert_eq!(
            parse_heights("1.5,2"),
            Err(HeightsError::NonIntegerHeight {
                index: 0,
                value: 1.5
            })
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            parse_heights("1, 4294967296"),
            Err(HeightsError::HeightOutOfRange { index: 1, .. })
        ));
        assert_eq!(
            parse_heights("4294967295").unwrap().as_slice(),
            &[u32::MAX]
        );
    }

    #[test]
    fn test_category_order() {
        // Non-numeric is reported before an earlier negative value.
        assert!(matches!(
            parse_heights("-1, x"),
            Err(HeightsError::NonNumeric { index: 1, .. })
        ));
        // Negative is reported before an earlier fractional value.
        assert!(matches!(
            parse_heights("0.5, -1"),
            Err(HeightsError::NegativeHeight { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let h: Heights = "2, 0, 2".parse().unwrap();
        assert_eq!(h.water_profile().total, 2);
    }

    #[test]
    fn test_display_is_array_literal() {
        assert_eq!(Heights::example().to_string(), "[0,4,0,0,0,6,0,6,4,0]");
        assert_eq!(Heights::default().to_string(), "[]");
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(values in proptest::collection::vec(0u32..1000, 0..40)) {
            let heights = Heights::new(values);
            prop_assert_eq!(parse_heights(&heights.to_string()).unwrap(), heights);
        }

        #[test]
        fn prop_comma_list_matches_array_literal(values in proptest::collection::vec(0u32..1000, 1..40)) {
            let list = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            let literal = format!("[{list}]");
            prop_assert_eq!(parse_heights(&list).unwrap(), parse_heights(&literal).unwrap());
        }
    }
}
