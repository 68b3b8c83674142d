//! Numeral input: the integer-or-digits union and its normalization
//!
//! A numeral may arrive as a machine integer or as user-entered text in
//! Latin or Arabic-Indic glyphs. Normalization folds every accepted form
//! into one bounded unsigned value before any composition runs.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Most significant digits a supported number may have: eight scale tiers
/// of three digits each
pub const MAX_DIGITS: usize = 24;

/// Largest value the scale-word table can spell, 10²⁴ − 1
pub const MAX: u128 = 10u128.pow(MAX_DIGITS as u32) - 1;

/// The accepted input union: an integer or a digit string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Numeral {
    /// Machine integer input
    Int(i128),
    /// Digit-string input, validated during normalization
    Digits(String),
}

impl Default for Numeral {
    fn default() -> Self {
        Numeral::Int(0)
    }
}

// The derived untagged deserializer buffers values in a form without
// 128-bit integers, so the integer-or-string union is read by hand.
impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumeralVisitor;

        impl<'de> de::Visitor<'de> for NumeralVisitor {
            type Value = Numeral;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a digit string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Numeral, E> {
                Ok(Numeral::Int(value as i128))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Numeral, E> {
                Ok(Numeral::Int(value as i128))
            }

            fn visit_i128<E: de::Error>(self, value: i128) -> Result<Numeral, E> {
                Ok(Numeral::Int(value))
            }

            fn visit_u128<E: de::Error>(self, value: u128) -> Result<Numeral, E> {
                i128::try_from(value)
                    .map(Numeral::Int)
                    .map_err(|_| E::custom("integer too large"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Numeral, E> {
                Ok(Numeral::Digits(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Numeral, E> {
                Ok(Numeral::Digits(value))
            }
        }

        deserializer.deserialize_any(NumeralVisitor)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Numeral {
            fn from(value: $t) -> Self {
                Numeral::Int(value as i128)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl From<&str> for Numeral {
    fn from(value: &str) -> Self {
        Numeral::Digits(value.to_string())
    }
}

impl From<String> for Numeral {
    fn from(value: String) -> Self {
        Numeral::Digits(value)
    }
}

impl Numeral {
    /// Validate and canonicalize into a bounded unsigned value
    pub(crate) fn normalize(&self) -> Result<u128, ValidationError> {
        match self {
            Numeral::Int(value) => normalize_int(*value),
            Numeral::Digits(digits) => normalize_digits(digits),
        }
    }
}

/// Fold one digit glyph to its value. Latin 0-9 and the Arabic-Indic
/// block U+0660-U+0669; extended (Persian) digits are another locale and
/// stay unrecognized.
fn fold_digit(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        '٠'..='٩' => Some(ch as u32 - '٠' as u32),
        _ => None,
    }
}

/// Decimal and grouping separators reserved for fractional input, which
/// gets a dedicated error instead of the generic invalid-digit one
fn is_reserved_separator(ch: char) -> bool {
    matches!(ch, '.' | ',' | '٫' | '٬')
}

fn normalize_int(value: i128) -> Result<u128, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative);
    }
    let value = value as u128;
    if value > MAX {
        return Err(ValidationError::TooLarge {
            digits: decimal_digits(value),
        });
    }
    Ok(value)
}

fn normalize_digits(input: &str) -> Result<u128, ValidationError> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if body.is_empty() {
        // A bare sign carries no number at all
        return Err(ValidationError::Empty);
    }
    if negative {
        return Err(ValidationError::Negative);
    }

    let mut significant = 0usize;
    let mut value: u128 = 0;
    for (pos, ch) in body.chars().enumerate() {
        let Some(digit) = fold_digit(ch) else {
            if is_reserved_separator(ch) {
                return Err(ValidationError::UnsupportedSeparator { ch });
            }
            return Err(ValidationError::InvalidDigit { ch, pos });
        };
        if significant == 0 && digit == 0 {
            continue; // leading zeros are insignificant
        }
        significant += 1;
        if significant <= MAX_DIGITS {
            value = value * 10 + digit as u128;
        }
    }

    if significant > MAX_DIGITS {
        return Err(ValidationError::TooLarge { digits: significant });
    }
    Ok(value)
}

fn decimal_digits(value: u128) -> usize {
    let mut rest = value;
    let mut digits = 1;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    digits
}
