//! Input validation errors
//!
//! Every failure is reported before composition starts; the engine never
//! returns a partially spelled number.

use thiserror::Error;

/// Why an input could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("negative numbers cannot be spelled out")]
    Negative,

    #[error("empty input: expected an integer or a digit string")]
    Empty,

    #[error("invalid character {ch:?} at position {pos}: expected Latin or Arabic-Indic digits")]
    InvalidDigit { ch: char, pos: usize },

    #[error("separator {ch:?} is not supported: only whole numbers can be spelled out")]
    UnsupportedSeparator { ch: char },

    #[error("number has {digits} significant digits, above the supported maximum of {max}", max = crate::numeral::MAX_DIGITS)]
    TooLarge { digits: usize },

    #[error("a counted subject needs exactly four forms (singular, dual, plural, tanween singular), got {count}")]
    SubjectForms { count: usize },
}
