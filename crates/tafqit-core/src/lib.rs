//! Arabic number-to-words (tafqit) with full grammatical agreement
//!
//! Converts non-negative integers, given as machine integers or as digit
//! strings in Latin or Arabic-Indic glyphs, into fully inflected Arabic
//! phrases:
//! 1. Gender agreement, including the reversed shapes for 3-10
//! 2. Case endings for duals, tens, and the twelve head
//! 3. Scale words thousand through sextillion with dual, plural, and
//!    tanween attachment
//! 4. Counted subjects, legal framing, and ordinal readings
//!
//! ```
//! use tafqit_core::{tafqit, TafqitOptions};
//!
//! let words = tafqit(123, &TafqitOptions::default())?;
//! assert_eq!(words, "مائة وثلاثة وعشرون");
//! # Ok::<(), tafqit_core::ValidationError>(())
//! ```

pub mod error;
pub mod numeral;
pub mod options;

mod compose;
mod grammar;

pub use error::ValidationError;
pub use numeral::{Numeral, MAX, MAX_DIGITS};
pub use options::{Subject, TafqitOptions};

/// Convert a numeral into Arabic words
///
/// Accepts anything convertible into a [`Numeral`]: integers, `&str`, or
/// `String`. Digit strings may carry Arabic-Indic glyphs and surrounding
/// whitespace.
///
/// ```
/// use tafqit_core::{tafqit, Subject, TafqitOptions};
///
/// let options = TafqitOptions {
///     subject: Some(Subject::from(["كتاب", "كتابان", "كتب", "كتابًا"])),
///     ..Default::default()
/// };
/// assert_eq!(tafqit(5, &options)?, "خمسة كتب");
/// # Ok::<(), tafqit_core::ValidationError>(())
/// ```
pub fn tafqit(
    numeral: impl Into<Numeral>,
    options: &TafqitOptions,
) -> Result<String, ValidationError> {
    compose::convert(&numeral.into(), options)
}
