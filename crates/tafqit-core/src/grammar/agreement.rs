//! Counted-subject agreement
//!
//! Arabic picks the form of a counted noun from the last two digits of
//! the number, and for one and two the noun replaces the numeral
//! entirely.

use crate::options::Subject;

/// Agreement bucket a number falls into for its counted noun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountCategory {
    /// Ends in 1: the singular noun stands alone
    One,
    /// Ends in 2: the dual noun stands alone
    Two,
    /// Ends in 3-10: plural noun follows
    Few,
    /// Ends in 11-99: tanween singular follows
    Many,
    /// Ends in 00: singular noun follows in construct
    Whole,
}

impl CountCategory {
    pub(crate) fn of(value: u128) -> Self {
        match value % 100 {
            1 => CountCategory::One,
            2 => CountCategory::Two,
            3..=10 => CountCategory::Few,
            0 => CountCategory::Whole,
            _ => CountCategory::Many,
        }
    }

    /// Whether the subject noun replaces the final numeral word instead
    /// of following the phrase
    pub(crate) fn replaces_numeral(self) -> bool {
        matches!(self, CountCategory::One | CountCategory::Two)
    }

    /// The subject form this bucket selects
    pub(crate) fn subject_form(self, subject: &Subject) -> &str {
        match self {
            CountCategory::One => &subject.singular,
            CountCategory::Two => &subject.dual,
            CountCategory::Few => &subject.plural,
            CountCategory::Many => &subject.singular_tanween,
            CountCategory::Whole => &subject.singular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_buckets() {
        assert_eq!(CountCategory::of(1), CountCategory::One);
        assert_eq!(CountCategory::of(2), CountCategory::Two);
        assert_eq!(CountCategory::of(3), CountCategory::Few);
        assert_eq!(CountCategory::of(10), CountCategory::Few);
        assert_eq!(CountCategory::of(11), CountCategory::Many);
        assert_eq!(CountCategory::of(99), CountCategory::Many);
        assert_eq!(CountCategory::of(100), CountCategory::Whole);
    }

    #[test]
    fn test_category_follows_last_two_digits() {
        assert_eq!(CountCategory::of(101), CountCategory::One);
        assert_eq!(CountCategory::of(1002), CountCategory::Two);
        assert_eq!(CountCategory::of(205), CountCategory::Few);
        assert_eq!(CountCategory::of(123), CountCategory::Many);
        assert_eq!(CountCategory::of(3_000), CountCategory::Whole);
    }

    #[test]
    fn test_form_selection() {
        let subject = Subject::from(["كتاب", "كتابان", "كتب", "كتابًا"]);
        assert_eq!(CountCategory::One.subject_form(&subject), "كتاب");
        assert_eq!(CountCategory::Two.subject_form(&subject), "كتابان");
        assert_eq!(CountCategory::Few.subject_form(&subject), "كتب");
        assert_eq!(CountCategory::Many.subject_form(&subject), "كتابًا");
        assert_eq!(CountCategory::Whole.subject_form(&subject), "كتاب");
    }

    #[test]
    fn test_replacement_buckets() {
        assert!(CountCategory::One.replaces_numeral());
        assert!(CountCategory::Two.replaces_numeral());
        assert!(!CountCategory::Few.replaces_numeral());
        assert!(!CountCategory::Many.replaces_numeral());
        assert!(!CountCategory::Whole.replaces_numeral());
    }
}
