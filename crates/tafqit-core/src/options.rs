//! Conversion options and the counted-subject noun forms

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The four forms of a counted subject noun.
///
/// Numeral-noun agreement picks one of them: the singular for 1 and for
/// exact multiples of one hundred and above, the dual for 2, the plural
/// for 3-10, and the tanween singular for 11-99.
///
/// ```
/// use tafqit_core::Subject;
///
/// let subject = Subject::try_from(vec![
///     "دينار".to_string(),
///     "ديناران".to_string(),
///     "دنانير".to_string(),
///     "دينارًا".to_string(),
/// ])?;
/// assert_eq!(subject.dual, "ديناران");
/// # Ok::<(), tafqit_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Singular form ("كتاب")
    pub singular: String,
    /// Dual form ("كتابان")
    pub dual: String,
    /// Plural form ("كتب")
    pub plural: String,
    /// Singular with the indefinite tanween suffix ("كتابًا")
    pub singular_tanween: String,
}

impl Subject {
    /// Build a subject from its four forms
    pub fn new(
        singular: impl Into<String>,
        dual: impl Into<String>,
        plural: impl Into<String>,
        singular_tanween: impl Into<String>,
    ) -> Self {
        Self {
            singular: singular.into(),
            dual: dual.into(),
            plural: plural.into(),
            singular_tanween: singular_tanween.into(),
        }
    }
}

impl From<[&str; 4]> for Subject {
    fn from(forms: [&str; 4]) -> Self {
        Self::new(forms[0], forms[1], forms[2], forms[3])
    }
}

impl TryFrom<&[&str]> for Subject {
    type Error = ValidationError;

    fn try_from(forms: &[&str]) -> Result<Self, Self::Error> {
        match forms {
            [singular, dual, plural, tanween] => Ok(Self::new(*singular, *dual, *plural, *tanween)),
            _ => Err(ValidationError::SubjectForms { count: forms.len() }),
        }
    }
}

impl TryFrom<Vec<String>> for Subject {
    type Error = ValidationError;

    fn try_from(forms: Vec<String>) -> Result<Self, Self::Error> {
        let count = forms.len();
        let mut forms = forms.into_iter();
        match (forms.next(), forms.next(), forms.next(), forms.next(), forms.next()) {
            (Some(singular), Some(dual), Some(plural), Some(tanween), None) => Ok(Self {
                singular,
                dual,
                plural,
                singular_tanween: tanween,
            }),
            _ => Err(ValidationError::SubjectForms { count }),
        }
    }
}

/// Conversion options: a fixed set of switches plus the optional counted
/// subject. Immutable for the duration of one call.
///
/// The default is all-off: masculine wording, nominative case, the "مائة"
/// spelling, fused hundreds, "مليار" for the 10⁹ scale, plain conjunctions,
/// cardinal output, no subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TafqitOptions {
    /// Use feminine forms for the gender-sensitive digit words
    pub feminine: bool,
    /// Spell hundred as "مئة" instead of "مائة"
    pub miah: bool,
    /// Put "،" before the conjunction joining triplet phrases
    pub comma: bool,
    /// Keep hundred multiplier and hundred word as two tokens ("ثلاث مائة")
    pub split_hundred: bool,
    /// Use the "بليون" family for the 10⁹ scale instead of "مليار"
    pub billions: bool,
    /// Inflect the final word for a phrase the caller will append
    pub text_to_follow: bool,
    /// Accusative/genitive case endings instead of the default nominative
    pub accusative: bool,
    /// Wrap the result in the legal frame "فقط ... لا غير"
    pub legal: bool,
    /// Ordinal wording for the final position; overrides `legal` and
    /// ignores `subject`
    pub ordinal: bool,
    /// Counted subject noun, appended (or substituted) by agreement
    pub subject: Option<Subject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_from_array() {
        let subject = Subject::from(["كتاب", "كتابان", "كتب", "كتابًا"]);
        assert_eq!(subject.singular, "كتاب");
        assert_eq!(subject.singular_tanween, "كتابًا");
    }

    #[test]
    fn test_subject_from_slice_wrong_length() {
        let forms: &[&str] = &["كتاب", "كتابان", "كتب"];
        assert_eq!(
            Subject::try_from(forms),
            Err(ValidationError::SubjectForms { count: 3 })
        );
    }

    #[test]
    fn test_subject_from_vec() {
        let forms = vec![
            "دينار".to_string(),
            "ديناران".to_string(),
            "دنانير".to_string(),
            "دينارًا".to_string(),
        ];
        let subject = Subject::try_from(forms).unwrap();
        assert_eq!(subject.plural, "دنانير");
    }

    #[test]
    fn test_subject_from_vec_too_long() {
        let forms = vec![String::new(); 5];
        assert_eq!(
            Subject::try_from(forms),
            Err(ValidationError::SubjectForms { count: 5 })
        );
    }

    #[test]
    fn test_default_options_all_off() {
        let options = TafqitOptions::default();
        assert!(!options.feminine);
        assert!(!options.legal);
        assert!(options.subject.is_none());
    }

    #[test]
    fn test_options_from_toml_profile() {
        let profile = r#"
            feminine = true
            miah = true

            [subject]
            singular = "تفاحة"
            dual = "تفاحتان"
            plural = "تفاحات"
            singular_tanween = "تفاحةً"
        "#;
        let options: TafqitOptions = toml::from_str(profile).unwrap();
        assert!(options.feminine);
        assert!(options.miah);
        assert!(!options.legal);
        assert_eq!(options.subject.unwrap().plural, "تفاحات");
    }

    #[test]
    fn test_options_toml_round_trip() {
        let options = TafqitOptions {
            accusative: true,
            subject: Some(Subject::from(["كتاب", "كتابان", "كتب", "كتابًا"])),
            ..TafqitOptions::default()
        };
        let encoded = toml::to_string(&options).unwrap();
        let decoded: TafqitOptions = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, options);
    }
}
