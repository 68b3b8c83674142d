//! Arabic grammar machinery shared by the cardinal and ordinal spellers
//!
//! Breaks down into:
//! 1. Lexicon - the fixed word tables (units, teens, tens, hundreds, scales)
//! 2. Cardinal - triplet spelling with gender and case agreement
//! 3. Agreement - counted-subject categories and form selection
//! 4. Ordinal - the ranked reading for final triplets

pub(crate) mod agreement;
pub(crate) mod cardinal;
pub(crate) mod lexicon;
pub(crate) mod ordinal;

/// Grammatical gender of the counted thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    /// The other gender, used where Arabic numerals take the reversed
    /// word shape
    pub(crate) fn opposite(self) -> Self {
        match self {
            Gender::Masculine => Gender::Feminine,
            Gender::Feminine => Gender::Masculine,
        }
    }
}

/// Grammatical case of the whole phrase. Accusative and genitive share
/// every numeral ending, so they collapse into one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Case {
    #[default]
    Nominative,
    AccusativeGenitive,
}

/// Everything a word table needs to pick one surface form
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrammaticalContext {
    /// Gender the units agree with (the counted thing for the lowest
    /// triplet, masculine for scale words)
    pub gender: Gender,
    /// Case endings for duals, tens, and the twelve head
    pub case: Case,
    /// Whether a hundred word stands in construct before a following noun
    pub hundred_construct: bool,
}

impl GrammaticalContext {
    pub(crate) fn new(gender: Gender, case: Case) -> Self {
        GrammaticalContext {
            gender,
            case,
            hundred_construct: false,
        }
    }
}
