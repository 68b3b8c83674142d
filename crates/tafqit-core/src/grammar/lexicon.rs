//! Fixed Arabic word tables and the lookups that inflect them
//!
//! Tables are named by word shape. Reversed agreement means the shape and
//! the counted gender only coincide for 1 and 2; for 3-10 the bare shape
//! counts feminine nouns and the taa-marbuta shape counts masculine ones.

use super::{Case, Gender};

//==============================================================================
// Word Tables
//==============================================================================

/// The zero word, outside every table because it never composes
pub(crate) const ZERO: &str = "صفر";

/// Units 1-10 in the bare masculine shape
const UNITS_MASCULINE: [&str; 11] = [
    "",
    "واحد",
    "اثنان",
    "ثلاث",
    "أربع",
    "خمس",
    "ست",
    "سبع",
    "ثمان",
    "تسع",
    "عشر",
];

/// Units 1-10 in the taa-marbuta feminine shape
const UNITS_FEMININE: [&str; 11] = [
    "",
    "واحدة",
    "اثنتان",
    "ثلاثة",
    "أربعة",
    "خمسة",
    "ستة",
    "سبعة",
    "ثمانية",
    "تسعة",
    "عشرة",
];

/// Stems for 20-90; the sound-plural ending ون/ين carries the case
const TENS_STEMS: [&str; 10] = [
    "", "", "عشر", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع",
];

/// Scale words per triplet tier, singular
const SCALES: [&str; 8] = [
    "",
    "ألف",
    "مليون",
    "مليار",
    "ترليون",
    "كوادرليون",
    "كوينتليون",
    "سكستليون",
];

/// Broken plurals for the lower tiers; higher tiers take the sound ات
const SCALE_PLURALS: [&str; 4] = ["", "آلاف", "ملايين", "مليارات"];

const BILLION_SINGULAR: &str = "بليون";
const BILLION_PLURAL: &str = "بلايين";

/// Tanween ending appended to a singular scale word after 11-99
pub(crate) const TANWEEN_SUFFIX: &str = "ًا";

pub(crate) const LEGAL_PREFIX: &str = "فقط";
pub(crate) const LEGAL_SUFFIX: &str = "لا غير";

//==============================================================================
// Units and Teens
//==============================================================================

/// Word for a unit 1-10 agreeing with the counted gender
///
/// 1 and 2 agree directly; 3-10 take the opposite shape. Only 2 has a
/// written case ending.
pub(crate) fn unit(digit: u16, counted: Gender, case: Case) -> &'static str {
    let shape = if digit <= 2 { counted } else { counted.opposite() };
    if digit == 2 && case == Case::AccusativeGenitive {
        return match shape {
            Gender::Masculine => "اثنين",
            Gender::Feminine => "اثنتين",
        };
    }
    match shape {
        Gender::Masculine => UNITS_MASCULINE[digit as usize],
        Gender::Feminine => UNITS_FEMININE[digit as usize],
    }
}

/// Compound word for 11-19
///
/// The ten tail agrees directly with the counted gender while the unit
/// head keeps its reversed shape. Only the twelve head declines.
pub(crate) fn teen(value: u16, counted: Gender, case: Case) -> String {
    let head = match value {
        11 => match counted {
            Gender::Masculine => "أحد",
            Gender::Feminine => "إحدى",
        },
        12 => match (counted, case) {
            (Gender::Masculine, Case::Nominative) => "اثنا",
            (Gender::Masculine, Case::AccusativeGenitive) => "اثني",
            (Gender::Feminine, Case::Nominative) => "اثنتا",
            (Gender::Feminine, Case::AccusativeGenitive) => "اثنتي",
        },
        _ => unit(value - 10, counted, case),
    };
    let tail = match counted {
        Gender::Masculine => "عشر",
        Gender::Feminine => "عشرة",
    };
    format!("{head} {tail}")
}

/// Word for a whole ten 20-90, gender-invariant, declining like a sound
/// masculine plural
pub(crate) fn ten(tens_digit: u16, case: Case) -> String {
    let ending = match case {
        Case::Nominative => "ون",
        Case::AccusativeGenitive => "ين",
    };
    format!("{}{}", TENS_STEMS[tens_digit as usize], ending)
}

//==============================================================================
// Hundreds
//==============================================================================

/// The hundred word in its conventional or Mi'ah spelling
pub(crate) fn hundred(miah: bool) -> &'static str {
    if miah {
        "مئة"
    } else {
        "مائة"
    }
}

/// Dual of the hundred word: the taa marbuta opens to ت before the dual
/// suffix
pub(crate) fn hundred_dual(miah: bool, case: Case, construct: bool) -> String {
    let stem = hundred(miah);
    let stem = stem.strip_suffix('ة').unwrap_or(stem);
    format!("{stem}ت{}", dual_suffix(case, construct))
}

/// Dual noun ending for the given case, with the nun dropped in construct
pub(crate) fn dual_suffix(case: Case, construct: bool) -> &'static str {
    match (case, construct) {
        (Case::Nominative, false) => "ان",
        (Case::Nominative, true) => "ا",
        (Case::AccusativeGenitive, false) => "ين",
        (Case::AccusativeGenitive, true) => "ي",
    }
}

//==============================================================================
// Scale Words
//==============================================================================

/// Singular scale word for a tier, 1 being thousand
pub(crate) fn scale_singular(scale: usize, billions: bool) -> &'static str {
    if billions && scale == 3 {
        return BILLION_SINGULAR;
    }
    SCALES[scale]
}

/// Plural scale word for a tier, used after 3-10
pub(crate) fn scale_plural(scale: usize, billions: bool) -> String {
    if billions && scale == 3 {
        return BILLION_PLURAL.to_string();
    }
    match SCALE_PLURALS.get(scale) {
        Some(word) => word.to_string(),
        None => format!("{}ات", SCALES[scale]),
    }
}

/// Dual scale word for a tier
pub(crate) fn scale_dual(scale: usize, billions: bool, case: Case, construct: bool) -> String {
    format!(
        "{}{}",
        scale_singular(scale, billions),
        dual_suffix(case, construct)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Units ---

    #[test]
    fn test_unit_reversed_agreement() {
        // Counting masculine nouns takes the taa-marbuta shape for 3-10
        assert_eq!(unit(3, Gender::Masculine, Case::Nominative), "ثلاثة");
        assert_eq!(unit(10, Gender::Masculine, Case::Nominative), "عشرة");
        // Counting feminine nouns takes the bare shape
        assert_eq!(unit(3, Gender::Feminine, Case::Nominative), "ثلاث");
        assert_eq!(unit(8, Gender::Feminine, Case::Nominative), "ثمان");
    }

    #[test]
    fn test_unit_direct_agreement_below_three() {
        assert_eq!(unit(1, Gender::Masculine, Case::Nominative), "واحد");
        assert_eq!(unit(1, Gender::Feminine, Case::Nominative), "واحدة");
        assert_eq!(unit(2, Gender::Masculine, Case::Nominative), "اثنان");
        assert_eq!(unit(2, Gender::Feminine, Case::Nominative), "اثنتان");
    }

    #[test]
    fn test_unit_two_declines() {
        assert_eq!(unit(2, Gender::Masculine, Case::AccusativeGenitive), "اثنين");
        assert_eq!(unit(2, Gender::Feminine, Case::AccusativeGenitive), "اثنتين");
        // Other units keep one written form across cases
        assert_eq!(unit(5, Gender::Masculine, Case::AccusativeGenitive), "خمسة");
    }

    // --- Teens ---

    #[test]
    fn test_teen_heads() {
        assert_eq!(teen(11, Gender::Masculine, Case::Nominative), "أحد عشر");
        assert_eq!(teen(11, Gender::Feminine, Case::Nominative), "إحدى عشرة");
        assert_eq!(teen(13, Gender::Masculine, Case::Nominative), "ثلاثة عشر");
        assert_eq!(teen(13, Gender::Feminine, Case::Nominative), "ثلاث عشرة");
    }

    #[test]
    fn test_teen_twelve_declines() {
        assert_eq!(teen(12, Gender::Masculine, Case::Nominative), "اثنا عشر");
        assert_eq!(teen(12, Gender::Masculine, Case::AccusativeGenitive), "اثني عشر");
        assert_eq!(teen(12, Gender::Feminine, Case::Nominative), "اثنتا عشرة");
        assert_eq!(teen(12, Gender::Feminine, Case::AccusativeGenitive), "اثنتي عشرة");
    }

    // --- Tens ---

    #[test]
    fn test_tens_decline_as_sound_plural() {
        assert_eq!(ten(2, Case::Nominative), "عشرون");
        assert_eq!(ten(2, Case::AccusativeGenitive), "عشرين");
        assert_eq!(ten(9, Case::Nominative), "تسعون");
        assert_eq!(ten(8, Case::AccusativeGenitive), "ثمانين");
    }

    // --- Hundreds ---

    #[test]
    fn test_hundred_spellings() {
        assert_eq!(hundred(false), "مائة");
        assert_eq!(hundred(true), "مئة");
    }

    #[test]
    fn test_hundred_dual_forms() {
        assert_eq!(hundred_dual(false, Case::Nominative, false), "مائتان");
        assert_eq!(hundred_dual(false, Case::Nominative, true), "مائتا");
        assert_eq!(hundred_dual(false, Case::AccusativeGenitive, false), "مائتين");
        assert_eq!(hundred_dual(true, Case::Nominative, false), "مئتان");
    }

    // --- Scales ---

    #[test]
    fn test_scale_words_cover_every_tier() {
        // Eight tiers of three digits each span the supported range
        assert_eq!(SCALES.len() * 3, crate::numeral::MAX_DIGITS);
        assert_eq!(scale_singular(1, false), "ألف");
        assert_eq!(scale_singular(7, false), "سكستليون");
    }

    #[test]
    fn test_scale_plurals() {
        assert_eq!(scale_plural(1, false), "آلاف");
        assert_eq!(scale_plural(2, false), "ملايين");
        assert_eq!(scale_plural(3, false), "مليارات");
        assert_eq!(scale_plural(4, false), "ترليونات");
        assert_eq!(scale_plural(7, false), "سكستليونات");
    }

    #[test]
    fn test_billions_swap() {
        assert_eq!(scale_singular(3, true), "بليون");
        assert_eq!(scale_plural(3, true), "بلايين");
        // Other tiers are untouched by the option
        assert_eq!(scale_singular(2, true), "مليون");
    }

    #[test]
    fn test_scale_duals() {
        assert_eq!(scale_dual(1, false, Case::Nominative, false), "ألفان");
        assert_eq!(scale_dual(1, false, Case::Nominative, true), "ألفا");
        assert_eq!(scale_dual(1, false, Case::AccusativeGenitive, false), "ألفين");
        assert_eq!(scale_dual(2, false, Case::Nominative, false), "مليونان");
    }
}
