//! Ordinal readings: dedicated words through ten, definite-marked
//! cardinals beyond

use super::Gender;

const ORDINALS_MASCULINE: [&str; 11] = [
    "",
    "الأول",
    "الثاني",
    "الثالث",
    "الرابع",
    "الخامس",
    "السادس",
    "السابع",
    "الثامن",
    "التاسع",
    "العاشر",
];

const ORDINALS_FEMININE: [&str; 11] = [
    "",
    "الأولى",
    "الثانية",
    "الثالثة",
    "الرابعة",
    "الخامسة",
    "السادسة",
    "السابعة",
    "الثامنة",
    "التاسعة",
    "العاشرة",
];

/// Dedicated ordinal word for 1-10, agreeing directly with the gender
pub(crate) fn ordinal_unit(digit: u16, gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => ORDINALS_MASCULINE[digit as usize],
        Gender::Feminine => ORDINALS_FEMININE[digit as usize],
    }
}

/// Turn a cardinal phrase ordinal by prefixing the definite marker
///
/// The marker lands on the leading word and on every waw-joined word;
/// compound tails like the teen ten stay bare.
pub(crate) fn definite_phrase(phrase: &str) -> String {
    phrase
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                format!("ال{word}")
            } else if let Some(rest) = word.strip_prefix('و') {
                format!("وال{rest}")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
