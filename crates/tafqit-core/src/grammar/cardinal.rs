//! Cardinal spelling of a single triplet 1-999

use crate::options::TafqitOptions;

use super::{lexicon, Gender, GrammaticalContext};

/// Spell one three-digit group with full agreement
///
/// The hundreds digit always counts the feminine hundred word; the rest
/// agrees with the gender in the context. Component words join with a
/// prefixed waw.
pub(crate) fn spell_triplet(
    value: u16,
    ctx: GrammaticalContext,
    options: &TafqitOptions,
) -> String {
    let hundreds = value / 100;
    let rest = value % 100;

    let hundreds_word = match hundreds {
        0 => None,
        1 => Some(lexicon::hundred(options.miah).to_string()),
        2 => Some(lexicon::hundred_dual(
            options.miah,
            ctx.case,
            ctx.hundred_construct,
        )),
        _ => {
            let count = lexicon::unit(hundreds, Gender::Feminine, ctx.case);
            let hundred = lexicon::hundred(options.miah);
            Some(if options.split_hundred {
                format!("{count} {hundred}")
            } else {
                format!("{count}{hundred}")
            })
        }
    };

    let rest_word = match rest {
        0 => None,
        1..=10 => Some(lexicon::unit(rest, ctx.gender, ctx.case).to_string()),
        11..=19 => Some(lexicon::teen(rest, ctx.gender, ctx.case)),
        _ => {
            let tens = lexicon::ten(rest / 10, ctx.case);
            Some(match rest % 10 {
                0 => tens,
                unit_digit => format!(
                    "{} و{}",
                    lexicon::unit(unit_digit, ctx.gender, ctx.case),
                    tens
                ),
            })
        }
    };

    match (hundreds_word, rest_word) {
        (Some(hundreds), Some(rest)) => format!("{hundreds} و{rest}"),
        (Some(hundreds), None) => hundreds,
        (None, Some(rest)) => rest,
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::Case;
    use super::*;

    fn spell(value: u16, options: &TafqitOptions) -> String {
        let gender = if options.feminine {
            Gender::Feminine
        } else {
            Gender::Masculine
        };
        let case = if options.accusative {
            Case::AccusativeGenitive
        } else {
            Case::Nominative
        };
        spell_triplet(value, GrammaticalContext::new(gender, case), options)
    }

    #[test]
    fn test_plain_triplets() {
        let options = TafqitOptions::default();
        assert_eq!(spell(5, &options), "خمسة");
        assert_eq!(spell(40, &options), "أربعون");
        assert_eq!(spell(123, &options), "مائة وثلاثة وعشرون");
        assert_eq!(spell(999, &options), "تسعمائة وتسعة وتسعون");
    }

    #[test]
    fn test_feminine_triplets() {
        let options = TafqitOptions {
            feminine: true,
            ..Default::default()
        };
        assert_eq!(spell(15, &options), "خمس عشرة");
        assert_eq!(spell(345, &options), "ثلاثمائة وخمس وأربعون");
    }

    #[test]
    fn test_accusative_endings() {
        let options = TafqitOptions {
            accusative: true,
            ..Default::default()
        };
        assert_eq!(spell(22, &options), "اثنين وعشرين");
        assert_eq!(spell(200, &options), "مائتين");
    }

    #[test]
    fn test_hundred_spelling_options() {
        let miah = TafqitOptions {
            miah: true,
            ..Default::default()
        };
        assert_eq!(spell(300, &miah), "ثلاثمئة");

        let split = TafqitOptions {
            split_hundred: true,
            ..Default::default()
        };
        assert_eq!(spell(300, &split), "ثلاث مائة");
        assert_eq!(spell(305, &split), "ثلاث مائة وخمسة");
    }

    #[test]
    fn test_hundred_construct_dual() {
        let options = TafqitOptions::default();
        let mut ctx = GrammaticalContext::new(Gender::Masculine, Case::Nominative);
        ctx.hundred_construct = true;
        assert_eq!(spell_triplet(200, ctx, &options), "مائتا");
        // The flag only bears on the dual hundred
        assert_eq!(spell_triplet(100, ctx, &options), "مائة");
    }
}
