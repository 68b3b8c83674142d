//! Composition pipeline from normalized value to finished phrase
//!
//! Runs in four stages:
//! 1. Decompose the value into nonzero triplet groups by scale tier
//! 2. Spell each group and attach its inflected scale word
//! 3. Join the groups and attach any counted subject
//! 4. Apply the outer frame (legal wording)

use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::grammar::agreement::CountCategory;
use crate::grammar::cardinal::spell_triplet;
use crate::grammar::{lexicon, ordinal, Case, Gender, GrammaticalContext};
use crate::numeral::Numeral;
use crate::options::TafqitOptions;

/// One nonzero three-digit group at its scale tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TripletGroup {
    value: u16,
    scale: usize,
}

/// Break a value into triplet groups, most significant first, dropping
/// all-zero triplets
fn decompose(mut value: u128) -> Vec<TripletGroup> {
    let mut groups = Vec::new();
    let mut scale = 0;
    while value > 0 {
        let triplet = (value % 1000) as u16;
        if triplet != 0 {
            groups.push(TripletGroup {
                value: triplet,
                scale,
            });
        }
        value /= 1000;
        scale += 1;
    }
    groups.reverse();
    groups
}

/// Convert a numeral into words under the given options
pub(crate) fn convert(
    numeral: &Numeral,
    options: &TafqitOptions,
) -> Result<String, ValidationError> {
    let value = numeral.normalize()?;
    trace!(value = %value, "normalized numeral");

    if value == 0 {
        return Ok(lexicon::ZERO.to_string());
    }

    let groups = decompose(value);
    trace!(groups = groups.len(), "decomposed into scale groups");

    let words = if options.ordinal {
        compose_ordinal(&groups, options)
    } else {
        compose_cardinal(value, &groups, options)
    };
    debug!(words = %words, "composed phrase");
    Ok(words)
}

fn phrase_gender(options: &TafqitOptions) -> Gender {
    if options.feminine {
        Gender::Feminine
    } else {
        Gender::Masculine
    }
}

fn phrase_case(options: &TafqitOptions) -> Case {
    if options.accusative {
        Case::AccusativeGenitive
    } else {
        Case::Nominative
    }
}

fn compose_cardinal(value: u128, groups: &[TripletGroup], options: &TafqitOptions) -> String {
    let counted = phrase_gender(options);
    let case = phrase_case(options);

    let category = CountCategory::of(value);
    let replaced_by_subject = options.subject.is_some() && category.replaces_numeral();
    // Construct state and the tanween drop require the continuing phrase
    // directly after the inflected word. A replacing subject joins with
    // waw and the legal suffix closes the phrase, so both keep the
    // standalone endings; an appended subject always follows directly.
    let continuation = !replaced_by_subject
        && (options.subject.is_some() || (options.text_to_follow && !options.legal));

    let last_index = groups.len() - 1;
    let mut parts: Vec<String> = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        let words = spell_group(
            group,
            index == last_index,
            counted,
            case,
            continuation,
            replaced_by_subject,
            options,
        );
        if !words.is_empty() {
            parts.push(words);
        }
    }

    let junction = if options.comma { "، و" } else { " و" };
    let mut words = parts.join(junction);

    if let Some(subject) = &options.subject {
        let form = category.subject_form(subject);
        words = if replaced_by_subject {
            if words.is_empty() {
                form.to_string()
            } else {
                format!("{words} و{form}")
            }
        } else {
            format!("{words} {form}")
        };
    }

    if options.legal {
        words = format!(
            "{} {words} {}",
            lexicon::LEGAL_PREFIX,
            lexicon::LEGAL_SUFFIX
        );
    }

    words
}

fn compose_ordinal(groups: &[TripletGroup], options: &TafqitOptions) -> String {
    let gender = phrase_gender(options);
    let case = phrase_case(options);

    let Some((last, leading)) = groups.split_last() else {
        return String::new();
    };

    let mut parts: Vec<String> = leading
        .iter()
        .map(|group| spell_group(group, false, gender, case, false, false, options))
        .collect();

    // Dedicated ordinal words only exist through ten and only when the
    // number stands alone; everything else takes the definite marker.
    let final_words = if last.scale == 0 && last.value <= 10 && leading.is_empty() {
        ordinal::ordinal_unit(last.value, gender).to_string()
    } else {
        ordinal::definite_phrase(&spell_group(last, true, gender, case, false, false, options))
    };
    parts.push(final_words);

    let junction = if options.comma { "، و" } else { " و" };
    parts.join(junction)
}

/// Spell one group with its scale word attached and inflected
fn spell_group(
    group: &TripletGroup,
    is_final: bool,
    counted: Gender,
    case: Case,
    continuation: bool,
    replaced_by_subject: bool,
    options: &TafqitOptions,
) -> String {
    if group.scale == 0 {
        let mut spell_value = group.value;
        if replaced_by_subject && is_final {
            // The subject noun stands in for the final one or two
            spell_value -= group.value % 100;
        }
        if spell_value == 0 {
            return String::new();
        }
        let mut ctx = GrammaticalContext::new(counted, case);
        ctx.hundred_construct = is_final && continuation && spell_value % 100 == 0;
        return spell_triplet(spell_value, ctx, options);
    }

    // Scale words are masculine nouns counted by their triplet
    let ctx = GrammaticalContext::new(Gender::Masculine, case);
    let singular = lexicon::scale_singular(group.scale, options.billions);
    let in_construct = is_final && continuation;

    match (group.value, group.value % 100) {
        (1, _) => singular.to_string(),
        (2, _) => lexicon::scale_dual(group.scale, options.billions, case, in_construct),
        (_, 0) => {
            // Whole hundreds annex the scale word directly
            let mut ctx = ctx;
            ctx.hundred_construct = true;
            format!("{} {singular}", spell_triplet(group.value, ctx, options))
        }
        (_, 3..=10) => format!(
            "{} {}",
            spell_triplet(group.value, ctx, options),
            lexicon::scale_plural(group.scale, options.billions)
        ),
        (_, 1..=2) => format!("{} {singular}", spell_triplet(group.value, ctx, options)),
        _ => {
            let count = spell_triplet(group.value, ctx, options);
            if in_construct {
                format!("{count} {singular}")
            } else {
                format!("{count} {singular}{}", lexicon::TANWEEN_SUFFIX)
            }
        }
    }
}
