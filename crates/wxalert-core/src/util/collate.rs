//! Locale-aware string ordering.
//!
//! Comparison uses the CLDR root collation (the Unicode Collation
//! Algorithm with CLDR's root tailoring) at tertiary strength, which is
//! what an English-locale `localeCompare` produces: base letters first,
//! then accents, then case with lowercase first. `Æ` sorts as `ae` and
//! `ß` as `ss`; punctuation and symbols sort before digits and letters.
//!
//! Strings the collator considers equal fall back to code-point order,
//! so only identical strings compare equal and a stable sort keeps equal
//! field values in their input order.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

thread_local! {
    static ROOT: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(%err, "root collation unavailable; using code-point order");
                None
            }
        };
}

/// Compare two strings with locale-aware ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    let collated = ROOT.with(|root| match root {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    });
    collated.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_by(|a, b| compare(a, b));
        words
    }

    #[test]
    fn orders_plain_words_alphabetically() {
        assert_eq!(
            sorted(vec!["Severe", "Extreme", "Minor"]),
            vec!["Extreme", "Minor", "Severe"]
        );
    }

    #[test]
    fn case_does_not_dominate_alphabet() {
        // Byte order would put every uppercase letter first.
        assert_eq!(
            sorted(vec!["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
        assert_eq!(compare("wind", "Winter"), Ordering::Less);
    }

    #[test]
    fn lowercase_precedes_uppercase_on_tie() {
        assert_eq!(compare("flood", "Flood"), Ordering::Less);
        assert_eq!(compare("Flood", "flood"), Ordering::Greater);
    }

    #[test]
    fn accents_are_secondary_to_base_letters() {
        // Byte order would put "É" after "Z".
        assert_eq!(
            sorted(vec!["Zuni", "Élan", "Eagle", "Elk"]),
            vec!["Eagle", "Élan", "Elk", "Zuni"]
        );
    }

    #[test]
    fn unaccented_precedes_accented_on_tie() {
        assert_eq!(compare("resume", "résumé"), Ordering::Less);
        assert_eq!(compare("Pena", "Peña"), Ordering::Less);
    }

    #[test]
    fn ligatures_and_sharp_s_sort_as_expansions() {
        // Orders as produced by `localeCompare` in an en-US locale.
        assert_eq!(
            sorted(vec!["Zurigo", "Æther", "Aether", "Afton"]),
            vec!["Aether", "Æther", "Afton", "Zurigo"]
        );
        assert_eq!(
            sorted(vec!["Strasze", "Straße", "Strasse"]),
            vec!["Strasse", "Straße", "Strasze"]
        );
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        assert_eq!(
            sorted(vec!["ab", "A1", "a~b", "a{b", "a-b", "a_b"]),
            vec!["a_b", "a-b", "a{b", "a~b", "A1", "ab"]
        );
    }

    #[test]
    fn canonically_equivalent_forms_stay_distinct_but_adjacent() {
        let precomposed = "Caf\u{e9}";
        let decomposed = "Cafe\u{301}";

        assert_ne!(compare(precomposed, decomposed), Ordering::Equal);
        assert_eq!(compare(precomposed, "Cafes"), Ordering::Less);
        assert_eq!(compare(decomposed, "Cafes"), Ordering::Less);
        assert_eq!(compare("Cafe", decomposed), Ordering::Less);
    }

    #[test]
    fn only_identical_strings_compare_equal() {
        assert_eq!(compare("Los Angeles", "Los Angeles"), Ordering::Equal);
        assert_ne!(compare("Los Angeles", "los angeles"), Ordering::Equal);
    }

    #[test]
    fn empty_string_sorts_first() {
        assert_eq!(
            sorted(vec!["Minor", "", "Extreme"]),
            vec!["", "Extreme", "Minor"]
        );
    }

    #[test]
    fn prefix_sorts_before_extension() {
        assert_eq!(compare("Flood", "Flood Warning"), Ordering::Less);
    }
}
