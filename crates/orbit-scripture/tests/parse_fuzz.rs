use orbit_scripture::{book_display_name, validate, ScriptureRef};
use proptest::prelude::*;

/// Aliases spanning single-word, numbered, and multi-word book names.
const ALIASES: &[(&str, &str)] = &[
    ("genesis", "GEN"),
    ("ps", "PSA"),
    ("song of solomon", "SNG"),
    ("matthew", "MAT"),
    ("mt", "MAT"),
    ("john", "JHN"),
    ("1 corinthians", "1CO"),
    ("2 tim", "2TI"),
    ("3 john", "3JN"),
    ("revelation", "REV"),
];

fn alias_and_code() -> impl Strategy<Value = (&'static str, &'static str)> {
    (0..ALIASES.len()).prop_map(|i| ALIASES[i])
}

proptest! {
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = ScriptureRef::parse(&input);
        let _ = validate(&input);
    }

    #[test]
    fn chapter_references_round_trip(
        (alias, code) in alias_and_code(),
        chapter in 1u32..=150,
        uppercase in any::<bool>(),
    ) {
        let input = if uppercase {
            format!("{} {chapter}", alias.to_uppercase())
        } else {
            format!("{alias} {chapter}")
        };
        let parsed = ScriptureRef::parse(&input).expect("valid chapter reference");
        prop_assert_eq!(parsed.book, code);
        prop_assert_eq!(parsed.chapter, chapter);
        prop_assert_eq!(parsed.verse, None);
        prop_assert_eq!(parsed.end_verse, None);
        prop_assert_eq!(parsed.formatted(), format!("{code}.{chapter}"));
        let name = book_display_name(code).expect("display name");
        prop_assert_eq!(parsed.display(), format!("{name} {chapter}"));
    }

    #[test]
    fn verse_and_range_references_round_trip(
        (alias, code) in alias_and_code(),
        chapter in 1u32..=150,
        verse in 1u32..=176,
        end_verse in proptest::option::of(1u32..=176),
    ) {
        let input = match end_verse {
            Some(end) => format!("{alias} {chapter}:{verse}-{end}"),
            None => format!("{alias} {chapter}:{verse}"),
        };
        let parsed = ScriptureRef::parse(&input).expect("valid verse reference");
        prop_assert_eq!(parsed.book, code);
        prop_assert_eq!(parsed.chapter, chapter);
        prop_assert_eq!(parsed.verse, Some(verse));
        prop_assert_eq!(parsed.end_verse, end_verse);
        match end_verse {
            Some(end) => prop_assert_eq!(
                parsed.formatted(),
                format!("{code}.{chapter}.{verse}-{code}.{chapter}.{end}")
            ),
            None => prop_assert_eq!(parsed.formatted(), format!("{code}.{chapter}.{verse}")),
        }
    }

    #[test]
    fn random_words_with_chapters_do_not_parse_to_the_wrong_book(
        word in "[a-z]{1,12}",
        chapter in 1u32..=150,
    ) {
        // Either the word is a real alias or parsing fails; a successful
        // parse always reports a book with a display name.
        if let Some(parsed) = ScriptureRef::parse(&format!("{word} {chapter}")) {
            prop_assert!(book_display_name(parsed.book).is_some());
            prop_assert_eq!(parsed.chapter, chapter);
        }
    }
}
