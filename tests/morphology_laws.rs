//! Property-based law tests for roots, patterns and the engine.
//!
//! Roots are arbitrary three-letter combinations from the Arabic letter
//! range; patterns are arbitrary mixes of placeholders and literals. The
//! laws pin down parsing, 1:1 substitution, and the generate-then-validate
//! round trip.

use proptest::prelude::*;

use sarf::engine::{is_valid_root_format, Analyzer, Generator};
use sarf::lexicon::{PatternStore, RootStore};
use sarf::morphology::{Pattern, Root};

// ============================================================================
// Strategies
// ============================================================================

/// A letter from ء (U+0621) through ي (U+064A), all inside the Arabic block.
fn arbitrary_radical() -> impl Strategy<Value = char> {
    proptest::char::range('\u{0621}', '\u{064A}')
}

fn arbitrary_root_letters() -> impl Strategy<Value = String> {
    proptest::collection::vec(arbitrary_radical(), 3)
        .prop_map(|radicals| radicals.into_iter().collect())
}

/// Structure text mixing the three placeholders with common literals.
fn arbitrary_structure() -> impl Strategy<Value = String> {
    let character = prop_oneof![
        Just('ف'),
        Just('ع'),
        Just('ل'),
        Just('ا'),
        Just('م'),
        Just('ت'),
        Just('س'),
        Just('و'),
        Just('ي'),
    ];
    proptest::collection::vec(character, 1..10)
        .prop_map(|characters| characters.into_iter().collect())
}

// ============================================================================
// Root Parsing Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_any_three_arabic_letters_parse(letters in arbitrary_root_letters()) {
        let root = Root::new(&letters).unwrap();

        prop_assert_eq!(root.letters(), letters.as_str());
        let radicals: Vec<char> = letters.chars().collect();
        prop_assert_eq!(root.first(), radicals[0]);
        prop_assert_eq!(root.second(), radicals[1]);
        prop_assert_eq!(root.third(), radicals[2]);
    }

    #[test]
    fn prop_parsing_ignores_surrounding_whitespace(letters in arbitrary_root_letters()) {
        let padded = format!("  {letters}\t");
        let root = Root::new(&padded).unwrap();
        prop_assert_eq!(root.letters(), letters.as_str());
    }

    #[test]
    fn prop_wrong_lengths_never_parse(
        radicals in proptest::collection::vec(arbitrary_radical(), 0..8),
    ) {
        prop_assume!(radicals.len() != 3);
        let letters: String = radicals.into_iter().collect();

        prop_assert!(Root::new(&letters).is_err());
        prop_assert!(!is_valid_root_format(&letters));
    }

    #[test]
    fn prop_an_ascii_intruder_never_parses(
        letters in arbitrary_root_letters(),
        intruder in proptest::char::range('a', 'z'),
        position in 0usize..3,
    ) {
        let mut radicals: Vec<char> = letters.chars().collect();
        radicals[position] = intruder;
        let tainted: String = radicals.into_iter().collect();

        prop_assert!(Root::new(&tainted).is_err());
        prop_assert!(!is_valid_root_format(&tainted));
    }

    #[test]
    fn prop_format_check_mirrors_parsing(letters in "\\PC{0,6}") {
        prop_assert_eq!(is_valid_root_format(&letters), Root::new(&letters).is_ok());
    }
}

// ============================================================================
// Pattern Application Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_application_preserves_character_count(
        letters in arbitrary_root_letters(),
        structure in arbitrary_structure(),
    ) {
        let root = Root::new(&letters).unwrap();
        let pattern = Pattern::new("قيد الفحص", structure.clone());

        let word = pattern.apply_to_root(&root);
        prop_assert_eq!(word.chars().count(), structure.chars().count());
    }

    #[test]
    fn prop_placeholders_substitute_and_literals_survive(
        letters in arbitrary_root_letters(),
        structure in arbitrary_structure(),
    ) {
        let root = Root::new(&letters).unwrap();
        let pattern = Pattern::new("قيد الفحص", structure.clone());

        let expected: String = structure
            .chars()
            .map(|character| match character {
                'ف' => root.first(),
                'ع' => root.second(),
                'ل' => root.third(),
                other => other,
            })
            .collect();
        prop_assert_eq!(pattern.apply_to_root(&root), expected);
    }

    #[test]
    fn prop_application_is_deterministic(
        letters in arbitrary_root_letters(),
        structure in arbitrary_structure(),
    ) {
        let root = Root::new(&letters).unwrap();
        let pattern = Pattern::new("قيد الفحص", structure);
        prop_assert_eq!(pattern.apply_to_root(&root), pattern.apply_to_root(&root));
    }
}

// ============================================================================
// Generate-then-Validate Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_generated_words_validate_against_their_root(letters in arbitrary_root_letters()) {
        let mut roots = RootStore::new();
        roots.insert(Root::new(&letters).unwrap());
        let mut patterns = PatternStore::new();
        patterns.seed_defaults();

        let mut generator = Generator::new();
        let root = roots.find(&letters).unwrap();
        let all = patterns.all();
        let words = generator.generate_all(root, &all);
        prop_assert_eq!(words.len(), 8);

        let analyzer = Analyzer::new(&roots, &patterns);
        for word in &words {
            let result = analyzer.validate_word(word.word(), &letters);
            prop_assert!(result.is_valid(), "generated word {} failed validation", word.word());
        }
    }

    #[test]
    fn prop_generated_words_are_identifiable(letters in arbitrary_root_letters()) {
        let mut roots = RootStore::new();
        roots.insert(Root::new(&letters).unwrap());
        let mut patterns = PatternStore::new();
        patterns.seed_defaults();

        let mut generator = Generator::new();
        let root = roots.find(&letters).unwrap();
        let pattern = patterns.find("فاعل").unwrap();
        let word = generator.generate(root, pattern);

        let analyzer = Analyzer::new(&roots, &patterns);
        let identified = analyzer.identify_word(word.word());
        prop_assert!(identified.is_valid());
        prop_assert_eq!(identified.root_letters(), Some(letters.as_str()));
    }

    #[test]
    fn prop_regeneration_counts_frequency_not_entries(
        letters in arbitrary_root_letters(),
        repeats in 1usize..6,
    ) {
        let root = Root::new(&letters).unwrap();
        let pattern = Pattern::new("مفعول", "مفعول");

        let mut generator = Generator::new();
        let mut last_frequency = 0;
        for _ in 0..repeats {
            last_frequency = generator.generate(&root, &pattern).frequency();
        }

        prop_assert_eq!(last_frequency as usize, repeats - 1);
        prop_assert_eq!(generator.derivations(&letters).len(), 1);
        prop_assert_eq!(generator.total_generated(), 1);
    }
}
