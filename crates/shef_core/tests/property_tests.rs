//! Property-based tests for `shef_core`.
//!
//! These tests verify invariants that should hold for all inputs,
//! catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use shef_core::comment_syntax::CFamily;
use shef_core::prelude::*;

fn diff_side() -> impl Strategy<Value = Vec<DiffLine>> {
    prop::collection::vec(("\\PC{0,40}", 1usize..5), 0..30).prop_map(|entries| {
        let mut number = 0;
        entries
            .into_iter()
            .map(|(text, gap)| {
                number += gap;
                DiffLine::new(number, text)
            })
            .collect()
    })
}

proptest! {
    /// Filtering keeps a subsequence: numbers stay strictly increasing and
    /// each survivor exists in the input with the same number.
    #[test]
    fn filter_preserves_numbers_and_order(side in diff_side()) {
        let filtered = filter_lines(&side, None);

        prop_assert!(filtered.windows(2).all(|pair| pair[0].number < pair[1].number));
        for line in &filtered {
            let original = side.iter().find(|raw| raw.number == line.number);
            prop_assert!(original.is_some());
            prop_assert_eq!(original.map(|raw| raw.text.trim()), Some(line.text.as_str()));
        }
    }

    /// C/C++ filtering never invents lines and never keeps blank ones.
    #[test]
    fn c_filter_output_is_non_blank_subsequence(side in diff_side()) {
        let filtered = filter_lines(&side, Some(&CFamily));

        prop_assert!(filtered.len() <= side.len());
        prop_assert!(filtered.windows(2).all(|pair| pair[0].number < pair[1].number));
        prop_assert!(filtered.iter().all(|line| !line.text.trim().is_empty()));
    }

    /// Normalising twice gives the same result as normalising once.
    #[test]
    fn normalize_is_idempotent(message in "\\PC{0,200}") {
        let once = normalize(&message);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Trailers never survive normalisation.
    #[test]
    fn signed_off_trailer_is_removed(subject in "[a-z ]{1,40}", name in "[A-Za-z]{1,12}") {
        let message = format!("{subject}\n\nSigned-off-by: {name} <{name}@example.com>");
        prop_assert!(!normalize(&message).to_lowercase().contains("signed-off-by"));
    }

    /// Classification never panics and only reports categories that exist.
    #[test]
    fn classify_never_panics(message in "\\PC*") {
        let catalog = Catalog::builtin().map_err(|err| TestCaseError::fail(err.to_string()))?;
        for found in catalog.classify(&message) {
            prop_assert!(catalog.categories().iter().any(|c| *c.name == *found.name));
        }
    }
}
