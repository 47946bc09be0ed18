//! Keyword matching for non-C languages.

use crate::diff::DiffLine;
use crate::profile::LanguageProfile;
use crate::report::Finding;

/// Matches filtered lines against a profile's rules.
///
/// Each line collects every rule keyword found in it as a whole token, in
/// rule-set order. Lines without a match produce no finding. The finding
/// text is the (already trimmed) filtered line.
#[must_use]
pub fn match_lines(lines: &[DiffLine], profile: &LanguageProfile) -> Vec<Finding> {
    lines
        .iter()
        .filter_map(|line| {
            let matched_rules: Vec<String> = profile
                .rules()
                .iter()
                .filter(|rule| rule.regex.is_match(&line.text))
                .map(|rule| rule.keyword.to_string())
                .collect();

            (!matched_rules.is_empty()).then(|| Finding {
                line_number: line.number,
                line_text: line.text.clone(),
                matched_rules,
            })
        })
        .collect()
}
