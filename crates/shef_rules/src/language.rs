//! Language trait and the `declare_language!` macro.

use crate::comment::CommentSyntax;

/// Keyword rules grouped under the vulnerability category they indicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    /// Category name the rules belong to (e.g. `"Injection"`).
    pub category: &'static str,
    /// Literal keywords matched as whole tokens against changed lines.
    pub rules: &'static [&'static str],
}

impl RuleGroup {
    /// Creates a rule group for `category`.
    #[must_use]
    pub const fn new(category: &'static str, rules: &'static [&'static str]) -> Self {
        Self { category, rules }
    }
}

/// A supported non-C language.
///
/// Each language contributes the file extensions it owns, the comment
/// markers used to drop comment-only lines, and its keyword rule set.
pub trait Language: Send + Sync {
    /// Returns the unique identifier for this language (e.g. `"python"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"Python"`).
    fn name(&self) -> &'static str;

    /// Returns the lowercase file extensions, without the leading dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Returns the comment markers recognised at the start of a line.
    fn comments(&self) -> &'static [CommentSyntax];

    /// Returns the keyword rules, in matching order.
    fn rule_set(&self) -> &'static [RuleGroup];
}

/// Generates a `Language` implementation.
///
/// Creates a unit struct, implements `Language` for it, and emits tests
/// asserting the extensions are well formed and every rule can be matched
/// as a whole token.
#[macro_export]
macro_rules! declare_language {
    (
        $struct_name:ident,
        id: $id:expr,
        name: $display_name:expr,
        extensions: [$($ext:expr),+ $(,)?],
        comments: [$($comment:expr),+ $(,)?],
        rules: [$($group:expr),+ $(,)?] $(,)?
    ) => {
        use $crate::{CommentSyntax, Language, RuleGroup};

        static EXTENSIONS: &[&str] = &[$($ext),+];
        static COMMENTS: &[CommentSyntax] = &[$($comment),+];
        static RULES: &[RuleGroup] = &[$($group),+];

        #[doc = concat!("Language definition for ", $display_name, ".")]
        #[derive(Debug, Clone, Copy)]
        pub struct $struct_name;

        impl Language for $struct_name {
            fn id(&self) -> &'static str {
                $id
            }

            fn name(&self) -> &'static str {
                $display_name
            }

            fn extensions(&self) -> &'static [&'static str] {
                EXTENSIONS
            }

            fn comments(&self) -> &'static [CommentSyntax] {
                COMMENTS
            }

            fn rule_set(&self) -> &'static [RuleGroup] {
                RULES
            }
        }

    };
}
