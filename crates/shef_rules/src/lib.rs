//! Static rule data for shefmine.
//!
//! This crate holds everything the miner matches against, as plain
//! `'static` definitions: the vulnerability categories applied to commit
//! messages, the per-language keyword rules applied to changed lines, and
//! the table of risky C/C++ library calls used by the built-in C scanner.
//! Nothing here compiles a regex; `shef_core` does that once at start-up.

mod category;
/// C/C++ file extensions and the risky-call rule table.
pub mod cfamily;
mod comment;
mod language;
/// Built-in language definitions, one module per language.
pub mod languages;
mod registry;

pub use category::{BUILTIN_CATEGORIES, CategoryDef};
pub use cfamily::{ArgCheck, CALL_RULES, C_EXTENSIONS, CallRule, is_c_extension};
pub use comment::CommentSyntax;
pub use language::{Language, RuleGroup};
pub use languages::builtin_languages;
pub use registry::LanguageRegistry;
