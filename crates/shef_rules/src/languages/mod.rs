//! Built-in language definitions.

mod csharp;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;

pub use csharp::CSharp;
pub use go::Go;
pub use java::Java;
pub use javascript::JavaScript;
pub use php::Php;
pub use python::Python;
pub use ruby::Ruby;

use crate::language::Language;

/// Returns all built-in languages, in dispatch order.
#[must_use]
pub fn builtin_languages() -> Vec<&'static dyn Language> {
    vec![&Python, &Java, &JavaScript, &Php, &Ruby, &Go, &CSharp]
}
