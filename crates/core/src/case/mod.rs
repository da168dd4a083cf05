pub mod convert;
pub mod error;
pub mod tokenize;
pub mod types;

pub use convert::{to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use error::{CaseError, ParseCaseError};
pub use tokenize::{is_separator, tokenize, Tokens};
pub use types::{Case, CaseInput, ValueKind};
