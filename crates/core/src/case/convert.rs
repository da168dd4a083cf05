use super::error::CaseError;
use super::tokenize::{tokenize, Tokens};
use super::types::{Case, CaseInput};

impl Case {
    /// Convert `text` to this style.
    ///
    /// Tokenization is the same for every style, only the per-token transform
    /// and the join differ.
    pub fn apply(self, text: &str) -> String {
        let tokens = tokenize(text);

        match self {
            Case::Camel => tokens
                .enumerate()
                .map(|(index, token)| {
                    if index == 0 {
                        token.to_lowercase()
                    } else {
                        capitalize(&token)
                    }
                })
                .collect(),
            Case::Pascal => tokens.map(|token| capitalize(&token)).collect(),
            Case::Dot => join_lowercase(tokens, "."),
            Case::Kebab => join_lowercase(tokens, "-"),
            Case::Snake => join_lowercase(tokens, "_"),
        }
    }

    /// Validate a dynamic input and convert it to this style.
    ///
    /// Absent values and empty strings convert to `""`. Any other non-string
    /// value fails with [`CaseError::TypeKind`].
    pub fn convert<'a>(self, input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
        match input.into() {
            CaseInput::Missing => Ok(String::new()),
            CaseInput::Text(text) => Ok(self.apply(text)),
            CaseInput::Invalid(found) => Err(CaseError::TypeKind {
                function: self.function_name(),
                found,
            }),
        }
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

fn join_lowercase(tokens: Tokens<'_>, separator: &str) -> String {
    tokens
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Convert to camelCase: `"hello world"` becomes `"helloWorld"`.
pub fn to_camel_case<'a>(input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
    Case::Camel.convert(input)
}

/// Convert to dot.case: `"hello_world_foo"` becomes `"hello.world.foo"`.
pub fn to_dot_case<'a>(input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
    Case::Dot.convert(input)
}

/// Convert to kebab-case: `"Hello World!"` becomes `"hello-world"`.
pub fn to_kebab_case<'a>(input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
    Case::Kebab.convert(input)
}

/// Convert to snake_case: `"Hello World"` becomes `"hello_world"`.
pub fn to_snake_case<'a>(input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
    Case::Snake.convert(input)
}

/// Convert to PascalCase: `"hello world"` becomes `"HelloWorld"`.
pub fn to_pascal_case<'a>(input: impl Into<CaseInput<'a>>) -> Result<String, CaseError> {
    Case::Pascal.convert(input)
}
