use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseCaseError;

/// Target word-case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    Camel,
    /// `hello.world`
    Dot,
    /// `hello-world`
    Kebab,
    /// `hello_world`
    Snake,
    /// `HelloWorld`
    Pascal,
}

impl Case {
    /// Every supported style, in display order.
    pub const ALL: [Case; 5] = [
        Case::Camel,
        Case::Dot,
        Case::Kebab,
        Case::Snake,
        Case::Pascal,
    ];

    /// Short lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Dot => "dot",
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Pascal => "pascal",
        }
    }

    /// The style's name written in the style itself.
    pub fn label(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Dot => "dot.case",
            Case::Kebab => "kebab-case",
            Case::Snake => "snake_case",
            Case::Pascal => "PascalCase",
        }
    }

    /// Name of the converter function, used in error messages and tool names.
    pub fn function_name(self) -> &'static str {
        match self {
            Case::Camel => "to_camel_case",
            Case::Dot => "to_dot_case",
            Case::Kebab => "to_kebab_case",
            Case::Snake => "to_snake_case",
            Case::Pascal => "to_pascal_case",
        }
    }

    /// Look a style up by its converter function name.
    pub fn from_function_name(name: &str) -> Option<Case> {
        Case::ALL
            .into_iter()
            .find(|case| case.function_name() == name)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    /// Accepts the short name or the label in any spelling:
    /// `kebab`, `kebab-case`, `KebabCase` and `kebab_case` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.strip_suffix("case").unwrap_or(&normalized) {
            "camel" | "lowercamel" => Ok(Case::Camel),
            "dot" => Ok(Case::Dot),
            "kebab" => Ok(Case::Kebab),
            "snake" => Ok(Case::Snake),
            "pascal" | "uppercamel" => Ok(Case::Pascal),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

/// Type of a dynamic value that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Boolean,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Input accepted by the converters.
///
/// Mirrors a loosely typed value: it may be absent, a string, or something
/// else entirely. Only the last case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseInput<'a> {
    /// Null or absent value.
    Missing,
    /// A string, possibly empty.
    Text(&'a str),
    /// A defined value that is not a string.
    Invalid(ValueKind),
}

impl<'a> From<&'a str> for CaseInput<'a> {
    fn from(text: &'a str) -> Self {
        CaseInput::Text(text)
    }
}

impl<'a> From<&'a String> for CaseInput<'a> {
    fn from(text: &'a String) -> Self {
        CaseInput::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for CaseInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(CaseInput::Missing, CaseInput::Text)
    }
}

impl<'a> From<&'a serde_json::Value> for CaseInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CaseInput::Missing,
            Value::String(text) => CaseInput::Text(text),
            Value::Number(_) => CaseInput::Invalid(ValueKind::Number),
            Value::Bool(_) => CaseInput::Invalid(ValueKind::Boolean),
            Value::Array(_) => CaseInput::Invalid(ValueKind::Array),
            Value::Object(_) => CaseInput::Invalid(ValueKind::Object),
        }
    }
}

impl<'a> From<Option<&'a serde_json::Value>> for CaseInput<'a> {
    fn from(value: Option<&'a serde_json::Value>) -> Self {
        value.map_or(CaseInput::Missing, CaseInput::from)
    }
}

impl From<i64> for CaseInput<'_> {
    fn from(_: i64) -> Self {
        CaseInput::Invalid(ValueKind::Number)
    }
}

impl From<f64> for CaseInput<'_> {
    fn from(_: f64) -> Self {
        CaseInput::Invalid(ValueKind::Number)
    }
}

impl From<bool> for CaseInput<'_> {
    fn from(_: bool) -> Self {
        CaseInput::Invalid(ValueKind::Boolean)
    }
}
