use super::types::ValueKind;

/// Error returned by the case converters.
///
/// Absent and empty inputs are never an error, they convert to `""`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The input was a defined, non-null value that is not a string.
    #[error("{function} expected a string input, got {found}")]
    TypeKind {
        function: &'static str,
        found: ValueKind,
    },
}

/// Error returned when a case style name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown case style: {0} (expected one of camel, dot, kebab, snake, pascal)")]
pub struct ParseCaseError(pub String);
