//! Batch conversion of dynamic values
//!
//! Pure functions that convert a list of loosely typed values in one pass and
//! report every outcome, so callers can render a full report instead of
//! stopping at the first bad value.

use serde::Serialize;
use serde_json::Value;

use crate::case::Case;

/// Outcome of converting a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Report for a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutput {
    pub case: Case,
    pub results: Vec<ConversionResult>,
    pub summary: BatchSummary,
}

impl BatchOutput {
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Convert every value to `case`, keeping failures alongside successes.
///
/// Results keep the order of `inputs`.
pub fn convert_batch(case: Case, inputs: &[Value]) -> BatchOutput {
    let results: Vec<ConversionResult> = inputs
        .iter()
        .map(|input| match case.convert(input) {
            Ok(output) => ConversionResult {
                input: input.clone(),
                output: Some(output),
                error: None,
            },
            Err(err) => ConversionResult {
                input: input.clone(),
                output: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let failed = results.iter().filter(|result| !result.is_ok()).count();

    BatchOutput {
        case,
        summary: BatchSummary {
            total: results.len(),
            converted: results.len() - failed,
            failed,
        },
        results,
    }
}

/// Convert `text` to every supported style, in [`Case::ALL`] order.
pub fn convert_all_cases(text: &str) -> Vec<(Case, String)> {
    Case::ALL
        .into_iter()
        .map(|case| (case, case.apply(text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ============================================================================
    // convert_batch tests
    // ============================================================================

    #[test]
    fn test_convert_batch_all_strings() {
        let inputs = vec![json!("hello world"), json!("foo_bar")];
        let output = convert_batch(Case::Camel, &inputs);

        assert_eq!(output.case, Case::Camel);
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.results[0].output.as_deref(), Some("helloWorld"));
        assert_eq!(output.results[1].output.as_deref(), Some("fooBar"));
        assert!(!output.has_failures());
        assert_eq!(
            output.summary,
            BatchSummary {
                total: 2,
                converted: 2,
                failed: 0,
            }
        );
    }

    #[test]
    fn test_convert_batch_keeps_going_after_failure() {
        let inputs = vec![json!(123), json!(null), json!("a-b")];
        let output = convert_batch(Case::Dot, &inputs);

        assert!(output.has_failures());
        assert_eq!(output.summary.failed, 1);
        assert_eq!(output.summary.converted, 2);

        assert!(!output.results[0].is_ok());
        assert_eq!(
            output.results[0].error.as_deref(),
            Some("to_dot_case expected a string input, got number")
        );
        assert_eq!(output.results[1].output.as_deref(), Some(""));
        assert_eq!(output.results[2].output.as_deref(), Some("a.b"));
    }

    #[test]
    fn test_convert_batch_empty() {
        let output = convert_batch(Case::Kebab, &[]);

        assert!(output.results.is_empty());
        assert_eq!(output.summary.total, 0);
        assert!(!output.has_failures());
    }

    #[test]
    fn test_convert_batch_json_shape() {
        let output = convert_batch(Case::Kebab, &[json!("A B"), json!(true)]);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "case": "kebab",
                "results": [
                    { "input": "A B", "output": "a-b" },
                    { "input": true, "error": "to_kebab_case expected a string input, got boolean" }
                ],
                "summary": { "total": 2, "converted": 1, "failed": 1 }
            })
        );
    }

    // ============================================================================
    // convert_all_cases tests
    // ============================================================================

    #[test]
    fn test_convert_all_cases() {
        let rows = convert_all_cases("hello world");

        assert_eq!(
            rows,
            vec![
                (Case::Camel, "helloWorld".to_string()),
                (Case::Dot, "hello.world".to_string()),
                (Case::Kebab, "hello-world".to_string()),
                (Case::Snake, "hello_world".to_string()),
                (Case::Pascal, "HelloWorld".to_string()),
            ]
        );
    }

    #[test]
    fn test_convert_all_cases_empty() {
        assert!(convert_all_cases("").iter().all(|(_, output)| output.is_empty()));
    }
}
