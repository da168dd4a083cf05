use casekit_core::case::Case;
use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "casekit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

fn case_tool(case: Case) -> Tool {
    Tool {
        name: case.function_name().to_string(),
        description: format!(
            "Convert text to {}. Spaces, hyphens and underscores separate words; runs of them \
             count once and leading or trailing ones are ignored. Other punctuation is stripped \
             without splitting words. \
             A null or missing input returns an empty string. Non-string inputs are rejected.",
            case.label()
        ),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": ["string", "null"],
                    "description": "Text to convert"
                }
            },
            "required": []
        }),
    }
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = Case::ALL.into_iter().map(case_tool).collect();

    serde_json::to_value(ToolsList { tools }).map_err(internal_error)
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    let case = Case::from_function_name(&params.name).ok_or_else(|| JsonRpcError {
        code: -32602,
        message: format!("Unknown tool: {}", params.name),
        data: None,
    })?;

    handle_convert(case, params.arguments)
}

fn handle_convert(
    case: Case,
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let input = match &arguments {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Object(map)) => map.get("input"),
        Some(_) => {
            return Err(JsonRpcError {
                code: -32602,
                message: "Invalid arguments: expected an object".to_string(),
                data: None,
            })
        }
    };

    log::debug!("calling {} with {:?}", case.function_name(), input);

    let text = case.convert(input).map_err(|e| JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: Some(serde_json::json!({ "kind": "TypeKind" })),
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text }],
    };

    serde_json::to_value(result).map_err(internal_error)
}

fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, arguments: serde_json::Value) -> Result<serde_json::Value, JsonRpcError> {
        handle_tools_call(Some(json!({ "name": name, "arguments": arguments })))
    }

    fn text(result: &serde_json::Value) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    // ============================================================================
    // tools/list
    // ============================================================================

    #[test]
    fn test_tools_list_has_one_tool_per_case() {
        let value = handle_tools_list().unwrap();
        let names: Vec<&str> = value["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            [
                "to_camel_case",
                "to_dot_case",
                "to_kebab_case",
                "to_snake_case",
                "to_pascal_case"
            ]
        );
        assert!(value["tools"][0]["inputSchema"]["properties"]["input"].is_object());
    }

    // ============================================================================
    // tools/call
    // ============================================================================

    #[test]
    fn test_call_converts_string() {
        let result = call("to_camel_case", json!({"input": "HELLO WORLD"})).unwrap();
        assert_eq!(text(&result), "helloWorld");
        assert_eq!(result, json!({"content": [{"type": "text", "text": "helloWorld"}]}));

        let result = call(
            "to_kebab_case",
            json!({"input": "Hello World! This is a test_string."}),
        )
        .unwrap();
        assert_eq!(text(&result), "hello-world-this-is-a-test-string");
    }

    #[test]
    fn test_call_missing_input_returns_empty() {
        assert_eq!(text(&call("to_dot_case", json!({})).unwrap()), "");
        assert_eq!(text(&call("to_dot_case", json!({"input": null})).unwrap()), "");
        assert_eq!(text(&call("to_dot_case", json!(null)).unwrap()), "");
    }

    #[test]
    fn test_call_non_string_input_is_type_kind() {
        let err = call("to_camel_case", json!({"input": 123})).unwrap_err();

        assert_eq!(err.code, -32602);
        assert_eq!(
            err.message,
            "Invalid arguments: to_camel_case expected a string input, got number"
        );
        assert_eq!(err.data, Some(json!({"kind": "TypeKind"})));
    }

    #[test]
    fn test_call_non_object_arguments() {
        let err = call("to_snake_case", json!("hello")).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_call_unknown_tool() {
        let err = call("to_title_case", json!({"input": "x"})).unwrap_err();

        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Unknown tool: to_title_case");
    }

    #[test]
    fn test_call_without_params() {
        let err = handle_tools_call(None).unwrap_err();
        assert_eq!(err.code, -32602);
        assert!(err.message.starts_with("Invalid params"));
    }
}
