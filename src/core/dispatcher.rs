//! JSON-RPC 2.0 method semantics over the tool registry.
//!
//! The dispatcher is protocol-blind: it receives canonical requests and
//! always produces a JSON-RPC response, whichever wire shape the request
//! arrived in. The request id is copied unchanged into every response
//! path, including the error paths.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::core::context::ExecutionContext;
use crate::core::protocol::adapter::{CanonicalRequest, RequestShape};
use crate::core::protocol::jsonrpc::JsonRpcResponse;
use crate::domains::tools::{ToolError, ToolRegistry};

const SUPPORTED_METHODS: &[&str] = &["tools/list", "tools/call"];

/// Routes canonical requests to the registry.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a shared registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Handle one canonical request.
    pub fn handle(&self, req: &CanonicalRequest, ctx: &ExecutionContext) -> JsonRpcResponse {
        let id = req.rpc_id.clone().unwrap_or(Value::Null);

        // Only envelope-shaped requests claim to speak JSON-RPC; flat
        // invocations had their method synthesized by the adapter.
        if req.shape == RequestShape::Envelope && req.jsonrpc.as_deref() != Some("2.0") {
            return JsonRpcResponse::invalid_request(
                id,
                "Invalid Request: expected \"jsonrpc\": \"2.0\"",
            );
        }

        match req.method.as_deref() {
            Some("tools/list") => self.tools_list(id),
            Some("tools/call") => self.tools_call(id, req, ctx),
            Some(method) => {
                warn!("unknown method: {}", method);
                JsonRpcResponse::error_with_data(
                    id,
                    super::protocol::error_codes::METHOD_NOT_FOUND,
                    "Method not found",
                    json!({ "supported": SUPPORTED_METHODS }),
                )
            }
            None => JsonRpcResponse::invalid_request(id, "Invalid Request: missing method"),
        }
    }

    fn tools_list(&self, id: Value) -> JsonRpcResponse {
        info!("listing {} tool(s)", self.registry.len());
        let tools: Vec<&_> = self.registry.descriptors().collect();
        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    fn tools_call(
        &self,
        id: Value,
        req: &CanonicalRequest,
        ctx: &ExecutionContext,
    ) -> JsonRpcResponse {
        let Some(name) = req.tool_name.as_deref() else {
            return JsonRpcResponse::invalid_params(id, "Missing tool name");
        };

        // Unknown tool is a protocol-level error, never a tool-level
        // isError result.
        let Some((descriptor, handler)) = self.registry.get(name) else {
            warn!("unknown tool requested: {}", name);
            return JsonRpcResponse::error_with_data(
                id,
                super::protocol::error_codes::METHOD_NOT_FOUND,
                format!("Unknown tool: {name}"),
                json!({ "available": self.registry.names() }),
            );
        };

        let missing: Vec<&str> = descriptor
            .input_schema
            .required
            .iter()
            .filter(|key| !req.arguments.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return JsonRpcResponse::invalid_params(
                id,
                format!("Missing required argument(s): {}", missing.join(", ")),
            );
        }

        let outcome = catch_unwind(AssertUnwindSafe(|| handler.invoke(&req.arguments, ctx)));

        match outcome {
            Ok(Ok(result)) => {
                info!(
                    request_id = ctx.request_id(),
                    tool = name,
                    elapsed_ms = ctx.elapsed().as_millis() as u64,
                    "tool completed"
                );
                match serde_json::to_value(&result) {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(e) => {
                        error!(tool = name, "failed to serialize tool result: {}", e);
                        JsonRpcResponse::internal_error(
                            id,
                            json!({"detail": "tool result unserializable"}),
                        )
                    }
                }
            }
            Ok(Err(ToolError::InvalidArguments(msg))) => {
                JsonRpcResponse::invalid_params(id, format!("Invalid arguments: {msg}"))
            }
            Ok(Err(e)) => {
                // Full detail stays in the logs; the client sees an opaque
                // description only.
                error!(request_id = ctx.request_id(), tool = name, "tool failed: {}", e);
                JsonRpcResponse::internal_error(id, json!({"detail": "tool execution failed"}))
            }
            Err(_) => {
                error!(request_id = ctx.request_id(), tool = name, "tool panicked");
                JsonRpcResponse::internal_error(id, json!({"detail": "unexpected failure"}))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::protocol::adapter::{self, ProtocolTag};
    use crate::domains::tools::{ToolDescriptor, ToolHandler, ToolResult, build_registry};
    use serde_json::Map;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(build_registry()))
    }

    fn canonical(json: &str) -> CanonicalRequest {
        adapter::extract(adapter::parse(json.as_bytes(), 64 * 1024).unwrap()).unwrap()
    }

    fn handle(json: &str) -> JsonRpcResponse {
        dispatcher().handle(&canonical(json), &ExecutionContext::new(None))
    }

    #[test]
    fn test_tools_list_in_registration_order() {
        let response = handle(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert!(!tools.is_empty());
        assert_eq!(tools[0]["name"], "add");
        for tool in tools {
            assert!(!tool["name"].as_str().unwrap().is_empty());
            assert!(!tool["description"].as_str().unwrap().is_empty());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[test]
    fn test_tools_call_success() {
        let response = handle(
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call",
               "params":{"name":"add","arguments":{"a":2,"b":3}}}"#,
        );
        assert_eq!(response.id, serde_json::json!(2));
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], "5");
        assert_eq!(result["isError"], false);
    }

    #[test]
    fn test_unknown_tool_is_protocol_error() {
        let response = handle(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"nope"}}"#,
        );
        let err = response.error.unwrap();
        assert_eq!(err.code, -32601);
        assert!(err.data.unwrap()["available"].as_array().is_some());
        assert!(response.result.is_none());
    }

    #[test]
    fn test_unknown_method_lists_supported() {
        let response = handle(r#"{"jsonrpc":"2.0","id":4,"method":"tools/destroy"}"#);
        let err = response.error.unwrap();
        assert_eq!(err.code, -32601);
        assert_eq!(
            err.data.unwrap()["supported"],
            serde_json::json!(["tools/list", "tools/call"])
        );
    }

    #[test]
    fn test_wrong_version_is_invalid_request() {
        let response = handle(r#"{"jsonrpc":"1.0","id":5,"method":"tools/list"}"#);
        assert_eq!(response.error.unwrap().code, -32600);
        assert_eq!(response.id, serde_json::json!(5));
    }

    #[test]
    fn test_missing_version_is_invalid_request() {
        let response = handle(r#"{"id":6,"method":"tools/list"}"#);
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[test]
    fn test_missing_required_arguments() {
        let response = handle(
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"add","arguments":{"a":1}}}"#,
        );
        let err = response.error.unwrap();
        assert_eq!(err.code, -32602);
        assert!(err.message.contains("b"));
    }

    #[test]
    fn test_missing_tool_name() {
        let response =
            handle(r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{}}"#);
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn test_domain_error_is_result_not_rpc_error() {
        let response = handle(
            r#"{"jsonrpc":"2.0","id":9,"method":"tools/call",
               "params":{"name":"divide","arguments":{"a":1,"b":0}}}"#,
        );
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("zero"));
    }

    #[test]
    fn test_invalid_argument_type_is_invalid_params() {
        let response = handle(
            r#"{"jsonrpc":"2.0","id":10,"method":"tools/call",
               "params":{"name":"add","arguments":{"a":1,"b":"two"}}}"#,
        );
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn test_id_propagation_for_all_json_id_kinds() {
        for id in [
            serde_json::json!(42),
            serde_json::json!("req-1"),
            Value::Null,
        ] {
            let body = serde_json::json!({
                "jsonrpc": "2.0", "id": id, "method": "tools/list"
            });
            let response = handle(&body.to_string());
            assert_eq!(response.id, id);
        }
    }

    #[test]
    fn test_flat_request_dispatches_without_envelope() {
        let req = canonical(r#"{"name":"add","a":4,"b":5}"#);
        assert_eq!(req.protocol, ProtocolTag::Direct);
        let response = dispatcher().handle(&req, &ExecutionContext::new(None));
        assert_eq!(response.result.unwrap()["content"][0]["text"], "9");
    }

    #[test]
    fn test_execution_failure_is_opaque_internal_error() {
        struct FlakyTool;
        impl ToolHandler for FlakyTool {
            fn descriptor(&self) -> ToolDescriptor {
                ToolDescriptor::new("flaky", "always fails")
            }
            fn invoke(
                &self,
                _arguments: &Map<String, Value>,
                _ctx: &ExecutionContext,
            ) -> Result<ToolResult, ToolError> {
                Err(ToolError::execution_failed("backend socket reset"))
            }
        }

        let mut registry = crate::domains::tools::ToolRegistry::new();
        registry.register(Box::new(FlakyTool));
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let req = canonical(
            r#"{"jsonrpc":"2.0","id":12,"method":"tools/call","params":{"name":"flaky"}}"#,
        );
        let response = dispatcher.handle(&req, &ExecutionContext::new(None));
        let err = response.error.unwrap();
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "Internal error");
        // The failure detail stays in the logs, never in the response
        assert!(!err.data.unwrap().to_string().contains("socket"));
    }

    #[test]
    fn test_panicking_tool_becomes_internal_error() {
        struct PanickingTool;
        impl ToolHandler for PanickingTool {
            fn descriptor(&self) -> ToolDescriptor {
                ToolDescriptor::new("panic_tool", "always panics")
            }
            fn invoke(
                &self,
                _arguments: &Map<String, Value>,
                _ctx: &ExecutionContext,
            ) -> Result<ToolResult, ToolError> {
                panic!("boom");
            }
        }

        let mut registry = crate::domains::tools::ToolRegistry::new();
        registry.register(Box::new(PanickingTool));
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let req = canonical(
            r#"{"jsonrpc":"2.0","id":11,"method":"tools/call","params":{"name":"panic_tool"}}"#,
        );
        let response = dispatcher.handle(&req, &ExecutionContext::new(None));
        let err = response.error.unwrap();
        assert_eq!(err.code, -32603);
        assert_eq!(err.message, "Internal error");
        // No panic payload text leaks into the client-visible data
        assert!(!err.data.unwrap().to_string().contains("boom"));
    }
}
