//! Request adapter: protocol classification and canonical extraction.
//!
//! Three incompatible invocation shapes arrive at the same endpoint:
//!
//! 1. MCP-style JSON-RPC envelopes (`{"jsonrpc":"2.0","method":...}`),
//! 2. Lambda-proxy events wrapping the real payload in a `body` member,
//! 3. flat invocation objects (`{"name":"add","arguments":{...}}`).
//!
//! The adapter classifies an inbound byte payload into one of these,
//! unwraps proxy framing, and extracts exactly one [`CanonicalRequest`]
//! regardless of the wire shape. It performs no I/O and owns no state.

use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::debug;

use super::error::{ExtractionError, RequestError};

/// Which wire envelope the request arrived in. Drives response encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolTag {
    /// A JSON-RPC 2.0 envelope, delivered directly.
    JsonRpc,
    /// A proxy-integration event; the response must be wrapped in
    /// `{statusCode, headers, body}`.
    LambdaProxy,
    /// A flat invocation object (simple HTTP POST or a direct,
    /// non-proxy event); the response is the bare JSON-RPC object.
    Direct,
}

/// Whether a JSON-RPC envelope was present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// `jsonrpc`/`method`/`id` were taken verbatim from an envelope.
    Envelope,
    /// A flat payload; `method` was synthesized as `tools/call`.
    Flat,
}

/// The protocol-independent form of an inbound request. Exactly one is
/// produced per request.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    pub protocol: ProtocolTag,
    pub shape: RequestShape,
    /// The JSON-RPC id verbatim, `Some(Value::Null)` for an explicit null.
    pub rpc_id: Option<Value>,
    /// The `jsonrpc` version string verbatim, if present.
    pub jsonrpc: Option<String>,
    pub method: Option<String>,
    pub tool_name: Option<String>,
    pub arguments: Map<String, Value>,
    pub raw_body: Bytes,
}

/// A classified payload, ready for extraction.
#[derive(Debug)]
pub struct ParsedPayload {
    protocol: ProtocolTag,
    payload: Map<String, Value>,
    raw_body: Bytes,
}

/// Size-check, parse, and classify an inbound byte payload.
///
/// The size guard runs before any JSON work; a proxy event's `body` member
/// (a JSON-encoded string or an inline object) is unwrapped here so that
/// extraction only ever sees the real payload.
pub fn parse(body: &[u8], limit: usize) -> Result<ParsedPayload, RequestError> {
    if body.len() > limit {
        return Err(RequestError::TooLarge {
            size: body.len(),
            limit,
        });
    }

    let top: Value = serde_json::from_slice(body)?;
    let Value::Object(top) = top else {
        return Err(RequestError::NotAnObject);
    };

    let raw_body = Bytes::copy_from_slice(body);

    // A proxy event is recognized by its top-level `body` member.
    if let Some(proxy_body) = top.get("body") {
        let inner = match proxy_body {
            Value::String(encoded) => serde_json::from_str::<Value>(encoded)
                .map_err(|e| RequestError::ProxyBody(e.to_string()))?,
            Value::Object(_) => proxy_body.clone(),
            other => {
                return Err(RequestError::ProxyBody(format!(
                    "expected a JSON string or object, got {other}"
                )));
            }
        };
        let Value::Object(payload) = inner else {
            return Err(RequestError::ProxyBody(
                "body does not contain a JSON object".to_string(),
            ));
        };
        debug!("classified request as Lambda-proxy event");
        return Ok(ParsedPayload {
            protocol: ProtocolTag::LambdaProxy,
            payload,
            raw_body,
        });
    }

    let protocol = if is_envelope(&top) {
        ProtocolTag::JsonRpc
    } else {
        ProtocolTag::Direct
    };
    debug!("classified request as {:?}", protocol);
    Ok(ParsedPayload {
        protocol,
        payload: top,
        raw_body,
    })
}

/// Extract the canonical request from a classified payload.
pub fn extract(parsed: ParsedPayload) -> Result<CanonicalRequest, ExtractionError> {
    let ParsedPayload {
        protocol,
        payload,
        raw_body,
    } = parsed;

    if is_envelope(&payload) {
        return Ok(extract_envelope(protocol, payload, raw_body));
    }
    extract_flat(protocol, payload, raw_body)
}

/// An object carrying `jsonrpc` or `method` is envelope-shaped, even when
/// malformed - the dispatcher answers malformed envelopes with
/// `INVALID_REQUEST` rather than the adapter guessing a flat reading.
fn is_envelope(payload: &Map<String, Value>) -> bool {
    payload.contains_key("jsonrpc") || payload.contains_key("method")
}

fn extract_envelope(
    protocol: ProtocolTag,
    payload: Map<String, Value>,
    raw_body: Bytes,
) -> CanonicalRequest {
    let params = payload.get("params");
    let tool_name = params
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let arguments = params
        .and_then(|p| p.get("arguments"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    CanonicalRequest {
        protocol,
        shape: RequestShape::Envelope,
        rpc_id: payload.get("id").cloned(),
        jsonrpc: payload
            .get("jsonrpc")
            .and_then(Value::as_str)
            .map(str::to_string),
        method: payload
            .get("method")
            .and_then(Value::as_str)
            .map(str::to_string),
        tool_name,
        arguments,
        raw_body,
    }
}

/// Candidate keys for flat payloads, in priority order: the invocation
/// object itself, then its `input` member, then its `parameters` member.
/// Within each container the tool name is read from `name` then `tool`;
/// arguments come from an `arguments` object or, failing that, the
/// container's remaining keys.
fn extract_flat(
    protocol: ProtocolTag,
    payload: Map<String, Value>,
    raw_body: Bytes,
) -> Result<CanonicalRequest, ExtractionError> {
    let nested = |key: &str| payload.get(key).and_then(Value::as_object);
    let containers = [Some(&payload), nested("input"), nested("parameters")];

    for container in containers.into_iter().flatten() {
        let Some((name_key, tool_name)) = ["name", "tool"].iter().find_map(|&key| {
            container
                .get(key)
                .and_then(Value::as_str)
                .map(|name| (key, name.to_string()))
        }) else {
            continue;
        };

        let arguments = match container.get("arguments").and_then(Value::as_object) {
            Some(args) => args.clone(),
            None => container
                .iter()
                .filter(|(key, _)| key.as_str() != name_key && key.as_str() != "arguments")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        };

        return Ok(CanonicalRequest {
            protocol,
            shape: RequestShape::Flat,
            rpc_id: None,
            jsonrpc: None,
            method: Some("tools/call".to_string()),
            tool_name: Some(tool_name),
            arguments,
            raw_body,
        });
    }

    Err(ExtractionError { protocol })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 64 * 1024;

    fn parse_extract(json: &str) -> CanonicalRequest {
        extract(parse(json.as_bytes(), LIMIT).unwrap()).unwrap()
    }

    #[test]
    fn test_classify_jsonrpc_envelope() {
        let req = parse_extract(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);
        assert_eq!(req.protocol, ProtocolTag::JsonRpc);
        assert_eq!(req.shape, RequestShape::Envelope);
        assert_eq!(req.method.as_deref(), Some("tools/list"));
        assert_eq!(req.rpc_id, Some(serde_json::json!(1)));
    }

    #[test]
    fn test_classify_proxy_with_string_body() {
        let event = serde_json::json!({
            "httpMethod": "POST",
            "body": r#"{"jsonrpc":"2.0","id":"x","method":"tools/list"}"#
        });
        let req = parse_extract(&event.to_string());
        assert_eq!(req.protocol, ProtocolTag::LambdaProxy);
        assert_eq!(req.method.as_deref(), Some("tools/list"));
        assert_eq!(req.rpc_id, Some(serde_json::json!("x")));
    }

    #[test]
    fn test_classify_proxy_with_object_body() {
        let event = serde_json::json!({
            "body": {"name": "add", "arguments": {"a": 2, "b": 3}}
        });
        let req = parse_extract(&event.to_string());
        assert_eq!(req.protocol, ProtocolTag::LambdaProxy);
        assert_eq!(req.shape, RequestShape::Flat);
        assert_eq!(req.tool_name.as_deref(), Some("add"));
        assert_eq!(req.method.as_deref(), Some("tools/call"));
    }

    #[test]
    fn test_classify_flat_direct() {
        let req = parse_extract(r#"{"name":"dns_lookup","arguments":{"hostname":"h"}}"#);
        assert_eq!(req.protocol, ProtocolTag::Direct);
        assert_eq!(req.tool_name.as_deref(), Some("dns_lookup"));
        assert_eq!(req.arguments["hostname"], "h");
    }

    #[test]
    fn test_flat_inline_arguments() {
        // No `arguments` object: remaining keys become the arguments
        let req = parse_extract(r#"{"tool":"add","a":2,"b":3}"#);
        assert_eq!(req.tool_name.as_deref(), Some("add"));
        assert_eq!(req.arguments["a"], 2);
        assert_eq!(req.arguments["b"], 3);
    }

    #[test]
    fn test_fallback_chain_priority_order() {
        // Top-level wins over `input`, `input` wins over `parameters`
        let req = parse_extract(
            r#"{"name":"add","input":{"name":"subtract"},"parameters":{"name":"divide"}}"#,
        );
        assert_eq!(req.tool_name.as_deref(), Some("add"));

        let req = parse_extract(
            r#"{"input":{"name":"subtract","arguments":{"a":1,"b":2}},"parameters":{"name":"divide"}}"#,
        );
        assert_eq!(req.tool_name.as_deref(), Some("subtract"));
        assert_eq!(req.arguments["a"], 1);

        let req = parse_extract(r#"{"parameters":{"tool":"divide","a":6,"b":3}}"#);
        assert_eq!(req.tool_name.as_deref(), Some("divide"));
        assert_eq!(req.arguments["b"], 3);
    }

    #[test]
    fn test_extraction_failure_is_explicit_not_defaulted() {
        let parsed = parse(br#"{"payload":"nothing usable"}"#, LIMIT).unwrap();
        let err = extract(parsed).unwrap_err();
        assert_eq!(err.protocol, ProtocolTag::Direct);
    }

    #[test]
    fn test_null_id_preserved_verbatim() {
        let req = parse_extract(r#"{"jsonrpc":"2.0","id":null,"method":"tools/list"}"#);
        assert_eq!(req.rpc_id, Some(Value::Null));

        let req = parse_extract(r#"{"jsonrpc":"2.0","method":"tools/list"}"#);
        assert_eq!(req.rpc_id, None);
    }

    #[test]
    fn test_oversized_body_rejected_before_parse() {
        // Not even valid JSON: the size guard must fire first
        let body = vec![b'x'; 32];
        let err = parse(&body, 16).unwrap_err();
        assert!(matches!(err, RequestError::TooLarge { size: 32, limit: 16 }));
    }

    #[test]
    fn test_unparseable_body() {
        let err = parse(b"{not json", LIMIT).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_non_object_body() {
        let err = parse(b"[1,2,3]", LIMIT).unwrap_err();
        assert!(matches!(err, RequestError::NotAnObject));
    }

    #[test]
    fn test_malformed_proxy_body() {
        let err = parse(br#"{"body":"{broken"}"#, LIMIT).unwrap_err();
        assert!(matches!(err, RequestError::ProxyBody(_)));

        let err = parse(br#"{"body":42}"#, LIMIT).unwrap_err();
        assert!(matches!(err, RequestError::ProxyBody(_)));
    }

    #[test]
    fn test_envelope_with_wrong_version_stays_envelope() {
        // Not downgraded to a flat reading; the dispatcher rejects it
        let req = parse_extract(r#"{"jsonrpc":"1.0","id":1,"method":"tools/list"}"#);
        assert_eq!(req.shape, RequestShape::Envelope);
        assert_eq!(req.jsonrpc.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_tools_call_params_extraction() {
        let req = parse_extract(
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call",
               "params":{"name":"add","arguments":{"a":2,"b":3}}}"#,
        );
        assert_eq!(req.tool_name.as_deref(), Some("add"));
        assert_eq!(req.arguments["a"], 2);
    }
}
