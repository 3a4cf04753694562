//! Untyped envelopes and message dispatch.
//!
//! [`decode_message`] classifies raw bytes as a request, notification or
//! response, checks the envelope, resolves the method against the registries
//! and validates `params` against the payload type registered for it. The
//! resulting `Any*` values keep the payload as raw JSON so that the caller
//! can re-parse it into the typed envelope for the method it serves.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use strum::Display;
use tracing::{debug, trace};

use super::{
    JSONRPC_VERSION, LspNotification, LspRequest, NotificationMessage, RequestId, RequestMessage,
    ResponseError, ResponseMessage, require,
};
use crate::config::DecodeConfig;
use crate::error::{ProtocolError, Result};
use crate::methods::{NotificationMethod, RequestMethod};
use crate::{notification, request};

const MESSAGE_TARGET: &str = "lsprotocol::message";

/// A request whose method and params have not been bound to a type.
///
/// Decoding applies the request presence checks but leaves the method
/// unresolved, so any method string is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnyRequest {
    /// Protocol version as received.
    pub jsonrpc: String,
    /// Request identifier.
    pub id: RequestId,
    /// Method string as received.
    pub method: String,
    /// Raw params; `Some(Value::Null)` when sent as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl AnyRequest {
    /// Builds a request with the current protocol version.
    #[must_use]
    pub fn new(id: impl Into<RequestId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }

    /// Resolves the method against the request registry.
    #[must_use]
    pub fn method(&self) -> RequestMethod {
        RequestMethod::from_wire(&self.method)
    }

    /// Binds this request to method `R` with default decoding options.
    ///
    /// # Errors
    ///
    /// See [`AnyRequest::parse_with`].
    pub fn parse<R: LspRequest>(&self) -> Result<RequestMessage<R>> {
        self.parse_with(&DecodeConfig::default())
    }

    /// Binds this request to method `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MethodMismatch`] when the method differs from
    /// `R`'s, and [`ProtocolError::InvalidParams`] when the params do not
    /// decode as `R::Params`.
    pub fn parse_with<R: LspRequest>(&self, config: &DecodeConfig) -> Result<RequestMessage<R>> {
        ensure_method(R::METHOD.as_str(), &self.method)?;
        let params = config
            .params
            .decode(self.params.as_ref().unwrap_or(&Value::Null))
            .map_err(|source| ProtocolError::InvalidParams {
                method: R::METHOD.as_str(),
                id: Some(self.id.clone()),
                source,
            })?;
        Ok(RequestMessage {
            jsonrpc: self.jsonrpc.clone(),
            id: self.id.clone(),
            params,
        })
    }
}

/// A notification whose method and params have not been bound to a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnyNotification {
    /// Protocol version as received.
    pub jsonrpc: String,
    /// Method string as received.
    pub method: String,
    /// Raw params; `Some(Value::Null)` when sent as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl AnyNotification {
    /// Builds a notification with the current protocol version.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
        }
    }

    /// Resolves the method against the notification registry.
    #[must_use]
    pub fn method(&self) -> NotificationMethod {
        NotificationMethod::from_wire(&self.method)
    }

    /// Binds this notification to method `N` with default decoding options.
    ///
    /// # Errors
    ///
    /// See [`AnyNotification::parse_with`].
    pub fn parse<N: LspNotification>(&self) -> Result<NotificationMessage<N>> {
        self.parse_with(&DecodeConfig::default())
    }

    /// Binds this notification to method `N`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MethodMismatch`] when the method differs from
    /// `N`'s, and [`ProtocolError::InvalidParams`] when the params do not
    /// decode as `N::Params`.
    pub fn parse_with<N: LspNotification>(
        &self,
        config: &DecodeConfig,
    ) -> Result<NotificationMessage<N>> {
        ensure_method(N::METHOD.as_str(), &self.method)?;
        let params = config
            .params
            .decode(self.params.as_ref().unwrap_or(&Value::Null))
            .map_err(|source| ProtocolError::InvalidParams {
                method: N::METHOD.as_str(),
                id: None,
                source,
            })?;
        Ok(NotificationMessage {
            jsonrpc: self.jsonrpc.clone(),
            params,
        })
    }
}

/// A response whose result has not been bound to a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnyResponse {
    /// Protocol version as received.
    pub jsonrpc: String,
    /// The id of the answered request; `None` when sent as `null`.
    pub id: Option<RequestId>,
    /// Raw result; `Some(Value::Null)` when sent as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl AnyResponse {
    /// Reports whether the response carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Binds this response to the result type of method `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Malformed`] when the result does not decode as
    /// `R::Result`.
    pub fn parse<R: LspRequest>(&self) -> Result<ResponseMessage<R>> {
        let result = self
            .result
            .as_ref()
            .map(<R::Result as Deserialize<'_>>::deserialize)
            .transpose()?;
        Ok(ResponseMessage {
            jsonrpc: self.jsonrpc.clone(),
            id: self.id.clone(),
            result,
            error: self.error.clone(),
        })
    }
}

/// The three shapes of an incoming JSON-RPC message.
#[derive(Debug, Clone, PartialEq)]
pub enum IncomingMessage {
    /// A message with `method` and `id`.
    Request(AnyRequest),
    /// A message with `method` and no `id`.
    Notification(AnyNotification),
    /// A message with `id` and no `method`.
    Response(AnyResponse),
}

/// Discriminant of [`IncomingMessage`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    /// See [`IncomingMessage::Request`].
    Request,
    /// See [`IncomingMessage::Notification`].
    Notification,
    /// See [`IncomingMessage::Response`].
    Response,
}

impl IncomingMessage {
    /// Returns which shape this message has.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Request(_) => MessageKind::Request,
            Self::Notification(_) => MessageKind::Notification,
            Self::Response(_) => MessageKind::Response,
        }
    }

    /// Returns the request id for requests and responses.
    #[must_use]
    pub const fn id(&self) -> Option<&RequestId> {
        match self {
            Self::Request(request) => Some(&request.id),
            Self::Response(response) => response.id.as_ref(),
            Self::Notification(_) => None,
        }
    }
}

/// Decodes one JSON-RPC message from raw bytes.
///
/// # Errors
///
/// - [`ProtocolError::Malformed`] when the bytes are not a JSON object or a
///   member has the wrong type.
/// - [`ProtocolError::MissingMethod`] when neither `method` nor `id` is set.
/// - The envelope presence errors when `jsonrpc` is absent.
/// - [`ProtocolError::UnsupportedVersion`] when `config.require_version` is
///   set and `jsonrpc` is not `"2.0"`.
/// - [`ProtocolError::UnknownMethod`] for methods outside the registries.
/// - [`ProtocolError::InvalidParams`] when params do not decode as the payload
///   registered for the method.
pub fn decode_message(bytes: &[u8], config: &DecodeConfig) -> Result<IncomingMessage> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_value(value, config)
}

/// Decodes one JSON-RPC message from an already parsed value.
///
/// # Errors
///
/// See [`decode_message`].
pub fn decode_value(value: Value, config: &DecodeConfig) -> Result<IncomingMessage> {
    let Value::Object(object) = value else {
        return Err(ProtocolError::Malformed(serde::de::Error::custom(
            "JSON-RPC message must be an object",
        )));
    };

    let message = match (object.contains_key("method"), object.contains_key("id")) {
        (true, true) => IncomingMessage::Request(decode_request(object, config)?),
        (true, false) => IncomingMessage::Notification(decode_notification(object, config)?),
        (false, true) => IncomingMessage::Response(decode_response(object, config)?),
        (false, false) => return Err(ProtocolError::MissingMethod),
    };
    trace!(
        target: MESSAGE_TARGET,
        kind = %message.kind(),
        id = ?message.id(),
        "decoded message"
    );
    Ok(message)
}

fn decode_request(object: Map<String, Value>, config: &DecodeConfig) -> Result<AnyRequest> {
    let request = request_envelope(object, config.require_version)?;
    let symbol = request.method();
    if !symbol.is_known() {
        debug!(
            target: MESSAGE_TARGET,
            method = %request.method,
            id = %request.id,
            "unknown request method"
        );
        return Err(ProtocolError::UnknownMethod {
            method: request.method,
            id: Some(request.id),
        });
    }
    let params = request.params.as_ref().unwrap_or(&Value::Null);
    request::check_params(symbol, params, config.params).map_err(|source| {
        ProtocolError::InvalidParams {
            method: symbol.as_str(),
            id: Some(request.id.clone()),
            source,
        }
    })?;
    Ok(request)
}

fn decode_notification(
    object: Map<String, Value>,
    config: &DecodeConfig,
) -> Result<AnyNotification> {
    let notification = notification_envelope(object, config.require_version)?;
    let symbol = notification.method();
    if !symbol.is_known() {
        debug!(
            target: MESSAGE_TARGET,
            method = %notification.method,
            "unknown notification method"
        );
        return Err(ProtocolError::UnknownMethod {
            method: notification.method,
            id: None,
        });
    }
    let params = notification.params.as_ref().unwrap_or(&Value::Null);
    notification::check_params(symbol, params, config.params).map_err(|source| {
        ProtocolError::InvalidParams {
            method: symbol.as_str(),
            id: None,
            source,
        }
    })?;
    Ok(notification)
}

fn decode_response(object: Map<String, Value>, config: &DecodeConfig) -> Result<AnyResponse> {
    response_envelope(object, config.require_version)
}

// ---------------------------------------------------------------------------
// Envelope presence
// ---------------------------------------------------------------------------

/// Checks `method`, `id` and `jsonrpc` in that order and splits the request.
fn request_envelope(mut object: Map<String, Value>, require_version: bool) -> Result<AnyRequest> {
    for field in ["method", "id", "jsonrpc"] {
        require(&object, field, ProtocolError::missing_request_field)?;
    }
    let id: RequestId = take(&mut object, "id")?;
    let jsonrpc = check_version(take_raw(&mut object, "jsonrpc"), require_version, Some(&id))?;
    let method: String = take(&mut object, "method")?;
    Ok(AnyRequest {
        jsonrpc,
        id,
        method,
        params: object.remove("params"),
    })
}

/// Checks `method` then `jsonrpc` and splits the notification.
fn notification_envelope(
    mut object: Map<String, Value>,
    require_version: bool,
) -> Result<AnyNotification> {
    for field in ["method", "jsonrpc"] {
        require(&object, field, ProtocolError::missing_notification_field)?;
    }
    let jsonrpc = check_version(take_raw(&mut object, "jsonrpc"), require_version, None)?;
    let method: String = take(&mut object, "method")?;
    Ok(AnyNotification {
        jsonrpc,
        method,
        params: object.remove("params"),
    })
}

/// Checks `id` and `jsonrpc` and splits the response.
fn response_envelope(mut object: Map<String, Value>, require_version: bool) -> Result<AnyResponse> {
    if !(object.contains_key("id") && object.contains_key("jsonrpc")) {
        return Err(ProtocolError::MissingResponseField);
    }
    let id: Option<RequestId> = take(&mut object, "id")?;
    let jsonrpc = check_version(take_raw(&mut object, "jsonrpc"), require_version, id.as_ref())?;
    let error: Option<ResponseError> = take(&mut object, "error")?;
    Ok(AnyResponse {
        jsonrpc,
        id,
        result: object.remove("result"),
        error,
    })
}

fn envelope_from<'de, D, T>(
    deserializer: D,
    split: impl FnOnce(Map<String, Value>, bool) -> Result<T>,
) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let object = Map::<String, Value>::deserialize(deserializer)?;
    split(object, false).map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for AnyRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        envelope_from(deserializer, request_envelope)
    }
}

impl<'de> Deserialize<'de> for AnyNotification {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        envelope_from(deserializer, notification_envelope)
    }
}

impl<'de> Deserialize<'de> for AnyResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        envelope_from(deserializer, response_envelope)
    }
}

/// Removes a member, reading an absent one as `null`.
fn take_raw(object: &mut Map<String, Value>, field: &str) -> Value {
    object.remove(field).unwrap_or(Value::Null)
}

/// Removes and decodes a member, reading an absent one as `null`.
fn take<T>(object: &mut Map<String, Value>, field: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    Ok(serde_json::from_value(take_raw(object, field))?)
}

fn check_version(raw: Value, require_version: bool, id: Option<&RequestId>) -> Result<String> {
    match raw {
        Value::String(version) if !require_version || version == JSONRPC_VERSION => Ok(version),
        other if require_version => Err(ProtocolError::UnsupportedVersion {
            version: other.to_string(),
            id: id.cloned(),
        }),
        other => Ok(serde_json::from_value(other)?),
    }
}

fn ensure_method(expected: &'static str, found: &str) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ProtocolError::MethodMismatch {
            expected,
            found: found.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn any_request_serialises_without_absent_params() {
        let request = AnyRequest::new(42, "shutdown", None);
        let json = serde_json::to_string(&request).expect("serialise request");
        assert!(json.contains(r#""id":42"#));
        assert!(json.contains(r#""method":"shutdown""#));
        assert!(!json.contains("params"));
    }

    #[rstest]
    fn any_request_keeps_null_params_apart_from_absent() {
        let request: AnyRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0", "id": "a", "method": "shutdown", "params": null
        }))
        .expect("decode request");
        assert_eq!(request.params, Some(Value::Null));
    }

    #[rstest]
    fn any_response_serialises_null_id() {
        let response = AnyResponse {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: None,
            result: None,
            error: Some(ResponseError::new(-32700, "parse error")),
        };
        let json = serde_json::to_string(&response).expect("serialise response");
        assert!(json.contains(r#""id":null"#));
        assert!(json.contains(r#""code":-32700"#));
    }

    #[rstest]
    #[case::method(json!({}), "method")]
    #[case::id(json!({"jsonrpc": "2.0", "method": "custom/ping"}), "id")]
    #[case::jsonrpc(json!({"id": 1, "method": "custom/ping"}), "jsonrpc")]
    fn any_request_checks_presence_in_order(#[case] raw: Value, #[case] field: &str) {
        let error = serde_json::from_value::<AnyRequest>(raw).expect_err("incomplete request");
        let message = error.to_string();
        assert!(
            message.contains(&format!("missing required request field: {field}")),
            "expected missing {field} in message: {message}"
        );
    }

    #[rstest]
    fn any_request_accepts_unregistered_methods() {
        let request: AnyRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0", "id": 1, "method": "custom/ping"
        }))
        .expect("decode request");
        assert_eq!(request.method(), RequestMethod::Unknown);
        assert!(request.params.is_none());
    }

    #[rstest]
    #[case::method(json!({"jsonrpc": "2.0"}), "method")]
    #[case::jsonrpc(json!({"method": "exit", "params": null}), "jsonrpc")]
    fn any_notification_checks_presence(#[case] raw: Value, #[case] field: &str) {
        let error =
            serde_json::from_value::<AnyNotification>(raw).expect_err("incomplete notification");
        let message = error.to_string();
        assert!(
            message.contains(&format!("missing required notification field: {field}")),
            "expected missing {field} in message: {message}"
        );
    }

    #[rstest]
    #[case::id(json!({"jsonrpc": "2.0", "result": 1}))]
    #[case::jsonrpc(json!({"id": 1, "result": 1}))]
    fn any_response_requires_id_and_jsonrpc(#[case] raw: Value) {
        let error = serde_json::from_value::<AnyResponse>(raw).expect_err("incomplete response");
        let message = error.to_string();
        assert!(
            message.contains("response must have an id and jsonrpc field"),
            "expected presence error in message: {message}"
        );
    }

    #[rstest]
    fn any_response_keeps_null_id_and_result() {
        let response: AnyResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0", "id": null, "result": null
        }))
        .expect("decode response");
        assert!(response.id.is_none());
        assert_eq!(response.result, Some(Value::Null));
        assert!(!response.is_error());
    }

    #[rstest]
    #[case::request(json!({"jsonrpc": "2.0", "id": 1, "method": "shutdown"}), MessageKind::Request)]
    #[case::notification(json!({"jsonrpc": "2.0", "method": "exit"}), MessageKind::Notification)]
    #[case::response(json!({"jsonrpc": "2.0", "id": 1, "result": null}), MessageKind::Response)]
    fn messages_are_classified_by_members(#[case] value: Value, #[case] expected: MessageKind) {
        let message = decode_value(value, &DecodeConfig::default()).expect("decode message");
        assert_eq!(message.kind(), expected);
    }

    #[rstest]
    fn check_version_accepts_any_string_when_lenient() {
        let version = check_version(json!("1.0"), false, None)
            .expect("lenient version");
        assert_eq!(version, "1.0");
    }

    #[rstest]
    fn check_version_rejects_non_strings_even_when_lenient() {
        let error = check_version(json!(2), false, None)
            .expect_err("numeric version should fail");
        assert!(matches!(error, ProtocolError::Malformed(_)));
    }
}
