//! JSON-RPC envelopes.
//!
//! Typed envelopes ([`RequestMessage`], [`ResponseMessage`],
//! [`NotificationMessage`]) are generic over a method marker from
//! [`crate::request`] or [`crate::notification`]. Decoding checks that the
//! mandatory envelope members are present before looking at the payload:
//!
//! - requests need `method`, `id` and `jsonrpc`, checked in that order;
//! - responses need `id` and `jsonrpc`;
//! - notifications need `method` and `jsonrpc`.
//!
//! Presence is about keys, not values, so `"id": null` counts as present.
//! The untyped side ([`AnyRequest`], [`AnyNotification`], [`AnyResponse`])
//! and the [`decode_message`] entry point live in [`any`].

mod any;

use std::fmt;

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

pub use any::{
    AnyNotification, AnyRequest, AnyResponse, IncomingMessage, MessageKind, decode_message,
    decode_value,
};

use crate::error::ProtocolError;
use crate::methods::{NotificationMethod, RequestMethod};
use crate::types::LspAny;

/// The only JSON-RPC version the protocol speaks.
pub const JSONRPC_VERSION: &str = "2.0";

static NULL: Value = Value::Null;

lsp_union! {
    /// Identifier correlating a request with its response.
    #[derive(Eq, Hash)]
    pub enum RequestId {
        /// Numeric id.
        Integer(i32),
        /// Textual id.
        String(String),
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::String(value) => formatter.write_str(value),
        }
    }
}

impl From<i32> for RequestId {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Error code, usually an [`crate::ErrorCodes`] or
    /// [`crate::LspErrorCodes`] value.
    pub code: i32,
    /// Short description of the error.
    pub message: String,
    /// Additional information about the error.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::nullable::present"
    )]
    pub data: Option<LspAny>,
}

impl ResponseError {
    /// Builds an error with the given code and message.
    #[must_use]
    pub fn new(code: impl Into<i32>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Builds an error whose message is the rendering of `error`.
    #[must_use]
    pub fn from_error(code: impl Into<i32>, error: &impl fmt::Display) -> Self {
        Self::new(code, error.to_string())
    }

    /// Attaches structured data.
    #[must_use]
    pub fn with_data(mut self, data: LspAny) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.message, self.code)
    }
}

/// A request method with its payload types.
pub trait LspRequest {
    /// The method this marker stands for.
    const METHOD: RequestMethod;
    /// Whether requests carry a `params` member. Methods without one use
    /// [`LspNull`](crate::types::LspNull) as their payload.
    const HAS_PARAMS: bool = true;
    /// The `params` payload.
    type Params: Serialize + DeserializeOwned + fmt::Debug + Clone + PartialEq;
    /// The `result` payload of a successful response.
    type Result: Serialize + DeserializeOwned + fmt::Debug + Clone + PartialEq;
}

/// A notification method with its payload type.
pub trait LspNotification {
    /// The method this marker stands for.
    const METHOD: NotificationMethod;
    /// Whether notifications carry a `params` member.
    const HAS_PARAMS: bool = true;
    /// The `params` payload.
    type Params: Serialize + DeserializeOwned + fmt::Debug + Clone + PartialEq;
}

/// A request for method `R`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestMessage<R: LspRequest> {
    /// Protocol version as received; [`JSONRPC_VERSION`] when built locally.
    pub jsonrpc: String,
    /// Request identifier.
    pub id: RequestId,
    /// The request payload.
    pub params: R::Params,
}

impl<R: LspRequest> RequestMessage<R> {
    /// Builds a request with the current protocol version.
    #[must_use]
    pub fn new(id: impl Into<RequestId>, params: R::Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: id.into(),
            params,
        }
    }

    /// Returns the method of this request.
    #[must_use]
    pub const fn method(&self) -> RequestMethod {
        R::METHOD
    }
}

/// A response to a request for method `R`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMessage<R: LspRequest> {
    /// Protocol version as received; [`JSONRPC_VERSION`] when built locally.
    pub jsonrpc: String,
    /// The id of the answered request; `null` when it could not be read.
    pub id: Option<RequestId>,
    /// The result. `None` when the member is absent; a present `null` is kept
    /// by result types that admit it.
    pub result: Option<R::Result>,
    /// The error, when the request failed.
    pub error: Option<ResponseError>,
}

impl<R: LspRequest> ResponseMessage<R> {
    /// Builds a successful response.
    #[must_use]
    pub fn success(id: impl Into<RequestId>, result: R::Result) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: Some(id.into()),
            result: Some(result),
            error: None,
        }
    }

    /// Builds a failed response; `id` is `None` when the request id is unknown.
    #[must_use]
    pub fn failure(id: Option<RequestId>, error: ResponseError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A notification for method `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage<N: LspNotification> {
    /// Protocol version as received; [`JSONRPC_VERSION`] when built locally.
    pub jsonrpc: String,
    /// The notification payload.
    pub params: N::Params,
}

impl<N: LspNotification> NotificationMessage<N> {
    /// Builds a notification with the current protocol version.
    #[must_use]
    pub fn new(params: N::Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            params,
        }
    }

    /// Returns the method of this notification.
    #[must_use]
    pub const fn method(&self) -> NotificationMethod {
        N::METHOD
    }
}

// ---------------------------------------------------------------------------
// Wire encoding
// ---------------------------------------------------------------------------

impl<R: LspRequest> Serialize for RequestMessage<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &self.jsonrpc)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("method", R::METHOD.as_str())?;
        if R::HAS_PARAMS {
            map.serialize_entry("params", &self.params)?;
        }
        map.end()
    }
}

impl<R: LspRequest> Serialize for ResponseMessage<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &self.jsonrpc)?;
        map.serialize_entry("id", &self.id)?;
        if let Some(result) = &self.result {
            map.serialize_entry("result", result)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.end()
    }
}

impl<N: LspNotification> Serialize for NotificationMessage<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &self.jsonrpc)?;
        map.serialize_entry("method", N::METHOD.as_str())?;
        if N::HAS_PARAMS {
            map.serialize_entry("params", &self.params)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Wire decoding
// ---------------------------------------------------------------------------

fn envelope_object<'a, E>(value: &'a Value, expected: &'static str) -> Result<&'a Map<String, Value>, E>
where
    E: de::Error,
{
    value
        .as_object()
        .ok_or_else(|| E::invalid_type(Unexpected::Other("non-object JSON value"), &expected))
}

/// Returns the member `field`, or `missing(field)` when the key is absent.
fn require<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    missing: impl FnOnce(&'static str) -> ProtocolError,
) -> Result<&'a Value, ProtocolError> {
    object.get(field).ok_or_else(|| missing(field))
}

fn decode_member<T, E>(value: &Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    T::deserialize(value).map_err(E::custom)
}

fn check_method<E>(value: &Value, expected: &'static str) -> Result<(), E>
where
    E: de::Error,
{
    let found: String = decode_member(value)?;
    if found == expected {
        Ok(())
    } else {
        Err(E::custom(ProtocolError::MethodMismatch { expected, found }))
    }
}

impl<'de, R: LspRequest> Deserialize<'de> for RequestMessage<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let object = envelope_object::<D::Error>(&value, "a JSON-RPC request object")?;
        let method = require(object, "method", ProtocolError::missing_request_field)
            .map_err(de::Error::custom)?;
        let id = require(object, "id", ProtocolError::missing_request_field)
            .map_err(de::Error::custom)?;
        let jsonrpc = require(object, "jsonrpc", ProtocolError::missing_request_field)
            .map_err(de::Error::custom)?;

        check_method::<D::Error>(method, R::METHOD.as_str())?;
        Ok(Self {
            jsonrpc: decode_member::<_, D::Error>(jsonrpc)?,
            id: decode_member::<_, D::Error>(id)?,
            params: decode_member::<_, D::Error>(object.get("params").unwrap_or(&NULL))?,
        })
    }
}

impl<'de, R: LspRequest> Deserialize<'de> for ResponseMessage<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let object = envelope_object::<D::Error>(&value, "a JSON-RPC response object")?;
        let (Some(id), Some(jsonrpc)) = (object.get("id"), object.get("jsonrpc")) else {
            return Err(de::Error::custom(ProtocolError::MissingResponseField));
        };

        let result = object
            .get("result")
            .map(decode_member::<R::Result, D::Error>)
            .transpose()?;
        let error = object
            .get("error")
            .map(decode_member::<Option<ResponseError>, D::Error>)
            .transpose()?
            .flatten();
        Ok(Self {
            jsonrpc: decode_member::<_, D::Error>(jsonrpc)?,
            id: decode_member::<_, D::Error>(id)?,
            result,
            error,
        })
    }
}

impl<'de, N: LspNotification> Deserialize<'de> for NotificationMessage<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let object = envelope_object::<D::Error>(&value, "a JSON-RPC notification object")?;
        let method = require(object, "method", ProtocolError::missing_notification_field)
            .map_err(de::Error::custom)?;
        let jsonrpc = require(object, "jsonrpc", ProtocolError::missing_notification_field)
            .map_err(de::Error::custom)?;

        check_method::<D::Error>(method, N::METHOD.as_str())?;
        Ok(Self {
            jsonrpc: decode_member::<_, D::Error>(jsonrpc)?,
            params: decode_member::<_, D::Error>(object.get("params").unwrap_or(&NULL))?,
        })
    }
}

#[cfg(test)]
mod tests;
