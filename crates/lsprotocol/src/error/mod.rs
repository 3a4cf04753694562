//! Errors raised while decoding protocol payloads and envelopes.
//!
//! Union and envelope failures raised from inside `serde` impls are rendered
//! through `serde::de::Error::custom`, so their text survives inside a
//! [`serde_json::Error`]. The dispatch helpers in [`crate::message`] return
//! the structured variants directly.

use thiserror::Error;

use crate::message::{RequestId, ResponseError};
use crate::types::ErrorCodes;

/// Convenience alias for results carrying a [`ProtocolError`].
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Failures raised by the protocol codecs and dispatch helpers.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// No alternative of a union decoded the raw value.
    #[error("{union}: expected one of [{}], got {raw}", .alternatives.join(", "))]
    UnionMismatch {
        /// Union type name.
        union: &'static str,
        /// Alternative type names in decode order.
        alternatives: &'static [&'static str],
        /// Raw JSON text that failed to decode.
        raw: String,
    },

    /// A union that does not admit `null` received `null`.
    #[error("{union} [{}] cannot be null, got null", .alternatives.join(", "))]
    NullUnion {
        /// Union type name.
        union: &'static str,
        /// Alternative type names in decode order.
        alternatives: &'static [&'static str],
    },

    /// A request envelope lacks one of `method`, `id` or `jsonrpc`.
    #[error("missing required request field: {field}")]
    MissingRequestField {
        /// Name of the first missing field.
        field: &'static str,
    },

    /// A response envelope lacks `id` or `jsonrpc`.
    #[error("response must have an id and jsonrpc field")]
    MissingResponseField,

    /// A notification envelope lacks `method` or `jsonrpc`.
    #[error("missing required notification field: {field}")]
    MissingNotificationField {
        /// Name of the first missing field.
        field: &'static str,
    },

    /// A typed envelope received a different method than it models.
    #[error("expected method '{expected}', got '{found}'")]
    MethodMismatch {
        /// Method the envelope type models.
        expected: &'static str,
        /// Method string as received.
        found: String,
    },

    /// The message has neither a `method` nor an `id`.
    #[error("message carries neither a method nor an id")]
    MissingMethod,

    /// The method is not part of the protocol.
    #[error("unknown method '{method}'")]
    UnknownMethod {
        /// Method string as received.
        method: String,
        /// Request id, when the message was a request.
        id: Option<RequestId>,
    },

    /// The `jsonrpc` member is not `"2.0"`.
    #[error("unsupported JSON-RPC version {version}")]
    UnsupportedVersion {
        /// Raw JSON text of the `jsonrpc` member.
        version: String,
        /// Request id, when the message was a request.
        id: Option<RequestId>,
    },

    /// The params of a known method did not decode.
    #[error("invalid params for '{method}': {source}")]
    InvalidParams {
        /// Method whose params were rejected.
        method: &'static str,
        /// Request id, when the message was a request.
        id: Option<RequestId>,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The message is not valid JSON or not a JSON-RPC envelope.
    #[error("malformed JSON-RPC message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ProtocolError {
    pub(crate) fn union_mismatch(
        union: &'static str,
        alternatives: &'static [&'static str],
        raw: &serde_json::Value,
    ) -> Self {
        Self::UnionMismatch {
            union,
            alternatives,
            raw: raw.to_string(),
        }
    }

    pub(crate) const fn null_union(
        union: &'static str,
        alternatives: &'static [&'static str],
    ) -> Self {
        Self::NullUnion {
            union,
            alternatives,
        }
    }

    pub(crate) const fn missing_request_field(field: &'static str) -> Self {
        Self::MissingRequestField { field }
    }

    pub(crate) const fn missing_notification_field(field: &'static str) -> Self {
        Self::MissingNotificationField { field }
    }

    /// Returns the id of the offending request, when one was recovered.
    #[must_use]
    pub const fn request_id(&self) -> Option<&RequestId> {
        match self {
            Self::UnknownMethod { id, .. }
            | Self::UnsupportedVersion { id, .. }
            | Self::InvalidParams { id, .. } => id.as_ref(),
            _ => None,
        }
    }

    /// Returns the JSON-RPC error code a server should answer with.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCodes {
        match self {
            Self::Malformed(_) => ErrorCodes::PARSE_ERROR,
            Self::UnknownMethod { .. } => ErrorCodes::METHOD_NOT_FOUND,
            Self::InvalidParams { .. } => ErrorCodes::INVALID_PARAMS,
            Self::UnionMismatch { .. }
            | Self::NullUnion { .. }
            | Self::MissingRequestField { .. }
            | Self::MissingResponseField
            | Self::MissingNotificationField { .. }
            | Self::MethodMismatch { .. }
            | Self::MissingMethod
            | Self::UnsupportedVersion { .. } => ErrorCodes::INVALID_REQUEST,
        }
    }

    /// Builds the `error` member of a response reporting this failure.
    #[must_use]
    pub fn to_response_error(&self) -> ResponseError {
        ResponseError::from_error(self.error_code(), self)
    }
}

#[cfg(test)]
mod tests;
