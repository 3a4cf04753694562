//! Language Server Protocol 3.18 data model.
//!
//! The `lsprotocol` crate binds every structure, enumeration and union of the
//! protocol to a Rust type whose JSON encoding matches the wire format
//! exactly. It sits below any transport: it neither frames nor routes
//! messages, it only turns JSON into typed values and back.
//!
//! # Decoding rules
//!
//! - Records use camelCase keys and omit absent optional fields. Optional
//!   fields that also admit `null` keep the two states apart.
//! - Enumerations are open: published values are constants and anything else
//!   the peer sends survives a round trip.
//! - Unions try their alternatives in declared order and keep the first one
//!   that decodes without unknown or missing keys. `null` never decodes into a
//!   union that does not list it.
//! - Envelopes check that `method`, `id` and `jsonrpc` are present before
//!   looking at the payload. See [`message`].
//!
//! # Example
//!
//! ```rust,no_run
//! use lsprotocol::config::DecodeConfig;
//! use lsprotocol::message::{IncomingMessage, decode_message};
//! use lsprotocol::request::Hover;
//!
//! let bytes = br#"{"jsonrpc":"2.0","id":1,"method":"textDocument/hover",
//!     "params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":0,"character":3}}}"#;
//! if let IncomingMessage::Request(request) = decode_message(bytes, &DecodeConfig::default())
//!     .expect("decode")
//! {
//!     let hover = request.parse::<Hover>().expect("hover params");
//!     assert_eq!(hover.params.position.character, 3);
//! }
//! ```

#[macro_use]
mod macros;

pub mod codec;
pub mod config;
pub mod error;
pub mod message;
pub mod methods;
pub mod notification;
pub mod request;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::codec::Tuple;
pub use self::config::{DecodeConfig, ParamsMode};
pub use self::error::{ProtocolError, Result};
pub use self::message::{
    IncomingMessage, JSONRPC_VERSION, LspNotification, LspRequest, NotificationMessage, RequestId,
    RequestMessage, ResponseError, ResponseMessage, decode_message,
};
pub use self::methods::{NOTIFICATION_METHODS, NotificationMethod, REQUEST_METHODS, RequestMethod};
pub use self::types::*;
