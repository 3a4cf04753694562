//! Window messages and document display requests.

use serde::{Deserialize, Serialize};

use super::base::Uri;
use super::basic::Range;
use super::enums::MessageType;

/// Parameters of `window/showMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    /// The message type.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The actual message.
    pub message: String,
}

/// An action offered to the user by `window/showMessageRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageActionItem {
    /// A short title like `"Retry"`.
    pub title: String,
}

/// Parameters of `window/showMessageRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageRequestParams {
    /// The message type.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The actual message.
    pub message: String,
    /// The message action items to present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MessageActionItem>>,
}

/// Parameters of `window/logMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageParams {
    /// The message type.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The actual message.
    pub message: String,
}

/// Parameters of `window/showDocument`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDocumentParams {
    /// The uri to show.
    pub uri: Uri,
    /// Show the resource in an external program, like a browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    /// Whether the editor showing the document should take focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_focus: Option<bool>,
    /// Range to select, for text documents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Range>,
}

/// The result of `window/showDocument`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentResult {
    /// Whether the show was successful.
    pub success: bool,
}
