//! Primitive aliases and string-literal discriminants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Any JSON value.
pub type LspAny = serde_json::Value;

/// A JSON object with arbitrary members.
pub type LspObject = serde_json::Map<String, LspAny>;

/// A JSON array with arbitrary elements.
pub type LspArray = Vec<LspAny>;

/// Identifier of a change annotation managed by a workspace edit.
pub type ChangeAnnotationIdentifier = String;

/// Regular expression engine name, for example `"ECMAScript"`.
pub type RegularExpressionEngineKind = String;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps the given text.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the wrapped text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwraps the text.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype! {
    /// A URI naming a text document, for example `file:///src/main.rs`.
    ///
    /// The text is carried verbatim; no normalisation is applied.
    DocumentUri
}

string_newtype! {
    /// A URI that does not necessarily name a text document.
    Uri
}

string_newtype! {
    /// A glob pattern such as `**/*.{ts,js}`.
    Pattern
}

/// The JSON `null` value, used as the result of requests that return nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LspNull;

impl Serialize for LspNull {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for LspNull {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <()>::deserialize(deserializer).map(|()| Self)
    }
}

string_literal! {
    /// The `"create"` discriminant of [`crate::CreateFile`].
    pub struct CreateKind = "create";
}

string_literal! {
    /// The `"rename"` discriminant of [`crate::RenameFile`].
    pub struct RenameKind = "rename";
}

string_literal! {
    /// The `"delete"` discriminant of [`crate::DeleteFile`].
    pub struct DeleteKind = "delete";
}

string_literal! {
    /// The `"begin"` discriminant of [`crate::WorkDoneProgressBegin`].
    pub struct BeginKind = "begin";
}

string_literal! {
    /// The `"report"` discriminant of [`crate::WorkDoneProgressReport`].
    pub struct ReportKind = "report";
}

string_literal! {
    /// The `"end"` discriminant of [`crate::WorkDoneProgressEnd`].
    pub struct EndKind = "end";
}

string_literal! {
    /// The `"full"` discriminant of full diagnostic reports.
    pub struct FullKind = "full";
}

string_literal! {
    /// The `"unchanged"` discriminant of unchanged diagnostic reports.
    pub struct UnchangedKind = "unchanged";
}

string_literal! {
    /// The `"snippet"` discriminant of [`crate::StringValue`].
    pub struct SnippetKind = "snippet";
}
