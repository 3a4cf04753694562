//! Decoding options for the dispatch helpers in [`crate::message`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::codec::strict;

/// How `params` payloads are matched against their record types.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ParamsMode {
    /// Ignore keys the record does not declare.
    #[default]
    Lenient,
    /// Reject keys the record does not declare, at every depth.
    Strict,
}

/// Errors encountered while parsing a [`ParamsMode`] from text.
pub type ParamsModeParseError = strum::ParseError;

impl ParamsMode {
    /// Decodes `value` into `T` under this mode.
    ///
    /// # Errors
    ///
    /// Returns the decode error when `value` does not fit `T`, or, in
    /// [`ParamsMode::Strict`], when it carries an undeclared key.
    pub fn decode<T>(self, value: &Value) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Lenient => T::deserialize(value),
            Self::Strict => strict::from_value(value),
        }
    }
}

/// Options consumed by [`crate::message::decode_message`] and the typed
/// `parse_with` helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Matching mode for `params` payloads.
    pub params: ParamsMode,
    /// Reject envelopes whose `jsonrpc` member is not `"2.0"`.
    pub require_version: bool,
}

impl DecodeConfig {
    /// Strict params and an enforced protocol version.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            params: ParamsMode::Strict,
            require_version: true,
        }
    }

    /// Returns a copy using the given params mode.
    #[must_use]
    pub const fn with_params(mut self, params: ParamsMode) -> Self {
        self.params = params;
        self
    }

    /// Returns a copy with version enforcement switched on or off.
    #[must_use]
    pub const fn with_require_version(mut self, require_version: bool) -> Self {
        self.require_version = require_version;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::types::Position;

    #[rstest]
    #[case("lenient", ParamsMode::Lenient)]
    #[case("STRICT", ParamsMode::Strict)]
    #[case("Strict", ParamsMode::Strict)]
    fn params_mode_parses_case_insensitively(#[case] text: &str, #[case] expected: ParamsMode) {
        let parsed: ParamsMode = text.parse().expect("params mode should parse");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn params_mode_rejects_unknown_text() {
        let result = "loose".parse::<ParamsMode>();
        assert!(result.is_err());
    }

    #[rstest]
    fn default_config_is_lenient_and_version_agnostic() {
        let config = DecodeConfig::default();
        assert_eq!(config.params, ParamsMode::Lenient);
        assert!(!config.require_version);
    }

    #[rstest]
    fn config_deserialises_with_missing_fields() {
        let config: DecodeConfig =
            serde_json::from_value(json!({ "params": "strict" })).expect("deserialise");
        assert_eq!(config, DecodeConfig::default().with_params(ParamsMode::Strict));
    }

    #[rstest]
    fn lenient_mode_ignores_extra_keys() {
        let value = json!({ "line": 1, "character": 2, "extra": true });
        let position: Position = ParamsMode::Lenient.decode(&value).expect("lenient decode");
        assert_eq!(position, Position::new(1, 2));
    }

    #[rstest]
    fn strict_mode_rejects_extra_keys() {
        let value = json!({ "line": 1, "character": 2, "extra": true });
        let error = ParamsMode::Strict
            .decode::<Position>(&value)
            .expect_err("strict decode should fail");
        let message = error.to_string();
        assert!(
            message.contains("extra"),
            "expected offending key in message: {message}"
        );
    }
}
