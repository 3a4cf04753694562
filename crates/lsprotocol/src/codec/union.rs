//! Shared decode step for the `lsp_union!` types.

use serde_json::Value;

use crate::error::ProtocolError;

/// Runs `attempt` over `raw` after rejecting `null`.
///
/// `attempt` tries the alternatives in declared order and returns the first
/// one that decodes. When none does, the error names every alternative and
/// quotes the offending JSON text.
pub(crate) fn decode_alternatives<T>(
    union: &'static str,
    alternatives: &'static [&'static str],
    raw: &Value,
    attempt: impl FnOnce(&Value) -> Option<T>,
) -> Result<T, ProtocolError> {
    if raw.is_null() {
        return Err(ProtocolError::null_union(union, alternatives));
    }
    attempt(raw).ok_or_else(|| ProtocolError::union_mismatch(union, alternatives, raw))
}
