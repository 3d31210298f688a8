//! Field presence rules shared by the wire encodings

#![allow(clippy::ref_option)]

use serde::Serializer;

/// Skip an optional string that is absent or empty
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Skip an optional list that is absent or empty
pub fn is_none_or_empty<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}

/// Emit absent content as an empty string
pub fn content_or_empty<S: Serializer>(content: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(content.as_deref().unwrap_or_default())
}
