//! Argument checks and query-string building shared by every operation.

use crate::error::ArgumentError;

use std::collections::BTreeMap;

/// Caller-supplied query parameters. Ordered so the encoded query is stable.
pub type Params = BTreeMap<String, String>;

const FORBIDDEN_IDENTIFIER_CHARS: &[char] = &['/', '?', '#', ';', '&'];

/// An identifier becomes a single URL path segment; it must be non-blank and
/// must not contain path, query or batch separators.
#[track_caller]
pub fn validate_identifier(name: &'static str, identifier: &str) -> Result<(), ArgumentError> {
    if identifier.trim().is_empty() {
        return Err(ArgumentError::empty(name));
    }

    if let Some(c) = identifier
        .chars()
        .find(|c| FORBIDDEN_IDENTIFIER_CHARS.contains(c) || c.is_whitespace())
    {
        return Err(ArgumentError::malformed(
            name,
            identifier,
            format!("contains forbidden character {c:?}"),
        ));
    }

    Ok(())
}

/// Validate a batch of identifiers and join them with `;`.
#[track_caller]
pub fn join_identifiers<S: AsRef<str>>(
    name: &'static str,
    identifiers: &[S],
) -> Result<String, ArgumentError> {
    if identifiers.is_empty() {
        return Err(ArgumentError::empty_list(name));
    }

    for identifier in identifiers {
        validate_identifier(name, identifier.as_ref())?;
    }

    Ok(identifiers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(";"))
}

/// Keep only `allowed` keys and form-encode them. Unknown keys are dropped
/// without error; no params yields an empty string.
pub fn filter_query(params: &Params, allowed: &[&str]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter().filter(|(key, _)| allowed.contains(&key.as_str())) {
        query.append_pair(key, value);
    }
    query.finish()
}
