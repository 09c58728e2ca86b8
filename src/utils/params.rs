// Lenient query-string helpers: bad input is treated as absent, never rejected.

use std::str::FromStr;

use serde::de::DeserializeOwned;

/// Parses a numeric parameter; blank or unparseable values give `None`.
pub fn parse_number<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.map(str::trim).filter(|v| !v.is_empty())?.parse().ok()
}

/// Non-blank string parameter.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Decodes a JSON-encoded parameter, logging and dropping malformed input.
pub fn parse_json<T: DeserializeOwned>(name: &str, value: Option<&str>) -> Option<T> {
    let raw = non_empty(value)?;
    match serde_json::from_str(raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(param = name, error = %e, "ignoring malformed JSON parameter");
            None
        }
    }
}
