use std::env;
use std::ffi::OsStr;
use std::str::FromStr;

pub fn as_boolean_truthy<K: AsRef<OsStr>>(key: K) -> bool {
    env::var(key)
        .ok()
        .is_some_and(|a| a.to_lowercase() == "true" || a == "1")
}

/// Returns `None` when `key` is unset and an error message when the value does not parse.
pub fn parse_optional<K: AsRef<OsStr>, T>(key: K) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Parse error for '{}': {}", value, e)),
        Err(_) => Ok(None),
    }
}
