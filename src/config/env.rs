//! # Environment variable helpers
//!
//! Every reader has a `_from` twin taking a provider closure, so parsing can
//! be tested without touching the process environment.

use std::str::FromStr;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads a boolean flag. `"1"`, `"true"`, `"yes"` and `"on"` are truthy
/// (case-insensitive, surrounding quotes ignored); anything else set is falsy.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(process_env, name, default)
}

pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads a variable as a non-blank string. Blank values count as unset.
pub fn read_string(name: &str) -> Option<String> {
    read_string_from(process_env, name)
}

pub fn read_string_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parses a variable, returning `None` when it is unset or unparsable.
pub fn read_parsed<T: FromStr>(name: &str) -> Option<T> {
    read_parsed_from(process_env, name)
}

pub fn read_parsed_from<F, T>(provider: F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    read_string_from(provider, name).and_then(|s| s.parse::<T>().ok())
}

/// Reads a `u32`, falling back to `default` when unset or unparsable.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_parsed(name).unwrap_or(default)
}
