use crate::error::{Error, Result};
use crate::service::period::{Selection, ALL_DAYS};

/// Turns user input into a selection.
///
/// Accepts "all" / "All days", an exact day key, or a case-insensitive prefix
/// that matches exactly one key ("5th" -> "5th dec").
pub fn resolve_selection(input: &str, day_keys: &[String]) -> Result<Selection> {
    let needle = input.trim();
    if needle.eq_ignore_ascii_case("all") || needle.eq_ignore_ascii_case(ALL_DAYS) {
        return Ok(Selection::AllDays);
    }
    expand_day_key(needle, day_keys).map(Selection::Day)
}

pub fn expand_day_key(input: &str, day_keys: &[String]) -> Result<String> {
    // 1. Exact match
    if let Some(key) = day_keys.iter().find(|k| k.as_str() == input) {
        return Ok(key.clone());
    }

    // 2. Case-insensitive match, then prefix match
    let lowered = input.to_lowercase();
    if let Some(key) = day_keys.iter().find(|k| k.to_lowercase() == lowered) {
        return Ok(key.clone());
    }

    let matches: Vec<String> = day_keys
        .iter()
        .filter(|k| !lowered.is_empty() && k.to_lowercase().starts_with(&lowered))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(Error::UnknownDay(input.to_string())),
        _ => Err(Error::AmbiguousDay {
            input: input.to_string(),
            candidates: matches,
        }),
    }
}
