//! Trailing-number detection for variant asset names.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Matches a run of trailing decimal digits and the contiguous non-digit
/// run immediately before it (`Hit12` -> `Hit` + `12`). Digit runs anywhere
/// else in the name are ignored.
static END_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\d]+)(\d+)$").expect("end-number regex is valid"));

/// A base name split into its variant prefix and numeric suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSuffix<'a> {
    /// Non-digit run directly before the trailing digits.
    pub prefix: &'a str,
    /// Trailing digit run parsed as an integer.
    pub index: u32,
}

/// The trailing digit run of a name does not fit in `u32`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("trailing number in `{name}` does not fit in u32")]
pub struct VariantOverflow {
    pub name: String,
}

/// Split a base name ending in a numeric suffix.
///
/// Returns `None` for names that are empty, entirely digits, or have no
/// trailing digits. An unparseable digit run is an error, not a `None`:
/// the regex guarantees digits-only content, so failure can only mean
/// overflow.
pub fn variant_suffix(name: &str) -> Result<Option<VariantSuffix<'_>>, VariantOverflow> {
    let Some(caps) = END_NUMBER.captures(name) else {
        return Ok(None);
    };

    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let digits = caps.get(2).map_or("", |m| m.as_str());
    let index = digits.parse::<u32>().map_err(|_| VariantOverflow {
        name: name.to_string(),
    })?;

    Ok(Some(VariantSuffix { prefix, index }))
}
