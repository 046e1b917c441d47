//! Variant family detection within one tree node.

use rustc_hash::FxHashSet;

use super::error::GenerateError;
use super::matcher::variant_suffix;
use super::tree::AssetEntry;

/// A group of sibling entries sharing a name prefix and trailing numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFamily {
    /// Common non-numeric prefix.
    pub prefix: String,
    /// Index into the node's entry list of the first-seen member.
    pub representative: usize,
    /// Highest trailing number observed among entries containing the prefix.
    pub max_index: u32,
}

/// Detect variant families among a node's entries, in first-seen order.
///
/// Only variant-capable entries seed families; each distinct prefix is
/// finalized once, at its first occurrence. Families are additive: the
/// member entries are still emitted individually.
///
/// `max_index` scans every entry whose name contains the prefix as a plain
/// substring, so an unrelated `HitBox2` counts toward family `Hit`. That
/// matches the long-standing generator behavior and is pinned by tests.
pub fn group_variants(entries: &[AssetEntry]) -> Result<Vec<VariantFamily>, GenerateError> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut families = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        if !entry.kind.is_variant_capable() {
            continue;
        }

        let Some(m) = variant_suffix(&entry.name)
            .map_err(|e| GenerateError::overflow(&entry.relative_path, e))?
        else {
            continue;
        };

        if !seen.insert(m.prefix.to_string()) {
            continue;
        }

        families.push(VariantFamily {
            prefix: m.prefix.to_string(),
            representative: i,
            max_index: max_variant_index(entries, m.prefix)?,
        });
    }

    Ok(families)
}

/// Highest trailing number among entries whose name contains `prefix`
/// (unanchored substring), floor 1.
fn max_variant_index(entries: &[AssetEntry], prefix: &str) -> Result<u32, GenerateError> {
    let mut max = 1;

    for entry in entries {
        if !entry.name.contains(prefix) {
            continue;
        }

        if let Some(m) = variant_suffix(&entry.name)
            .map_err(|e| GenerateError::overflow(&entry.relative_path, e))?
        {
            max = max.max(m.index);
        }
    }

    Ok(max)
}
