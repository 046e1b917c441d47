//! Asset tree construction.
//!
//! A single pass over the project file list: classify each file
//! (first-match-wins), then attach it to the node mirroring its directory
//! path. Files no classifier claims are silently dropped.

use std::collections::BTreeMap;

use crate::project::ProjectFile;

use super::kind::{AssetClassifier, AssetKind};

/// One logical declaration in the generated output.
///
/// Immutable once created. A synthetic family entry is a derived copy of
/// its first-seen member with `name`, `relative_path` and `variant_count`
/// overwritten; the member entries themselves are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Base file name without extension, or the family prefix for
    /// synthetic entries.
    pub name: String,
    /// Asset-root-relative path with forward slashes.
    pub relative_path: String,
    pub kind: AssetKind,
    /// Source file backing this entry.
    pub source: ProjectFile,
    /// Set only on synthetic family entries: highest variant index observed.
    pub variant_count: Option<u32>,
}

/// One directory level of the asset tree.
#[derive(Debug, Default)]
pub struct PathNode {
    /// Directory segment name; empty for the root.
    pub name: String,
    /// Child nodes keyed by exact, case-sensitive segment text. A
    /// `BTreeMap` keeps child iteration sorted and the output reproducible.
    pub children: BTreeMap<String, PathNode>,
    /// Entries in file-enumeration order.
    pub entries: Vec<AssetEntry>,
}

impl PathNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Build the asset tree from project files, in input order.
///
/// Classifiers are tested in list order per file; the first eligible one
/// wins. Files with no directory component attach to the root node.
pub fn build_tree(files: &[ProjectFile], classifiers: &[AssetClassifier]) -> PathNode {
    let mut root = PathNode::default();

    for file in files {
        let Some(classifier) = classifiers.iter().find(|c| c.is_eligible(file)) else {
            continue;
        };

        let segments: Vec<&str> = file.relative.split('/').collect();
        let Some((base, dirs)) = segments.split_last() else {
            continue;
        };

        let mut node = &mut root;
        for dir in dirs {
            node = node
                .children
                .entry((*dir).to_string())
                .or_insert_with(|| PathNode::named(dir));
        }

        node.entries.push(AssetEntry {
            name: strip_extension(base).to_string(),
            relative_path: file.relative.clone(),
            kind: classifier.kind,
            source: file.clone(),
            variant_count: None,
        });
    }

    root
}

/// Strip the final extension from a file name segment (`Hit1.wav` -> `Hit1`).
fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}
