//! Asset kind descriptors and per-kind code generation.

use serde::{Deserialize, Serialize};

use crate::project::ProjectFile;

use super::tree::AssetEntry;

// ============================================================================
// AssetKind
// ============================================================================

/// Category of asset a classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Texture,
    Sound,
    Effect,
}

impl AssetKind {
    /// Standard classification priority order.
    pub const STANDARD_ORDER: [Self; 3] = [Self::Texture, Self::Sound, Self::Effect];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Sound => "sound",
            Self::Effect => "effect",
        }
    }

    /// Extensions recognized by default, lowercase without the dot.
    pub const fn default_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Texture => &["png", "jpg", "jpeg", "bmp"],
            Self::Sound => &["wav", "ogg", "mp3", "flac"],
            Self::Effect => &["wgsl", "glsl", "hlsl", "fx"],
        }
    }

    /// Whether numbered siblings of this kind form variant families.
    pub const fn is_variant_capable(self) -> bool {
        matches!(self, Self::Sound)
    }

    /// Render the declaration body for one entry, every line prefixed with
    /// `indent`. No trailing newline.
    pub fn generate_code(self, entry: &AssetEntry, indent: &str) -> String {
        let mut lines = vec![format!(
            "{indent}pub const PATH: &str = \"{}\";",
            entry.relative_path
        )];

        match self {
            Self::Texture => {}
            Self::Sound => {
                // Only the synthetic family entry carries a variant count.
                if let Some(count) = entry.variant_count {
                    lines.push(format!("{indent}pub const VARIANTS: u32 = {count};"));
                }
            }
            Self::Effect => {
                lines.push(format!(
                    "{indent}pub const PASS: &str = \"{}Pass\";",
                    entry.name
                ));
            }
        }

        lines.join("\n")
    }
}

// ============================================================================
// AssetClassifier
// ============================================================================

/// A pluggable classification rule: which files belong to a kind.
///
/// Classifiers are tested in list order, first match wins, so the caller
/// controls priority by ordering the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetClassifier {
    pub kind: AssetKind,
    /// Eligible extensions, lowercase without the dot.
    pub extensions: Vec<String>,
}

impl AssetClassifier {
    /// Classifier with the kind's default extension set.
    pub fn standard(kind: AssetKind) -> Self {
        Self {
            kind,
            extensions: kind
                .default_extensions()
                .iter()
                .map(|e| (*e).to_string())
                .collect(),
        }
    }

    /// Extension-membership test, case-insensitive on the extension.
    pub fn is_eligible(&self, file: &ProjectFile) -> bool {
        let Some((_, ext)) = file.relative.rsplit_once('.') else {
            return false;
        };
        if ext.contains('/') {
            return false;
        }

        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}

/// The standard classifier list: texture, sound, effect.
pub fn standard_classifiers() -> Vec<AssetClassifier> {
    AssetKind::STANDARD_ORDER
        .iter()
        .map(|&kind| AssetClassifier::standard(kind))
        .collect()
}
