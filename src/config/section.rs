//! `assetref.toml` section definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::generate::{AssetClassifier, AssetKind};

// ============================================================================
// [project]
// ============================================================================

/// `[project]` - what to generate and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// Module name wrapping the generated declarations, written verbatim
    /// into the output. Must be a valid Rust identifier.
    pub namespace: String,

    /// Asset references file, relative to the project root.
    pub output: PathBuf,

    /// Directory for the static support files. Defaults to the output
    /// file's parent.
    pub support_dir: Option<PathBuf>,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            output: PathBuf::from("src/asset_references.rs"),
            support_dir: None,
        }
    }
}

// ============================================================================
// [assets]
// ============================================================================

/// `[assets]` - where to scan and how to classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Directories scanned for asset files, relative to the project root.
    pub roots: Vec<PathBuf>,

    /// Classification priority order. The first kind claiming a file wins.
    pub kinds: Vec<AssetKind>,

    /// Per-kind overrides (`[assets.texture]` etc.).
    pub texture: KindSection,
    pub sound: KindSection,
    pub effect: KindSection,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("assets")],
            kinds: AssetKind::STANDARD_ORDER.to_vec(),
            texture: KindSection::default(),
            sound: KindSection::default(),
            effect: KindSection::default(),
        }
    }
}

/// Per-kind settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KindSection {
    /// Extension override, lowercase without the dot.
    pub extensions: Option<Vec<String>>,
}

impl AssetsSection {
    fn kind_section(&self, kind: AssetKind) -> &KindSection {
        match kind {
            AssetKind::Texture => &self.texture,
            AssetKind::Sound => &self.sound,
            AssetKind::Effect => &self.effect,
        }
    }

    /// Build the classifier list in configured priority order.
    pub fn classifiers(&self) -> Vec<AssetClassifier> {
        self.kinds
            .iter()
            .map(|&kind| match &self.kind_section(kind).extensions {
                Some(extensions) => AssetClassifier {
                    kind,
                    extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
                },
                None => AssetClassifier::standard(kind),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let assets = AssetsSection::default();
        assert_eq!(assets.roots, vec![PathBuf::from("assets")]);
        assert_eq!(assets.kinds, AssetKind::STANDARD_ORDER.to_vec());
        assert!(assets.texture.extensions.is_none());
    }

    #[test]
    fn test_classifiers_follow_kind_order() {
        let assets = AssetsSection {
            kinds: vec![AssetKind::Sound, AssetKind::Texture],
            ..AssetsSection::default()
        };
        let kinds: Vec<AssetKind> = assets.classifiers().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![AssetKind::Sound, AssetKind::Texture]);
    }

    #[test]
    fn test_extension_override_lowercased() {
        let assets = AssetsSection {
            sound: KindSection {
                extensions: Some(vec!["WAV".to_string(), "xm".to_string()]),
            },
            ..AssetsSection::default()
        };
        let classifiers = assets.classifiers();
        let sound = classifiers
            .iter()
            .find(|c| c.kind == AssetKind::Sound)
            .unwrap();
        assert_eq!(sound.extensions, vec!["wav", "xm"]);
    }
}
