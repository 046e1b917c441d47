//! Nested-scope rendering of the asset tree.
//!
//! Each directory node becomes a `pub mod` scope; each entry becomes a
//! nested scope holding its kind's declarations. A synthetic family scope
//! precedes the first member of every variant family. The member entries
//! are always still emitted individually.

use std::sync::LazyLock;

use regex::Regex;

use super::error::GenerateError;
use super::group::{VariantFamily, group_variants};
use super::tree::{AssetEntry, PathNode};

/// Any character that cannot appear in an identifier.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("non-word regex is valid"));

/// Map an arbitrary file or directory name to identifier-safe text.
///
/// Non-word characters become underscores; trailing underscores (left over
/// from variant number slices or simply poor naming) are stripped.
/// Idempotent. Two distinct names may normalize to the same identifier;
/// both scopes are emitted as-is and the collision surfaces when the
/// consuming project compiles the generated file.
pub fn normalize_name(name: &str) -> String {
    NON_WORD
        .replace_all(name, "_")
        .trim_end_matches('_')
        .to_string()
}

/// Render the tree as nested `pub mod` scopes, one indentation level deep
/// (the caller wraps the result in the namespace module).
///
/// The root itself is unnamed; its children and root-level entries form
/// the first visible nesting level. Output is trimmed of trailing
/// whitespace and is a pure function of the tree.
pub fn render(root: &PathNode) -> Result<String, GenerateError> {
    render_node(root, 0)
}

fn render_node(node: &PathNode, depth: usize) -> Result<String, GenerateError> {
    let mut out = String::new();
    let indent = "    ".repeat(depth);

    if depth != 0 {
        out.push_str(&format!(
            "{indent}pub mod {} {{\n",
            normalize_name(&node.name)
        ));
    }

    let families = group_variants(&node.entries)?;
    let inner = format!("{indent}    ");
    let body = format!("{indent}        ");

    for (i, entry) in node.entries.iter().enumerate() {
        // The synthetic family scope goes right before its first member.
        if let Some(family) = families.iter().find(|f| f.representative == i) {
            let derived = family_entry(entry, family);
            push_entry_scope(&mut out, &derived, &inner, &body);
            out.push('\n');
        }

        push_entry_scope(&mut out, entry, &inner, &body);

        if i != node.entries.len() - 1 {
            out.push('\n');
        }
    }

    if !node.entries.is_empty() && !node.children.is_empty() {
        out.push('\n');
    }

    for (j, child) in node.children.values().enumerate() {
        if j != 0 {
            out.push('\n');
        }
        out.push_str(&render_node(child, depth + 1)?);
        out.push('\n');
    }

    if depth != 0 {
        out.push_str(&format!("{indent}}}\n"));
    }

    Ok(out.trim_end().to_string())
}

/// Emit one `pub mod <name> { <kind declarations> }` block.
fn push_entry_scope(out: &mut String, entry: &AssetEntry, inner: &str, body: &str) {
    out.push_str(&format!(
        "{inner}pub mod {} {{\n",
        normalize_name(&entry.name)
    ));
    out.push_str(&entry.kind.generate_code(entry, body));
    out.push('\n');
    out.push_str(&format!("{inner}}}\n"));
}

/// Derive the synthetic family entry from its first-seen member.
fn family_entry(member: &AssetEntry, family: &VariantFamily) -> AssetEntry {
    AssetEntry {
        name: family.prefix.clone(),
        relative_path: family_path(&member.relative_path),
        variant_count: Some(family.max_index),
        ..member.clone()
    }
}

/// Drop the trailing digit run from a path's file stem, keeping the
/// extension (`Sounds/Hit/Hit1.wav` -> `Sounds/Hit/Hit.wav`).
fn family_path(path: &str) -> String {
    let (stem, ext) = match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => (stem, Some(ext)),
        _ => (path, None),
    };

    let stem = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::kind::standard_classifiers;
    use crate::generate::tree::build_tree;
    use crate::project::ProjectFile;

    fn pf(relative: &str) -> ProjectFile {
        ProjectFile::new(relative, relative)
    }

    fn rendered(paths: &[&str]) -> String {
        let files: Vec<ProjectFile> = paths.iter().map(|p| pf(p)).collect();
        let root = build_tree(&files, &standard_classifiers());
        render(&root).unwrap()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Hit-1!"), "Hit_1");
        assert_eq!(normalize_name("Player"), "Player");
        assert_eq!(normalize_name("snake_case"), "snake_case");
        assert_eq!(normalize_name("odd name.ext"), "odd_name_ext");
    }

    #[test]
    fn test_normalize_name_idempotent() {
        for name in ["Hit-1!", "Player", "a b c", "__x__", "!!!"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_render_variant_family_tree() {
        let out = rendered(&[
            "Sounds/Hit/Hit1.wav",
            "Sounds/Hit/Hit2.wav",
            "Sounds/Hit/Hit3.wav",
            "Textures/Player.png",
        ]);

        let expected = r#"    pub mod Sounds {
        pub mod Hit {
            pub mod Hit {
                pub const PATH: &str = "Sounds/Hit/Hit.wav";
                pub const VARIANTS: u32 = 3;
            }

            pub mod Hit1 {
                pub const PATH: &str = "Sounds/Hit/Hit1.wav";
            }

            pub mod Hit2 {
                pub const PATH: &str = "Sounds/Hit/Hit2.wav";
            }

            pub mod Hit3 {
                pub const PATH: &str = "Sounds/Hit/Hit3.wav";
            }
        }
    }

    pub mod Textures {
        pub mod Player {
            pub const PATH: &str = "Textures/Player.png";
        }
    }"#;

        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_root_level_file() {
        let out = rendered(&["Splash.png"]);

        let expected = r#"    pub mod Splash {
        pub const PATH: &str = "Splash.png";
    }"#;

        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_non_variant_passthrough() {
        let out = rendered(&["Sounds/Explosion.wav"]);

        // No family scope, just the single entry.
        assert_eq!(out.matches("pub mod Explosion").count(), 1);
        assert!(!out.contains("VARIANTS"));
    }

    #[test]
    fn test_blank_line_between_entries_and_children() {
        let out = rendered(&["Sounds/Step.wav", "Sounds/Hit/Hit1.wav"]);

        let expected = r#"    pub mod Sounds {
        pub mod Step {
            pub const PATH: &str = "Sounds/Step.wav";
        }

        pub mod Hit {
            pub mod Hit1 {
                pub const PATH: &str = "Sounds/Hit/Hit1.wav";
            }
        }
    }"#;

        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_deterministic() {
        let paths = [
            "Sounds/Hit/Hit1.wav",
            "Sounds/Hit/Hit2.wav",
            "Textures/Player.png",
            "Effects/Bloom.wgsl",
        ];
        assert_eq!(rendered(&paths), rendered(&paths));
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(rendered(&[]), "");
    }

    #[test]
    fn test_family_path() {
        assert_eq!(family_path("Sounds/Hit/Hit1.wav"), "Sounds/Hit/Hit.wav");
        assert_eq!(family_path("Sounds/Step12.ogg"), "Sounds/Step.ogg");
        assert_eq!(family_path("Hit1"), "Hit");
        // A dot in a directory name is not an extension.
        assert_eq!(family_path("v1.2/Hit1"), "v1.2/Hit");
    }

    #[test]
    fn test_names_are_normalized_in_scopes() {
        let out = rendered(&["Sound FX/Hit-Heavy.wav"]);

        assert!(out.contains("pub mod Sound_FX {"));
        assert!(out.contains("pub mod Hit_Heavy {"));
        // Paths stay verbatim.
        assert!(out.contains("\"Sound FX/Hit-Heavy.wav\""));
    }

    #[test]
    fn test_overflow_propagates() {
        let files = vec![pf("Sounds/Hit4294967296.wav")];
        let root = build_tree(&files, &standard_classifiers());
        assert!(render(&root).is_err());
    }
}
