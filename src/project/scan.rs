//! Project file enumeration (read-only, no side effects).

use std::path::Path;

use jwalk::WalkDir;

use crate::config::ProjectConfig;

use super::ProjectFile;

/// Enumerate asset files under every configured asset root.
///
/// Hidden files and directories (leading dot) are skipped. The result is
/// sorted by relative path so enumeration order - and therefore the
/// generated output - is stable across platforms and filesystems.
///
/// Nonexistent roots contribute nothing; they are validated at config load,
/// not here.
pub fn scan_project(config: &ProjectConfig) -> Vec<ProjectFile> {
    let mut files = Vec::new();

    for root in &config.assets.roots {
        scan_root(&mut files, root);
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    files
}

/// Walk one root, collecting regular files with root-relative paths.
fn scan_root(files: &mut Vec<ProjectFile>, root: &Path) {
    if !root.exists() {
        return;
    }

    for entry in WalkDir::new(root)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };

        // Forward slashes regardless of host separator.
        let relative = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push(ProjectFile {
            relative,
            absolute: path,
        });
    }
}
