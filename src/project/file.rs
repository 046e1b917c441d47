//! Project file records.

use std::path::PathBuf;

/// One file discovered under a configured asset root.
///
/// The generator core only ever reads `relative`; `absolute` is the opaque
/// on-disk handle carried along for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// Asset-root-relative path with forward slashes (`Sounds/Hit/Hit1.wav`).
    pub relative: String,
    /// Absolute path on disk.
    pub absolute: PathBuf,
}

impl ProjectFile {
    pub fn new(relative: impl Into<String>, absolute: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            absolute: absolute.into(),
        }
    }
}
