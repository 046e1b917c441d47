//! Asset reference generation.
//!
//! Data flow: project files -> classification -> path tree -> variant
//! grouping -> nested-scope rendering -> generated file set. One pass,
//! synchronous, no I/O; writing the result is the caller's job.

pub mod emit;
mod error;
pub mod group;
pub mod kind;
pub mod matcher;
pub mod templates;
pub mod tree;

pub use error::GenerateError;
pub use kind::{AssetClassifier, AssetKind, standard_classifiers};

use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::project::ProjectFile;

/// One output file, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything one generation pass produces: the asset references file and
/// the two static shader-support files.
#[derive(Debug, Clone)]
pub struct GeneratedSet {
    pub files: Vec<GeneratedFile>,
}

/// Run one generation pass over the given files.
pub fn generate(
    files: &[ProjectFile],
    classifiers: &[AssetClassifier],
    config: &ProjectConfig,
) -> Result<GeneratedSet, GenerateError> {
    let namespace = &config.project.namespace;

    let root = tree::build_tree(files, classifiers);
    let body = emit::render(&root)?;

    let support_dir = config.support_dir();
    let files = vec![
        GeneratedFile {
            path: config.project.output.clone(),
            contents: templates::references_file(namespace, &body),
        },
        GeneratedFile {
            path: support_dir.join("shader_params.rs"),
            contents: templates::shader_params_file(namespace),
        },
        GeneratedFile {
            path: support_dir.join("shader_wrapper.rs"),
            contents: templates::shader_wrapper_file(namespace),
        },
    ];

    Ok(GeneratedSet { files })
}
