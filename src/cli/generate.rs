//! The `generate` command: scan the project and write the generated files.

use std::fs;

use anyhow::{Context, Result};

use crate::{
    config::ProjectConfig,
    debug,
    generate::{self, GeneratedSet},
    log,
    project::scan_project,
};

use super::GenerateArgs;

/// Run one generation pass and write every produced file.
pub fn run(config: &ProjectConfig, args: &GenerateArgs) -> Result<()> {
    let set = build_set(config)?;

    if args.dry {
        for file in &set.files {
            log!("generate"; "would write {}", file.path.display());
        }
        return Ok(());
    }

    write_set(config, &set)?;
    Ok(())
}

/// Scan the project and produce the full generated file set (no writes).
pub fn build_set(config: &ProjectConfig) -> Result<GeneratedSet> {
    let files = scan_project(config);
    debug!("scan"; "{} candidate files", files.len());

    let classifiers = config.assets.classifiers();
    let set = generate::generate(&files, &classifiers, config)?;
    Ok(set)
}

/// Write every generated file under the project root.
fn write_set(config: &ProjectConfig, set: &GeneratedSet) -> Result<()> {
    for file in &set.files {
        let target = config.root_join(&file.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&target, &file.contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        log!("generate"; "{}", file.path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn project_in(dir: &TempDir) -> ProjectConfig {
        let root = dir.path();
        fs::create_dir_all(root.join("assets/Sounds")).unwrap();
        fs::write(root.join("assets/Sounds/Hit1.wav"), "wav").unwrap();
        fs::write(root.join("assets/Sounds/Hit2.wav"), "wav").unwrap();

        let mut config = ProjectConfig::default();
        config.project.namespace = "game_assets".to_string();
        config.root = root.to_path_buf();
        config.assets.roots = vec![root.join("assets")];
        config
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        run(&config, &GenerateArgs { dry: false }).unwrap();

        let references =
            fs::read_to_string(dir.path().join("src/asset_references.rs")).unwrap();
        assert!(references.contains("pub mod game_assets {"));
        assert!(references.contains("pub const VARIANTS: u32 = 2;"));
        assert!(dir.path().join("src/shader_params.rs").exists());
        assert!(dir.path().join("src/shader_wrapper.rs").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        run(&config, &GenerateArgs { dry: true }).unwrap();

        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_build_set_paths_are_root_relative() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        let set = build_set(&config).unwrap();
        assert!(set.files.iter().all(|f| f.path.is_relative()));
        assert_eq!(set.files[0].path, PathBuf::from("src/asset_references.rs"));
    }
}
