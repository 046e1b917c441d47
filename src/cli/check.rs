//! The `check` command: verify the generated files on disk are current.

use std::fs;

use anyhow::{Result, bail};

use crate::{config::ProjectConfig, log};

/// Regenerate in memory and diff against the files on disk.
///
/// Fails listing every stale or missing file; intended for CI.
pub fn run(config: &ProjectConfig) -> Result<()> {
    let set = super::generate::build_set(config)?;

    let mut outdated = Vec::new();
    for file in &set.files {
        let target = config.root_join(&file.path);
        match fs::read_to_string(&target) {
            Ok(on_disk) if on_disk == file.contents => {}
            Ok(_) => outdated.push(format!("{} (stale)", file.path.display())),
            Err(_) => outdated.push(format!("{} (missing)", file.path.display())),
        }
    }

    if outdated.is_empty() {
        log!("check"; "{} files up to date", set.files.len());
        return Ok(());
    }

    for line in &outdated {
        log!("error"; "{line}");
    }
    bail!(
        "{} generated file(s) out of date; run `assetref generate`",
        outdated.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GenerateArgs;
    use std::fs;
    use tempfile::TempDir;

    fn project_in(dir: &TempDir) -> ProjectConfig {
        let root = dir.path();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/Player.png"), "png").unwrap();

        let mut config = ProjectConfig::default();
        config.project.namespace = "game_assets".to_string();
        config.root = root.to_path_buf();
        config.assets.roots = vec![root.join("assets")];
        config
    }

    #[test]
    fn test_check_fails_when_missing() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        assert!(run(&config).is_err());
    }

    #[test]
    fn test_check_passes_after_generate() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        crate::cli::generate::run(&config, &GenerateArgs { dry: false }).unwrap();
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_check_fails_when_stale() {
        let dir = TempDir::new().unwrap();
        let config = project_in(&dir);

        crate::cli::generate::run(&config, &GenerateArgs { dry: false }).unwrap();

        // A new asset appears but generation is not re-run.
        fs::write(dir.path().join("assets/Enemy.png"), "png").unwrap();
        assert!(run(&config).is_err());
    }
}
