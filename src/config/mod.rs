//! Project configuration management for `assetref.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `[project]`        | Namespace, output file, support directory      |
//! | `[assets]`         | Asset roots, kind priority, extension override |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{AssetsSection, KindSection, ProjectSection};

use util::find_config_file;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::{cli::Cli, log, utils::normalize_path};

/// Root configuration structure representing assetref.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Generation target settings
    #[serde(default)]
    pub project: ProjectSection,

    /// Asset scanning and classification settings
    #[serde(default)]
    pub assets: AssetsSection,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file `{}` not found in the current directory or any parent",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        config.finalize()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring:", display_path);
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Resolve root-relative paths and validate after loading.
    fn finalize(&mut self) -> Result<()> {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.validate()?;

        // Asset roots become absolute; output paths stay root-relative and
        // are resolved against the root at write time.
        let root = self.root.clone();
        self.assets.roots = self
            .assets
            .roots
            .iter()
            .map(|p| normalize_path(&root.join(p)))
            .collect();

        Ok(())
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.project.namespace.is_empty() {
            errors.push("[project] namespace must be set".to_string());
        } else if !is_identifier(&self.project.namespace) {
            errors.push(format!(
                "[project] namespace `{}` is not a valid identifier",
                self.project.namespace
            ));
        }

        if self.project.output.is_absolute() {
            errors.push("[project] output must be relative to the project root".to_string());
        }

        if self.assets.kinds.is_empty() {
            errors.push("[assets] kinds must not be empty".to_string());
        }
        for (i, kind) in self.assets.kinds.iter().enumerate() {
            if self.assets.kinds[..i].contains(kind) {
                errors.push(format!("[assets] duplicate kind `{}`", kind.tag()));
            }
        }

        for root in &self.assets.roots {
            if root.is_absolute() {
                errors.push(format!(
                    "[assets] root `{}` must be relative to the project root",
                    root.display()
                ));
            }
        }

        if !errors.is_empty() {
            bail!(ConfigError::Validation(errors.join("\n")));
        }
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Directory receiving the static support files, relative to the
    /// project root.
    pub fn support_dir(&self) -> PathBuf {
        self.project.support_dir.clone().unwrap_or_else(|| {
            self.project
                .output
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        })
    }
}

/// A plain Rust identifier: alphabetic or underscore start, then word chars.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// tests
// ============================================================================
