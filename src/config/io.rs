//! Configuration file I/O operations

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.artgrid/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".artgrid")
    }

    /// Get the global config file path (~/.artgrid/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load global configuration from ~/.artgrid/config.toml
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::global_config_path())
    }

    /// Write this configuration to `path`, replacing any existing file.
    ///
    /// Another artgrid process writing the same file makes this fail fast
    /// instead of waiting. The file is replaced by rename, so readers never
    /// see a half-written config.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let content = format!("{CONFIG_HEADER}{body}");

        let _lock = WriteLock::acquire(path)?;
        replace_file(path, content.as_bytes())
    }
}

const CONFIG_HEADER: &str = "\
# artgrid configuration
# Missing keys fall back to built-in defaults.

";

/// Exclusive advisory lock on `<config>.lock`, held until dropped
struct WriteLock(File);

impl WriteLock {
    fn acquire(config_path: &Path) -> Result<Self> {
        let lock_path = config_path.with_extension("toml.lock");
        let file = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        file.try_lock_exclusive().with_context(|| {
            format!(
                "{} is being written by another artgrid process",
                config_path.display()
            )
        })?;
        Ok(Self(file))
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

/// Write `content` next to `path` and rename it over `path`
fn replace_file(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");
    let mut temp = File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
    temp.write_all(content)
        .and_then(|()| temp.sync_all())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    drop(temp);

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to replace config file: {}", path.display()));
    }
    Ok(())
}
