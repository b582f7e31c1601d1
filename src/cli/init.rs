//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use artgrid::config::Config;

/// Write a config file with default values
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
