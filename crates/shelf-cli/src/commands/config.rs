//! Config command handlers

use anyhow::{Context, Result};

use shelf_core::Config;

use crate::output::Output;

/// Show the effective configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load()?;
    output.print_config(&config, &Config::config_file_path())
}

/// Set a configuration value and save it
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let path = Config::config_file_path();
    let mut config = Config::load_from_path(&path)?;
    config.set_value(&key, &value)?;
    config
        .save_to_path(&path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));
    Ok(())
}
