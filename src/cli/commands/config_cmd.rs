//! Configuration display command.

use console::style;

use crate::config::{Config, Settings};

/// Show the effective settings and where they came from.
pub fn cmd_config_show(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    match config.source_path {
        Some(ref path) => eprintln!("{} Config file: {}", style("→").cyan(), path.display()),
        None => eprintln!(
            "{} No config file found, using defaults",
            style("!").yellow()
        ),
    }

    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
