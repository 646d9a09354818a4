//! Subcommand handlers for config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, ConfigError, Settings, DEFAULT_CONFIG};

/// Handle config subcommand actions.
///
/// `settings` are the effective settings without command-line overrides.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), ConfigError> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(default_path);
    match action {
        ConfigAction::Show => {
            print!("{}", show_config(&path, settings));
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&path)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

/// Describe the effective settings and where the config file lives.
pub fn show_config(path: &Path, settings: &Settings) -> String {
    let status = if path.exists() { "exists" } else { "not found" };
    format!(
        "Current configuration:\n  \
         Max width: {}\n  \
         Max height: {}\n  \
         Character ratio: {}\n  \
         Edge threshold: {}{}\n  \
         Palette: {}\n\n\
         Config file: {} ({})\n",
        settings.max_width,
        settings.max_height,
        settings.character_ratio,
        settings.edge_threshold,
        if settings.render_options().edges_enabled() { "" } else { " (disabled)" },
        settings.render_options().palette.name(),
        path.display(),
        status,
    )
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
