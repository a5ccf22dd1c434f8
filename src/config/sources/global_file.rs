//! Global config file source: the platform config dir, e.g.
//! `~/.config/ai-bridge/config.toml` on Linux.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
/// `AI_BRIDGE_CONFIG_HOME` replaces the platform directory when set.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("AI_BRIDGE_CONFIG_HOME") {
        return Some(PathBuf::from(home).join("config.toml"));
    }
    ProjectDirs::from("org", "ai-bridge", "ai-bridge")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_config_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(
                config_path = %path.display(),
                "No user-level configuration file; using defaults"
            );
        }
    }
    Ok(builder)
}
